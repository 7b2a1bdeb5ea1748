use crate::board::PrizeBoard;
use crate::events::AppEvent;
use async_channel::Sender;
use gazectl::{Reply, Request, SOCKET_PATH};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{UnixListener, UnixStream};

pub async fn run_server(tx: Sender<AppEvent>, board: PrizeBoard) {
    // stale socket from a previous run
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", SOCKET_PATH, e);
            return;
        }
    };
    log::info!("Listening on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                tokio::spawn(handle_client(stream, tx.clone(), board.clone()));
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_client(stream: UnixStream, tx: Sender<AppEvent>, board: PrizeBoard) {
    let (reader, mut writer) = stream.into_split();
    let mut lines = BufReader::new(reader).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let request = match line.parse::<Request>() {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Ignoring request: {}", e);
                continue;
            }
        };

        if request == Request::Prize {
            let reply = format!("{}\n", Reply::Prize(board.get()));
            if let Err(e) = writer.write_all(reply.as_bytes()).await {
                log::error!("Failed to answer prize query: {}", e);
                break;
            }
        } else if let Some(event) = AppEvent::from_request(request)
            && tx.send(event).await.is_err()
        {
            break;
        }
    }
}
