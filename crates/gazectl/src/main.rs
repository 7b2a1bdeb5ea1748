use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use gazectl::{LandmarkSet, Reply, Request, SOCKET_PATH};
use std::io::{BufRead, BufReader, Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gazectl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Regenerate the wheel with fresh sectors and prizes
    Reset,
    /// Tell the daemon the display changed size
    Resize { width: u32, height: u32 },
    /// Save the current wheel, ray and prize as a PNG
    Snapshot { path: PathBuf },
    /// Print the prize currently on display
    Prize,
    /// Send one frame of face landmarks (JSON array of faces)
    Frame {
        /// Read the payload from this file instead of stdin
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let request = match cli.command {
        Commands::Reset => Request::Reset,
        Commands::Resize { width, height } => Request::Resize { width, height },
        Commands::Snapshot { path } => Request::Snapshot(std::path::absolute(&path)?),
        Commands::Prize => Request::Prize,
        Commands::Frame { file } => Request::Frame(read_faces(file)?),
    };

    let mut stream = connect()?;
    writeln!(stream, "{}", request)?;

    if request == Request::Prize {
        let mut line = String::new();
        BufReader::new(&stream).read_line(&mut line)?;
        match line.parse::<Reply>()? {
            Reply::Prize(Some(value)) => println!("{}", value),
            Reply::Prize(None) => println!("no prize yet"),
        }
    }
    Ok(())
}

fn read_faces(file: Option<PathBuf>) -> anyhow::Result<Vec<LandmarkSet>> {
    let payload = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&payload).context("frame payload is not a JSON array of faces")
}

fn connect() -> anyhow::Result<UnixStream> {
    log::debug!("connecting to {}", SOCKET_PATH);
    UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to gazewheel daemon at {}: {}. Is gazewheel running?",
            SOCKET_PATH,
            e
        )
    })
}
