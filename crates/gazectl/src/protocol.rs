//! Line protocol spoken over the daemon socket.
//!
//! One request per line, verb first. The only request with an answer is
//! `prize`, which the daemon answers with a single [`Reply`] line.

use crate::landmark::LandmarkSet;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/gazewheel.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Frame,
    Reset,
    Resize,
    Snapshot,
    Prize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Every face the tracker reported for one video frame.
    Frame(Vec<LandmarkSet>),
    Reset,
    Resize { width: u32, height: u32 },
    Snapshot(PathBuf),
    Prize,
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty request")]
    Empty,
    #[error("unknown verb '{0}'")]
    UnknownVerb(String),
    #[error("missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("invalid {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid frame payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected reply '{0}'")]
    UnexpectedReply(String),
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, ProtocolError> {
    (!rest.is_empty())
        .then_some(rest)
        .ok_or(ProtocolError::MissingArgument(name))
}

fn parse_number(arg: Option<&str>, name: &'static str) -> Result<u32, ProtocolError> {
    arg.ok_or(ProtocolError::MissingArgument(name))?
        .parse()
        .map_err(|source| ProtocolError::InvalidNumber { name, source })
}

impl FromStr for Request {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ProtocolError::Empty);
        }

        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));
        let verb =
            Verb::from_str(verb).map_err(|_| ProtocolError::UnknownVerb(verb.to_string()))?;

        match verb {
            Verb::Frame => Ok(Self::Frame(serde_json::from_str(required(rest, "faces")?)?)),
            Verb::Reset => Ok(Self::Reset),
            Verb::Prize => Ok(Self::Prize),
            Verb::Snapshot => Ok(Self::Snapshot(PathBuf::from(required(rest, "path")?))),
            Verb::Resize => {
                let mut dims = rest.split_whitespace();
                let width = parse_number(dims.next(), "width")?;
                let height = parse_number(dims.next(), "height")?;
                Ok(Self::Resize { width, height })
            }
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(faces) => {
                let payload = serde_json::to_string(faces).map_err(|_| fmt::Error)?;
                write!(f, "{} {}", Verb::Frame, payload)
            }
            Self::Reset => write!(f, "{}", Verb::Reset),
            Self::Resize { width, height } => write!(f, "{} {} {}", Verb::Resize, width, height),
            Self::Snapshot(path) => write!(f, "{} {}", Verb::Snapshot, path.display()),
            Self::Prize => write!(f, "{}", Verb::Prize),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The prize currently on display, if any sector has been resolved yet.
    Prize(Option<u32>),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prize(Some(value)) => write!(f, "{} {}", Verb::Prize, value),
            Self::Prize(None) => write!(f, "{} none", Verb::Prize),
        }
    }
}

impl FromStr for Reply {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unexpected = || ProtocolError::UnexpectedReply(line.trim().to_string());
        let (verb, value) = line.trim().split_once(' ').ok_or_else(unexpected)?;

        match Verb::from_str(verb) {
            Ok(Verb::Prize) if value == "none" => Ok(Self::Prize(None)),
            Ok(Verb::Prize) => value
                .parse()
                .map(|v| Self::Prize(Some(v)))
                .map_err(|_| unexpected()),
            _ => Err(unexpected()),
        }
    }
}
