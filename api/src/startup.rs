//! Command line handling and port selection for the `api` binary.

use std::ops::Range;
use tracing::{info, warn};
use util::config::DEFAULT_WEEK;

/// Ports tried in order when `SQL_PORT` is not set.
pub const PORT_RANGE: Range<u16> = 5001..5011;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Serve the given week; `None` defers to `SQL_WEEK`.
    Serve { week: Option<u32> },
    /// The week argument did not parse; serve the default week.
    InvalidWeek(String),
}

impl Command {
    /// Interprets the first command line argument.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Command::Serve { week: None },
            Some("-h") | Some("--help") | Some("help") => Command::Help,
            Some(raw) => match raw.parse::<u32>() {
                Ok(week) => Command::Serve { week: Some(week) },
                Err(_) => Command::InvalidWeek(raw.to_string()),
            },
        }
    }

    /// The week to serve, given the configured `SQL_WEEK` value.
    pub fn week(&self, configured: u32) -> u32 {
        match self {
            Command::Serve { week: Some(week) } => *week,
            Command::Serve { week: None } | Command::Help => configured,
            Command::InvalidWeek(raw) => {
                warn!("Invalid week number '{raw}', defaulting to week {DEFAULT_WEEK}");
                DEFAULT_WEEK
            }
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [week_number]\n\n\
         Serves the SQL practice API for one week of exercises.\n\n\
         Arguments:\n  \
         week_number   Practice week to serve (default: SQL_WEEK or {DEFAULT_WEEK})\n\n\
         Environment:\n  \
         SQL_WEEK      Week used when no argument is given\n  \
         SQL_PORT      Port to bind (default: first free port in {}-{})\n  \
         DATA_ROOT     Directory holding exercises/, schemas/ and datasets/",
        PORT_RANGE.start,
        PORT_RANGE.end - 1
    )
}

/// `configured` when set, otherwise the first port in [`PORT_RANGE`] that `is_free` accepts.
pub fn select_port(configured: Option<u16>, is_free: impl Fn(u16) -> bool) -> Option<u16> {
    if let Some(port) = configured {
        return Some(port);
    }
    for port in PORT_RANGE {
        if is_free(port) {
            return Some(port);
        }
        info!("Port {port} is busy, trying next");
    }
    None
}
