//! Parsing of the backend's rolling log files for the Logs tab.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use tedbot_config::LOG_FILE_PREFIX;

/// A file named `tedbot_log.YYYY-MM-DD-HH`, as written by an hourly roller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogFileName {
    pub hour: NaiveDateTime,
}

impl LogFileName {
    pub fn parse(name: &str) -> Option<Self> {
        let (prefix, stamp) = name.split_once('.')?;
        if prefix != LOG_FILE_PREFIX {
            return None;
        }
        let (date, hour) = stamp.rsplit_once('-')?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        let hour: u32 = hour.parse().ok()?;
        Some(Self {
            hour: date.and_hms_opt(hour, 0, 0)?,
        })
    }
}

/// Newest log file among `names`; names of other files are ignored.
pub fn latest_log_name<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(|n| LogFileName::parse(n).map(|parsed| (parsed, n)))
        .max_by_key(|(parsed, _)| *parsed)
        .map(|(_, n)| n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct UnknownLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(UnknownLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Option<LogLevel>,
    pub text: String,
}

impl LogLine {
    /// The level is looked up among the leading fields of a `tracing` fmt line
    /// (`<timestamp> <LEVEL> <target>: <message>`).
    pub fn parse(line: &str) -> Self {
        let text = strip_ansi(line);
        let level = text
            .split_whitespace()
            .take(3)
            .find_map(|field| field.parse().ok());
        Self { level, text }
    }

    pub fn parse_all(content: &str) -> Vec<Self> {
        content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(Self::parse)
            .collect()
    }
}

fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end at the first byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
