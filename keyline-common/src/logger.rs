//! Logging module.
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::SystemTime;

use chrono::prelude::*;
use colored::*;

pub use log::{Level, Log, Metadata, Record, SetLoggerError};

struct Logger {
    level: Level,
    file: Option<File>,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {} {}. [{}:{}]",
            record.level(),
            record.target().bold(),
            record.args(),
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
        );
        let line = match record.level() {
            Level::Error => line.red(),
            Level::Warn => line.yellow(),
            Level::Info => line.normal(),
            Level::Debug => line.dimmed(),
            Level::Trace => line.cyan().dimmed(),
        };
        let utc_time: DateTime<Utc> = DateTime::from(SystemTime::now());
        let timestamp = utc_time.to_rfc3339_opts(SecondsFormat::Millis, true).white();
        if let Some(ref file) = self.file {
            write(file, &timestamp, &line);
        } else {
            write(io::stderr(), &timestamp, &line);
        }

        fn write(mut stream: impl io::Write, timestamp: &ColoredString, line: &ColoredString) {
            writeln!(stream, "{} {}", timestamp, line).expect("write shouldn't fail");
        }
    }

    fn flush(&self) {}
}

/// Initialize a new logger.
pub fn init(level: &str, file: Option<PathBuf>) -> anyhow::Result<()> {
    let file = match file {
        Some(path) => Some(File::create(path)?),
        None => None,
    };
    let level = Level::from_str(level).map_err(|err| anyhow::anyhow!("{err}"))?;
    let logger = Logger { level, file };

    log::set_boxed_logger(Box::new(logger)).map_err(|err| anyhow::anyhow!("{err}"))?;
    log::set_max_level(level.to_level_filter());

    Ok(())
}
