//! Terminal logger for the `log` facade.
//!
//! Info goes to stdout unadorned so command output reads like plain text.
//! Warnings and errors go to stderr with a colored prefix. With `--verbose`,
//! debug records from our own crates are shown with a timestamp. With
//! `--logfile`, every emitted line is also appended to the file with ANSI
//! codes stripped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

struct CliLogger {
    level: LevelFilter,
    verbose: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let message = record.args().to_string();
        let line = match record.level() {
            Level::Error => format!(
                "{} {message}",
                "error:".if_supports_color(Stderr, |t| t.red())
            ),
            Level::Warn => format!(
                "{} {message}",
                "warning:".if_supports_color(Stderr, |t| t.yellow())
            ),
            Level::Info => message,
            Level::Debug | Level::Trace => format!(
                "{} {message}",
                format!("[{}]", record.target()).if_supports_color(Stdout, |t| t.dimmed())
            ),
        };

        if self.verbose {
            let ts = chrono::Local::now().format("%H:%M:%S%.3f");
            format!("{} {line}", ts.if_supports_color(Stdout, |t| t.dimmed()))
        } else {
            line
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Keep dependency chatter (reqwest, rustls, ...) out of debug output.
        metadata.level() <= Level::Info || metadata.target().starts_with("gale")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format(record);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        if let Some(file) = &self.logfile
            && let Ok(mut file) = file.lock()
        {
            let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.logfile
            && let Ok(mut file) = file.lock()
        {
            let _ = file.flush();
        }
    }
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the CLI logger. `--verbose` wins over `--quiet`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> std::io::Result<()> {
    let logfile = logfile
        .map(|path| OpenOptions::new().create(true).append(true).open(path))
        .transpose()?
        .map(Mutex::new);

    let level = level_for(quiet, verbose);
    let logger = CliLogger {
        level,
        verbose,
        logfile,
    };

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}
