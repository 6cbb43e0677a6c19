//! Rolling Logger
//!
//! File logger for Tauri host processes:
//! - one file per local calendar day: `<app>-YYYY-MM-DD.log`
//! - only the newest `MAX_FILES` files are kept
//! - the last `RECENT_CAPACITY` lines are also held in memory
//!
//! `log` records are forwarded into `tracing`, so callers can use either.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Number of daily log files kept on disk
pub const MAX_FILES: usize = 7;
/// Number of lines kept in the in-memory buffer
pub const RECENT_CAPACITY: usize = 200;

/// Initialize global logging into `log_dir`.
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = RollingFile::new(&log_dir, app_name, MAX_FILES, RECENT_CAPACITY)
        .map_err(|e| format!("Failed to open log dir {}: {}", log_dir.display(), e))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file.clone())
                .with_ansi(false)
                .with_target(true),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), app = app_name, "logger initialized");
    Ok(())
}

/// Shared handle to the rolling log file and its line buffer
#[derive(Clone)]
pub struct RollingFile {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    dir: PathBuf,
    prefix: String,
    max_files: usize,
    capacity: usize,
    current: Option<(NaiveDate, File)>,
    recent: VecDeque<String>,
}

impl RollingFile {
    pub fn new(dir: &Path, prefix: &str, max_files: usize, capacity: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                dir: dir.to_path_buf(),
                prefix: prefix.to_string(),
                max_files: max_files.max(1),
                capacity,
                current: None,
                recent: VecDeque::with_capacity(capacity),
            })),
        })
    }

    /// Append `buf` to the file for `date`, rolling over if the date changed
    pub fn write_at(&self, date: NaiveDate, buf: &[u8]) -> io::Result<()> {
        let mut inner = self.inner.lock().map_err(|_| io::Error::other("log lock poisoned"))?;

        if inner.current.as_ref().map(|(d, _)| *d) != Some(date) {
            let path = inner.dir.join(file_name(&inner.prefix, date));
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            inner.current = Some((date, file));
            inner.prune()?;
        }

        if let Some((_, file)) = inner.current.as_mut() {
            file.write_all(buf)?;
        }

        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|l| !l.is_empty()) {
            inner.push_recent(line.to_string());
        }
        Ok(())
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.recent.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Inner {
    fn push_recent(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(line);
    }

    /// Delete the oldest log files beyond `max_files`
    fn prune(&self) -> io::Result<()> {
        let head = format!("{}-", self.prefix);
        let mut logs: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with(&head) && n.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Date suffix sorts chronologically
        logs.sort();
        let excess = logs.len().saturating_sub(self.max_files);
        for path in logs.into_iter().take(excess) {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.log", prefix, date.format("%Y-%m-%d"))
}

/// Per-event writer handed out to the fmt layer
pub struct RollingWriter {
    file: RollingFile,
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_at(Local::now().date_naive(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriter { file: self.clone() }
    }
}
