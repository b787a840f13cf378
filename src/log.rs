//! Diagnostic sinks.
//!
//! The widget never writes to a process-wide logger. It is handed a
//! `DiagnosticSink` by its host and reports through that.

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use chrono::Local;
use once_cell::sync::OnceCell;

/// Path of the log file the panic hook appends to.
static PANIC_LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Destination for widget diagnostics
pub trait DiagnosticSink {
    fn record(&self, level: Level, msg: &str);

    fn log(&self, msg: &str) {
        self.record(Level::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.record(Level::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.record(Level::Error, msg);
    }
}

/// Discards everything. Default sink for a freshly built widget.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl DiagnosticSink for NullLog {
    fn record(&self, _level: Level, _msg: &str) {}
}

/// Keeps records in memory so a host (or a test) can inspect them.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    records: Rc<RefCell<Vec<(Level, String)>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.borrow().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.records.borrow().iter().filter(|(l, _)| *l == level).count()
    }
}

impl DiagnosticSink for MemoryLog {
    fn record(&self, level: Level, msg: &str) {
        self.records.borrow_mut().push((level, msg.to_string()));
    }
}

/// Timestamped log file under `~/.ordered-multiselect/logs`.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileLog {
    /// Create a new log file in the default log directory.
    pub fn init() -> std::io::Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ordered-multiselect")
            .join("logs");

        std::fs::create_dir_all(&log_dir)?;

        Self::create(log_dir.join(format!("omselect_{}.log", timestamp)))
    }

    /// Create (or truncate) a log file at `path`.
    pub fn create(path: PathBuf) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let log = Self {
            path,
            file: Mutex::new(file),
        };
        log.log("=== ordered-multiselect started ===");
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for FileLog {
    fn record(&self, level: Level, msg: &str) {
        let line = format_line(level, msg);
        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

fn format_line(level: Level, msg: &str) -> String {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    format!("[{}] [{}] {}\n", timestamp, level.tag(), msg)
}

/// Route panics to `log_path` in addition to the default hook.
///
/// The terminal is in raw mode while the widget runs, so a panic message on
/// stderr is usually lost; the log file keeps it.
pub fn install_panic_hook(log_path: &Path) {
    if PANIC_LOG_PATH.set(log_path.to_path_buf()).is_err() {
        return;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(path) = PANIC_LOG_PATH.get() {
            if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                let _ = file.write_all(format_line(Level::Error, &format!("panic: {}", info)).as_bytes());
            }
        }
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_log_shares_records_between_clones() {
        let log = MemoryLog::new();
        let handle = log.clone();

        log.error("boom");
        log.warn("careful");
        log.log("hello");

        assert_eq!(handle.records().len(), 3);
        assert_eq!(handle.count(Level::Error), 1);
        assert_eq!(handle.records()[0], (Level::Error, "boom".to_string()));
    }

    #[test]
    fn test_format_line_has_level_tag() {
        let line = format_line(Level::Warn, "msg");
        assert!(line.contains("[WARN] msg"));
        assert!(line.ends_with('\n'));
    }
}
