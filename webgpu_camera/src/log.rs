//! Logging for webgpu_camera
//!
//! Cameras report clamped inputs, ignored zoom values and rejected
//! parameters through a process-wide logger:
//! - Pluggable sink via the `Logger` trait (defaults to `DefaultLogger`)
//! - Severity levels with a global minimum (default `Info`)
//! - File and line information attached to ERROR entries

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom sinks (test capture, browser console bridge, ...)
///
/// # Example
///
/// ```no_run
/// use webgpu_camera::camera3d::log::{Logger, LogEntry};
///
/// struct ConsoleBridge;
///
/// impl Logger for ConsoleBridge {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host...
///     }
/// }
///
/// webgpu_camera::camera3d::log::set_logger(ConsoleBridge);
/// ```
pub trait Logger: Send + Sync {
    /// Receive one entry that passed the severity filter
    fn log(&self, entry: &LogEntry);
}

/// A single log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was created
    pub timestamp: SystemTime,

    /// Emitting type (e.g. "webgpu_camera::OrbitCamera")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Source line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-call detail (cache rebuilds)
    Trace,

    /// Clamped or ignored inputs
    Debug,

    /// Camera creation and configuration changes
    Info,

    /// Suspicious but accepted input
    Warn,

    /// Rejected input, with file:line
    Error,
}

/// Colored console logger
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    fn format_entry(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let mut line = format!(
            "[{}] [{}] [{}] {}",
            timestamp,
            severity,
            entry.source.bright_blue(),
            entry.message
        );
        if let (Some(file), Some(number)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, number));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format_entry(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== GLOBAL REGISTRY =====

struct LogState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

static LOG_STATE: OnceLock<RwLock<LogState>> = OnceLock::new();

fn state() -> &'static RwLock<LogState> {
    LOG_STATE.get_or_init(|| {
        RwLock::new(LogState {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Info,
        })
    })
}

/// Replace the active logger
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = state().write() {
        lock.logger = Box::new(logger);
    }
}

/// Restore `DefaultLogger` and the default `Info` threshold
pub fn reset_logger() {
    if let Ok(mut lock) = state().write() {
        lock.logger = Box::new(DefaultLogger);
        lock.min_severity = LogSeverity::Info;
    }
}

/// Drop entries below `severity` before they reach the logger
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut lock) = state().write() {
        lock.min_severity = severity;
    }
}

/// Current severity threshold
pub fn min_severity() -> LogSeverity {
    state()
        .read()
        .map(|lock| lock.min_severity)
        .unwrap_or(LogSeverity::Info)
}

/// Log without location. Used by `camera_trace!` .. `camera_warn!`.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(severity, source, message, None, None);
}

/// Log with file:line. Used by `camera_error!`.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    dispatch(severity, source, message, Some(file), Some(line));
}

fn dispatch(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: Option<&'static str>,
    line: Option<u32>,
) {
    if let Ok(lock) = state().read() {
        if severity < lock.min_severity {
            return;
        }
        lock.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file,
            line,
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! camera_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// webgpu_camera::camera_debug!("webgpu_camera::OrbitCamera", "distance clamped to {}", 1.0);
/// ```
#[macro_export]
macro_rules! camera_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! camera_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! camera_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! camera_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
