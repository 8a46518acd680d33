//! Request-scoped structured logging.
//!
//! Every demo page builds one `StructuredLogger` per request; the request id
//! rides along on each entry so a page's log lines can be correlated with the
//! section and dependency timings collected next door in `metrics`.

use std::fmt;
use std::time::Instant;

use folio_core::RequestId;
use serde::Serialize;
use serde_json::{Map, Value};

/// Severity of a log entry. Ordering follows severity, so a minimum-level
/// gate is a plain `<` comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// One JSON object per line, for aggregation.
    #[default]
    Json,
    /// Aligned plain text, for local development.
    Human,
}

/// A single log entry, ready to render in either format.
///
/// Extra fields keep their insertion order so a human-format line reads the
/// way the call site wrote it.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub request_id: String,
    pub workload: Option<String>,
    pub route: Option<String>,
    pub fields: Vec<(String, Value)>,
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Render as a single JSON line.
    pub fn to_json(&self) -> String {
        let mut obj = Map::new();
        obj.insert("level".into(), Value::String(self.level.label().to_lowercase()));
        obj.insert("message".into(), Value::String(self.message.clone()));
        obj.insert("request_id".into(), Value::String(self.request_id.clone()));
        if let Some(workload) = &self.workload {
            obj.insert("workload".into(), Value::String(workload.clone()));
        }
        if let Some(route) = &self.route {
            obj.insert("route".into(), Value::String(route.clone()));
        }
        obj.insert("elapsed_us".into(), Value::from(self.elapsed_us));
        for (key, value) in &self.fields {
            obj.insert(key.clone(), value.clone());
        }
        Value::Object(obj).to_string()
    }

    /// Render as an aligned plain-text line.
    pub fn to_human(&self) -> String {
        let mut line = format!("{:>8}us {:5} {}", self.elapsed_us, self.level, self.message);
        for (key, value) in &self.fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(&value.to_string());
        }
        if let Some(workload) = &self.workload {
            line.push_str(&format!("  [{}]", workload));
        }
        line
    }
}

/// Request-scoped logger.
///
/// Cheap to clone; the clock starts when the logger is created, which on the
/// demo pages is the first thing a request handler does.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    started: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            started: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Tag every entry with the demo page's name.
    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    /// Tag every entry with the request path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message, Vec::new());
    }

    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message, Vec::new());
    }

    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message, Vec::new());
    }

    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message, Vec::new());
    }

    /// Start a debug entry with extra fields.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }

    /// Start an info entry with extra fields.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start a warn entry with extra fields.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start an error entry with extra fields.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    fn emit(&self, level: LogLevel, message: &str, fields: Vec<(String, Value)>) {
        if level < self.min_level {
            return;
        }
        let entry = LogEntry {
            level,
            message: message.to_owned(),
            request_id: self.request_id.to_string(),
            workload: self.workload.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: self.started.elapsed().as_micros() as u64,
        };
        let line = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        // stderr ends up in the Spin runtime's log stream
        eprintln!("{}", line);
    }
}

/// Fluent builder for entries carrying extra fields.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Vec<(String, Value)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.push((key.to_owned(), Value::String(value.into())));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.push((key.to_owned(), Value::from(value)));
        self
    }

    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.push((key.to_owned(), Value::from(value)));
        self
    }

    pub fn emit(self) {
        self.logger.emit(self.level, &self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, fields: Vec<(String, Value)>) -> LogEntry {
        LogEntry {
            level,
            message: "fallback table used".to_owned(),
            request_id: "req-9".to_owned(),
            workload: Some("weather-lookup".to_owned()),
            route: Some("/".to_owned()),
            fields,
            elapsed_us: 480,
        }
    }

    #[test]
    fn json_line_carries_context_and_fields() {
        let e = entry(
            LogLevel::Warn,
            vec![("city".to_owned(), Value::String("Pune".to_owned()))],
        );
        let parsed: Value = serde_json::from_str(&e.to_json()).unwrap();
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["request_id"], "req-9");
        assert_eq!(parsed["workload"], "weather-lookup");
        assert_eq!(parsed["city"], "Pune");
        assert_eq!(parsed["elapsed_us"], 480);
    }

    #[test]
    fn human_line_keeps_field_order() {
        let e = entry(
            LogLevel::Info,
            vec![
                ("b".to_owned(), Value::from(2)),
                ("a".to_owned(), Value::from(1)),
            ],
        );
        let line = e.to_human();
        assert!(line.contains("INFO"));
        assert!(line.find("b=2").unwrap() < line.find("a=1").unwrap());
        assert!(line.ends_with("[weather-lookup]"));
    }

    #[test]
    fn severity_orders_levels() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }
}
