//! Shell, section and dependency timings for one page request.
//!
//! A `MetricsCollector` lives for the duration of a request; `finalize`
//! freezes it into a serializable `RequestMetrics` that the handler prints
//! to stderr next to its log lines. Sections keep the order in which they
//! were streamed.

use std::time::{Duration, Instant};

use folio_core::RequestId;
use serde::{Deserialize, Serialize};

/// Frozen timings for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Microseconds from request start to the shell flush.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_us: Option<u64>,
    /// Microseconds from request start to the first streamed section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_section_us: Option<u64>,
    /// Sections in stream order.
    pub sections: Vec<SectionMetrics>,
    /// One entry per dependency fetch, in call order.
    pub dependencies: Vec<DependencyMetrics>,
    pub total_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Timings for one streamed section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    pub name: String,
    /// Microseconds from request start to section start.
    pub start_us: u64,
    /// Microseconds from request start to section sent.
    pub sent_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// True when the section rendered from fallback data.
    pub used_fallback: bool,
}

impl SectionMetrics {
    /// Render duration of this section.
    pub fn duration_us(&self) -> u64 {
        self.sent_us.saturating_sub(self.start_us)
    }
}

/// Outcome of a single dependency fetch. One attempt per fetch; nothing in
/// the demo pages retries, so there is no attempt counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyMetrics {
    pub tag: String,
    pub url: String,
    pub duration_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DependencyMetrics {
    /// A fetch that came back with a usable payload.
    pub fn ok(tag: &str, url: &str, duration: Duration, status: u16) -> Self {
        Self {
            tag: tag.to_owned(),
            url: url.to_owned(),
            duration_us: duration.as_micros() as u64,
            status: Some(status),
            success: true,
            error: None,
        }
    }

    /// A fetch that failed; the caller falls back to demo data.
    pub fn failed(tag: &str, url: &str, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            tag: tag.to_owned(),
            url: url.to_owned(),
            duration_us: duration.as_micros() as u64,
            status: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug)]
struct SectionTrack {
    name: String,
    started: Instant,
    sent: Option<Instant>,
    bytes: Option<usize>,
    used_fallback: bool,
}

/// Per-request collector. Created alongside the logger at the top of each
/// handler and finalized right before the handler returns.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    started: Instant,
    shell_sent: Option<Instant>,
    sections: Vec<SectionTrack>,
    dependencies: Vec<DependencyMetrics>,
}

impl MetricsCollector {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            started: Instant::now(),
            shell_sent: None,
            sections: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Mark the shell as flushed.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Mark a section as started. Sections that are sent without an explicit
    /// start get a zero-duration entry.
    pub fn record_section_start(&mut self, name: &str) {
        self.sections.push(SectionTrack {
            name: name.to_owned(),
            started: Instant::now(),
            sent: None,
            bytes: None,
            used_fallback: false,
        });
    }

    /// Mark a section as sent, with its payload size and whether fallback
    /// data was used.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        let now = Instant::now();
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(track) => {
                track.sent = Some(now);
                track.bytes = bytes;
                track.used_fallback = used_fallback;
            }
            None => self.sections.push(SectionTrack {
                name: name.to_owned(),
                started: now,
                sent: Some(now),
                bytes,
                used_fallback,
            }),
        }
    }

    /// Record a dependency fetch outcome.
    pub fn record_dependency(&mut self, dep: DependencyMetrics) {
        self.dependencies.push(dep);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Freeze into `RequestMetrics`. Sections never sent are stamped with
    /// the finalize time.
    pub fn finalize(self, status: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let since_start = |t: Instant| t.duration_since(self.started).as_micros() as u64;

        let first_section_us = self
            .sections
            .iter()
            .filter_map(|s| s.sent)
            .map(since_start)
            .min();

        let sections = self
            .sections
            .iter()
            .map(|track| SectionMetrics {
                name: track.name.clone(),
                start_us: since_start(track.started),
                sent_us: since_start(track.sent.unwrap_or(now)),
                bytes: track.bytes,
                used_fallback: track.used_fallback,
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            shell_us: self.shell_sent.map(since_start),
            first_section_us,
            sections,
            dependencies: self.dependencies,
            total_us: since_start(now),
            status,
        }
    }
}

fn ms(us: u64) -> f64 {
    us as f64 / 1000.0
}

impl RequestMetrics {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Multi-line summary for stderr, one line per section and dependency.
    pub fn to_summary(&self) -> String {
        let workload = self.workload.as_deref().unwrap_or("request");
        let mut out = format!("{} {} total {:.2}ms", workload, self.request_id, ms(self.total_us));
        if let Some(shell) = self.shell_us {
            out.push_str(&format!(", shell {:.2}ms", ms(shell)));
        }
        if let Some(first) = self.first_section_us {
            out.push_str(&format!(", first section {:.2}ms", ms(first)));
        }
        for section in &self.sections {
            out.push_str(&format!(
                "\n  section {:<10} {:>8.2}ms",
                section.name,
                ms(section.duration_us()),
            ));
            if let Some(bytes) = section.bytes {
                out.push_str(&format!(" {}B", bytes));
            }
            if section.used_fallback {
                out.push_str(" [fallback]");
            }
        }
        for dep in &self.dependencies {
            let outcome = match (dep.success, dep.status) {
                (true, Some(code)) => code.to_string(),
                (true, None) => "ok".to_owned(),
                (false, _) => "failed".to_owned(),
            };
            out.push_str(&format!(
                "\n  fetch   {:<10} {:>8.2}ms {} {}",
                dep.tag,
                ms(dep.duration_us),
                outcome,
                dep.url,
            ));
            if let Some(error) = &dep.error {
                out.push_str(&format!(" ({})", error));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_stream_order() {
        let mut collector = MetricsCollector::new(RequestId::from_string("m-1"));
        collector.set_workload("shop-demo");
        collector.record_shell_sent();
        collector.record_section_start("filters");
        collector.record_section_sent("filters", Some(512), false);
        collector.record_section_start("catalog");
        collector.record_section_sent("catalog", Some(4096), false);
        collector.record_section_sent("cart", None, true);

        let frozen = collector.finalize(Some(200));
        let names: Vec<&str> = frozen.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["filters", "catalog", "cart"]);
        assert!(frozen.sections[2].used_fallback);
        assert_eq!(frozen.sections[1].bytes, Some(4096));
        assert!(frozen.shell_us.is_some());
        assert_eq!(frozen.status, Some(200));
    }

    #[test]
    fn failed_fetch_keeps_error_and_drops_status() {
        let mut collector = MetricsCollector::new(RequestId::from_string("m-2"));
        collector.record_dependency(DependencyMetrics::failed(
            "weather",
            "https://example.test/weather",
            Duration::from_millis(35),
            "connection refused",
        ));

        let frozen = collector.finalize(Some(200));
        assert_eq!(frozen.dependencies.len(), 1);
        let dep = &frozen.dependencies[0];
        assert!(!dep.success);
        assert_eq!(dep.status, None);
        assert_eq!(dep.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn summary_flags_fallback_sections() {
        let mut collector = MetricsCollector::new(RequestId::from_string("m-3"));
        collector.record_section_sent("forecast", None, true);
        let summary = collector.finalize(Some(200)).to_summary();
        assert!(summary.contains("forecast"));
        assert!(summary.contains("[fallback]"));
    }

    #[test]
    fn unsent_section_spans_to_finalize() {
        let mut collector = MetricsCollector::new(RequestId::from_string("m-4"));
        collector.record_section_start("pager");
        let frozen = collector.finalize(None);
        assert_eq!(frozen.sections.len(), 1);
        assert!(frozen.sections[0].sent_us >= frozen.sections[0].start_us);
    }
}
