//! Per-request timing marks.

use std::time::{Duration, Instant};

/// Named timing marks for one request, in the order they were recorded.
///
/// The streaming sink marks the shell flush and every section start/send;
/// the marks are read back when the request's metrics are summarized.
#[derive(Debug, Clone)]
pub struct TimingContext {
    started: Instant,
    marks: Vec<(String, Instant)>,
}

impl TimingContext {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Record a named mark. Re-recording a name appends a new mark; lookups
    /// return the first occurrence.
    pub fn mark(&mut self, name: &str) {
        self.marks.push((name.to_owned(), Instant::now()));
    }

    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section:{}:start", section));
    }

    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section:{}:sent", section));
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn offset_of(&self, name: &str) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(mark, _)| mark == name)
            .map(|(_, at)| at.duration_since(self.started))
    }

    /// Offset of the shell flush, once `mark("shell_sent")` has happened.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset_of("shell_sent")
    }

    /// Offset of the earliest section send.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(mark, _)| mark.starts_with("section:") && mark.ends_with(":sent"))
            .map(|(_, at)| at.duration_since(self.started))
    }

    /// Start/sent offsets for one section, if both marks exist.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let start = self.offset_of(&format!("section:{}:start", section))?;
        let sent = self.offset_of(&format!("section:{}:sent", section))?;
        Some(SectionTiming {
            name: section.to_owned(),
            start,
            sent,
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Offsets of one section relative to request start.
#[derive(Debug, Clone)]
pub struct SectionTiming {
    pub name: String,
    pub start: Duration,
    pub sent: Duration,
}

impl SectionTiming {
    pub fn duration(&self) -> Duration {
        self.sent.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_marks_pair_up() {
        let mut timing = TimingContext::new();
        timing.mark("shell_sent");
        timing.mark_section_start("catalog");
        timing.mark_section_sent("catalog");

        let t = timing.section_timing("catalog").unwrap();
        assert_eq!(t.name, "catalog");
        assert!(t.sent >= t.start);
        assert!(timing.time_to_shell().is_some());
        assert!(timing.time_to_first_section().unwrap() >= timing.time_to_shell().unwrap());
    }

    #[test]
    fn missing_marks_yield_none() {
        let timing = TimingContext::new();
        assert!(timing.section_timing("pager").is_none());
        assert!(timing.time_to_shell().is_none());
        assert!(timing.time_to_first_section().is_none());
    }

    #[test]
    fn first_section_wins_over_later_ones() {
        let mut timing = TimingContext::new();
        timing.mark_section_sent("first");
        timing.mark_section_sent("second");
        let first = timing.time_to_first_section().unwrap();
        let second = timing.section_timing("second");
        assert!(second.is_none()); // no start mark
        assert!(first <= timing.elapsed());
    }
}
