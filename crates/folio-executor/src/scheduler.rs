//! Dependency-driven section release.

use std::collections::HashSet;

use folio_streaming::Section;

use crate::ordering::OrderingStrategy;

/// Where a tracked section is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionStatus {
    /// Waiting on dependencies.
    Pending,
    /// Being rendered.
    InProgress,
    /// Rendered and sent.
    Completed,
    /// Failed with an error.
    Failed(String),
    /// Deliberately left out.
    Skipped,
}

#[derive(Debug)]
struct TrackedSection {
    section: Section,
    status: SectionStatus,
}

/// Tracks which sections are ready to render as their dependencies finish.
///
/// Sections are held in the order they were added, which is DOM order. With
/// [`OrderingStrategy::DomOrder`] (the default) a blocked section also holds
/// back the sections after it; with [`OrderingStrategy::Independent`] each
/// section is released as soon as its own dependencies are done.
#[derive(Debug, Default)]
pub struct SectionScheduler {
    sections: Vec<TrackedSection>,
    completed_deps: HashSet<String>,
    ordering: OrderingStrategy,
}

impl SectionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(mut self, ordering: OrderingStrategy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Track a section. Order of addition is DOM order.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(TrackedSection {
            section,
            status: SectionStatus::Pending,
        });
    }

    /// Mark one dependency tag as finished.
    pub fn complete_dependency(&mut self, dep: &str) {
        self.completed_deps.insert(dep.to_owned());
    }

    /// Names of sections ready to render, in DOM order. Under DOM ordering
    /// the list stops at the first section still waiting on a dependency.
    pub fn ready_sections(&self) -> Vec<&str> {
        let mut ready = Vec::new();
        for tracked in &self.sections {
            if tracked.status != SectionStatus::Pending {
                continue;
            }
            let deps_met = tracked
                .section
                .dependencies
                .iter()
                .all(|dep| self.completed_deps.contains(dep));

            if deps_met {
                ready.push(tracked.section.name.as_str());
            } else if !self.ordering.streams_out_of_order() {
                break;
            }
        }
        ready
    }

    pub fn start_section(&mut self, name: &str) {
        self.set_status(name, SectionStatus::InProgress);
    }

    pub fn complete_section(&mut self, name: &str) {
        self.set_status(name, SectionStatus::Completed);
    }

    pub fn fail_section(&mut self, name: &str, error: impl Into<String>) {
        self.set_status(name, SectionStatus::Failed(error.into()));
    }

    pub fn skip_section(&mut self, name: &str) {
        self.set_status(name, SectionStatus::Skipped);
    }

    /// True once no section is pending or in progress.
    pub fn is_complete(&self) -> bool {
        self.sections.iter().all(|tracked| {
            !matches!(
                tracked.status,
                SectionStatus::Pending | SectionStatus::InProgress
            )
        })
    }

    pub fn status(&self, name: &str) -> Option<&SectionStatus> {
        self.find(name).map(|tracked| &tracked.status)
    }

    /// The section's configured fallback HTML, if any.
    pub fn fallback_for(&self, name: &str) -> Option<&str> {
        self.find(name)
            .and_then(|tracked| tracked.section.fallback.as_deref())
    }

    fn find(&self, name: &str) -> Option<&TrackedSection> {
        self.sections
            .iter()
            .find(|tracked| tracked.section.name == name)
    }

    fn set_status(&mut self, name: &str, status: SectionStatus) {
        if let Some(tracked) = self
            .sections
            .iter_mut()
            .find(|tracked| tracked.section.name == name)
        {
            tracked.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather_page() -> SectionScheduler {
        let mut scheduler = SectionScheduler::new();
        scheduler.add_section(Section::new("search"));
        scheduler.add_section(Section::new("current").depends_on("weather"));
        scheduler.add_section(Section::new("forecast").depends_on("forecast"));
        scheduler
    }

    #[test]
    fn independent_sections_release_per_dependency() {
        let mut scheduler = weather_page().with_ordering(OrderingStrategy::Independent);

        // Only the dependency-free section is ready at first.
        assert_eq!(scheduler.ready_sections(), vec!["search"]);

        scheduler.complete_dependency("forecast");
        assert_eq!(scheduler.ready_sections(), vec!["search", "forecast"]);

        scheduler.complete_dependency("weather");
        assert_eq!(
            scheduler.ready_sections(),
            vec!["search", "current", "forecast"]
        );
    }

    #[test]
    fn dom_order_holds_later_sections() {
        let mut scheduler = weather_page();

        // "forecast" is resolvable, but "current" ahead of it is not.
        scheduler.complete_dependency("forecast");
        assert_eq!(scheduler.ready_sections(), vec!["search"]);

        scheduler.complete_dependency("weather");
        assert_eq!(
            scheduler.ready_sections(),
            vec!["search", "current", "forecast"]
        );
    }

    #[test]
    fn terminal_statuses_complete_the_page() {
        let mut scheduler = weather_page();
        scheduler.complete_dependency("weather");
        scheduler.complete_dependency("forecast");

        for name in ["search", "current"] {
            scheduler.start_section(name);
            scheduler.complete_section(name);
        }
        assert!(!scheduler.is_complete());
        scheduler.fail_section("forecast", "HTTP 503");

        assert!(scheduler.is_complete());
        assert_eq!(
            scheduler.status("forecast"),
            Some(&SectionStatus::Failed("HTTP 503".to_owned()))
        );
    }

    #[test]
    fn skipped_counts_as_terminal() {
        let mut scheduler = SectionScheduler::new();
        scheduler.add_section(Section::new("pager"));
        scheduler.skip_section("pager");
        assert!(scheduler.is_complete());
    }

    #[test]
    fn fallback_lookup() {
        let mut scheduler = SectionScheduler::new();
        scheduler.add_section(
            Section::new("current")
                .depends_on("weather")
                .with_fallback("<p>from the city table</p>"),
        );

        assert_eq!(
            scheduler.fallback_for("current"),
            Some("<p>from the city table</p>")
        );
        assert_eq!(scheduler.fallback_for("missing"), None);
    }
}
