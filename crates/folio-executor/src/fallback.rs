//! What a section renders when its data fails to load.
//!
//! A demo page never shows an empty state: a failed third-party fetch swaps
//! in bundled demo data or an inline notice instead.

/// Fallback behavior for one section.
#[derive(Debug, Clone, Default)]
pub enum FallbackStrategy {
    /// Render the given HTML, typically built from bundled demo data.
    Html(String),
    /// Render an inline notice carrying the (escaped) failure.
    Notice,
    /// Leave the section out entirely.
    #[default]
    Skip,
}

/// Outcome of applying a fallback.
#[derive(Debug)]
pub enum FallbackResult {
    Rendered(String),
    Skipped,
}

impl FallbackStrategy {
    pub fn html(html: impl Into<String>) -> Self {
        Self::Html(html.into())
    }

    /// A fallback that renders a fixed user-facing message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Html(format!(
            r#"<div class="section-notice">{}</div>"#,
            html_escape(&message.into())
        ))
    }

    /// Resolve this strategy against the error that triggered it.
    pub fn apply(&self, error: &str) -> FallbackResult {
        match self {
            Self::Html(html) => FallbackResult::Rendered(html.clone()),
            Self::Notice => FallbackResult::Rendered(format!(
                r#"<div class="section-notice">Could not load this section: {}</div>"#,
                html_escape(error)
            )),
            Self::Skip => FallbackResult::Skipped,
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_fallback_ignores_the_error() {
        match FallbackStrategy::html("<div>demo data</div>").apply("connection refused") {
            FallbackResult::Rendered(html) => assert_eq!(html, "<div>demo data</div>"),
            FallbackResult::Skipped => panic!("expected rendered fallback"),
        }
    }

    #[test]
    fn notice_escapes_the_error() {
        match FallbackStrategy::Notice.apply("<script>bad</script>") {
            FallbackResult::Rendered(html) => {
                assert!(html.contains("&lt;script&gt;"));
                assert!(!html.contains("<script>bad"));
            }
            FallbackResult::Skipped => panic!("expected rendered notice"),
        }
    }

    #[test]
    fn default_skips() {
        assert!(matches!(
            FallbackStrategy::default().apply("any"),
            FallbackResult::Skipped
        ));
    }
}
