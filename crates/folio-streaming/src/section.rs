//! Named, independently streamable parts of a demo page.

/// One section of a streamed page: a name, the dependency tags it waits on,
/// and optional fallback HTML for when those dependencies fail.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub dependencies: Vec<String>,
    pub fallback: Option<String>,
}

impl Section {
    /// A section with no dependencies, ready to stream immediately.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            fallback: None,
        }
    }

    /// Add a dependency tag this section waits on.
    pub fn depends_on(mut self, tag: impl Into<String>) -> Self {
        self.dependencies.push(tag.into());
        self
    }

    /// HTML to stream in place of the real content when a dependency fails.
    pub fn with_fallback(mut self, html: impl Into<String>) -> Self {
        self.fallback = Some(html.into());
        self
    }

    /// Wrap rendered HTML with the section marker attribute.
    pub fn wrap(&self, html: &str) -> String {
        format!(r#"<div data-section="{}">{}</div>"#, self.name, html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_construction() {
        let section = Section::new("forecast")
            .depends_on("forecast")
            .with_fallback("<p>forecast unavailable</p>");

        assert_eq!(section.name, "forecast");
        assert_eq!(section.dependencies, vec!["forecast"]);
        assert_eq!(section.fallback.as_deref(), Some("<p>forecast unavailable</p>"));
    }

    #[test]
    fn wrap_adds_marker() {
        let section = Section::new("cart");
        assert_eq!(
            section.wrap("<p>empty</p>"),
            r#"<div data-section="cart"><p>empty</p></div>"#
        );
    }
}
