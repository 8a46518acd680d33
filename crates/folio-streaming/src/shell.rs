//! The HTML shell: the part of a page that goes out before any data work.

use std::fmt::Write;

/// Contents of the document `<head>`.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    title: String,
    meta: Vec<(String, String)>,
    /// Raw tags appended after the meta tags (styles, links).
    tags: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_owned(), content.to_owned()));
        self
    }

    /// Inline CSS, emitted as a `<style>` tag.
    pub fn with_style(mut self, css: &str) -> Self {
        self.tags.push(format!("<style>{}</style>", css));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<title>{}</title>", self.title);
        for (name, content) in &self.meta {
            let _ = writeln!(html, r#"<meta name="{}" content="{}">"#, name, content);
        }
        for tag in &self.tags {
            html.push_str(tag);
            html.push('\n');
        }
        html
    }
}

/// A page shell split into an opening and a closing half. The opening half
/// streams before any section work starts; the closing half is the last
/// bytes of the response.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_owned(),
            body_end: "</main>\n</body>\n</html>".to_owned(),
        }
    }

    /// Shell carrying the shared demo page chrome: site header with a link
    /// back to the portfolio, and the footer.
    pub fn demo_page(head: HeadContent, page_title: &str) -> Self {
        let body_start = format!(
            r#"<body>
    <header class="demo-header">
        <nav><a href="/">Arjun Mehta</a> / <a href="/demos">Demos</a> / {}</nav>
    </header>
    <main class="demo-container">
"#,
            page_title
        );
        let body_end = r#"
    </main>
    <footer class="demo-footer">
        <p>One of four self-contained demo pages. Nothing here persists.</p>
    </footer>
</body>
</html>"#;

        Self::new(head)
            .with_body_start(body_start)
            .with_body_end(body_end)
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Everything up to the first section.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Everything after the last section.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_and_closing_halves() {
        let head = HeadContent::new("Weather").with_meta("viewport", "width=device-width");
        let shell = Shell::new(head);
        let opening = shell.render_opening();

        assert!(opening.starts_with("<!DOCTYPE html>"));
        assert!(opening.contains("<title>Weather</title>"));
        assert!(opening.contains(r#"meta name="viewport""#));
        assert!(shell.render_closing().ends_with("</html>"));
    }

    #[test]
    fn inline_style_lands_in_head() {
        let shell = Shell::new(HeadContent::new("x").with_style("body{margin:0}"));
        let opening = shell.render_opening();
        let style_at = opening.find("<style>body{margin:0}</style>").unwrap();
        assert!(style_at < opening.find("</head>").unwrap());
    }

    #[test]
    fn demo_page_carries_chrome() {
        let shell = Shell::demo_page(HeadContent::new("Task Board"), "Task Board");
        let opening = shell.render_opening();

        assert!(opening.contains("demo-header"));
        assert!(opening.contains("Task Board"));
        assert!(shell.render_closing().contains("demo-footer"));
    }
}
