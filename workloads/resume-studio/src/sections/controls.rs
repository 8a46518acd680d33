//! Controls section - the download bar above the preview.

/// Where the PDF download is served from.
pub const PDF_PATH: &str = "/demos/resume/resume.pdf";

/// Render the download controls.
///
/// `static_asset` reports which source the PDF route will use, so the label
/// can say whether the visitor gets the shipped file or a generated one.
pub fn render_controls(static_asset: bool) -> String {
    let source = if static_asset {
        "Served from the bundled file."
    } else {
        "Generated on the fly from the resume below."
    };

    format!(
        r#"<section class="resume-controls" data-section="controls">
    <a class="btn-download" href="{PDF_PATH}" download="arjun-mehta-resume.pdf">Download PDF</a>
    <span class="pdf-source">{source}</span>
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_link_to_pdf_route() {
        let html = render_controls(false);
        assert!(html.contains(PDF_PATH));
        assert!(html.contains("Generated on the fly"));

        let html = render_controls(true);
        assert!(html.contains("bundled file"));
    }
}
