//! Minimal PDF synthesis for the resume download.
//!
//! When no static `resume.pdf` asset ships with the site, the download is
//! assembled here instead: a single-page PDF 1.4 document with Helvetica
//! text, built by hand because the document is small and fixed. A full PDF
//! library would be the wrong trade for one page of text.

use crate::data::Resume;

/// A4 in points.
const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;

const MARGIN: f32 = 50.0;
const WRAP_COLUMNS: usize = 88;

/// Build the complete PDF document for a resume.
pub fn synthesize_pdf(resume: &Resume) -> Vec<u8> {
    let content = content_stream(resume);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>",
            PAGE_WIDTH, PAGE_HEIGHT
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
    ];

    let mut out = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, object));
    }

    let xref_offset = out.len();
    out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    out.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        out.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    out.into_bytes()
}

/// Lay the resume out as one content stream, top to bottom.
fn content_stream(resume: &Resume) -> String {
    let mut text = TextColumn::new();

    text.line(18.0, &resume.name);
    text.line(11.0, &format!("{} - {}", resume.title, resume.location));
    text.line(10.0, &format!("{} | {}", resume.email, resume.website));
    text.gap();

    text.line(13.0, "Summary");
    for line in wrap(&resume.summary, WRAP_COLUMNS) {
        text.line(10.0, &line);
    }
    text.gap();

    text.line(13.0, "Skills");
    for group in &resume.skills {
        text.line(10.0, &format!("{}: {}", group.name, group.items.join(", ")));
    }
    text.gap();

    text.line(13.0, "Experience");
    for role in &resume.experience {
        text.line(11.0, &format!("{} - {} ({})", role.title, role.company, role.period));
        for bullet in &role.bullets {
            for line in wrap(&format!("- {}", bullet), WRAP_COLUMNS) {
                text.line(10.0, &line);
            }
        }
    }
    text.gap();

    text.line(13.0, "Education");
    for entry in &resume.education {
        text.line(
            10.0,
            &format!("{}, {} ({})", entry.degree, entry.school, entry.period),
        );
    }

    text.finish()
}

/// Accumulates `Tj` operations while walking a y-cursor down the page.
struct TextColumn {
    ops: String,
    y: f32,
}

impl TextColumn {
    fn new() -> Self {
        Self {
            ops: String::new(),
            y: PAGE_HEIGHT as f32 - MARGIN,
        }
    }

    fn line(&mut self, size: f32, text: &str) {
        self.y -= size * 1.35;
        self.ops.push_str(&format!(
            "BT /F1 {size} Tf {x} {y:.1} Td ({text}) Tj ET\n",
            size = size,
            x = MARGIN,
            y = self.y,
            text = escape_pdf_text(text),
        ));
    }

    fn gap(&mut self) {
        self.y -= 10.0;
    }

    fn finish(self) -> String {
        self.ops
    }
}

/// Escape the characters PDF string literals reserve.
fn escape_pdf_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Greedy word wrap at a column count; Helvetica isn't monospaced, but at
/// 10pt this stays comfortably inside the margins.
fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > columns {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resume;

    #[test]
    fn test_pdf_framing() {
        let bytes = synthesize_pdf(&resume());
        let doc = String::from_utf8(bytes).unwrap();

        assert!(doc.starts_with("%PDF-1.4\n"));
        assert!(doc.ends_with("%%EOF\n"));
        assert!(doc.contains("/Type /Catalog"));
        assert!(doc.contains("/BaseFont /Helvetica"));
        // Five objects plus the free head entry.
        assert!(doc.contains("xref\n0 6\n"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = synthesize_pdf(&resume());
        let doc = String::from_utf8(bytes).unwrap();

        let xref_at = doc.find("xref\n").unwrap();
        let table = &doc[xref_at..];
        // Lines: "xref", "0 6", the free entry, then one entry per object.
        for (i, line) in table.lines().skip(3).take(5).enumerate() {
            let offset: usize = line[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(doc[offset..].starts_with(&expected), "object {} offset wrong", i + 1);
        }
    }

    #[test]
    fn test_resume_text_present_and_escaped() {
        let bytes = synthesize_pdf(&resume());
        let doc = String::from_utf8(bytes).unwrap();

        assert!(doc.contains("(Arjun Mehta)"));
        // Periods containing parens would be escaped.
        assert!(doc.contains("\\(2023\\)") || doc.contains("(2023)"));
    }

    #[test]
    fn test_wrap_respects_columns() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap(text, 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 12));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_pdf_text("a(b)c\\d"), "a\\(b\\)c\\\\d");
    }
}
