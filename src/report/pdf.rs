//! Minimal single-page PDF writer
//!
//! Object layout:
//! 1 catalog, 2 page tree, 3 page, 4 body font, 5 heading font, 6 content.
//! Text lines are laid out top-down; when they do not fit at the default
//! leading, leading and body size shrink so the page count stays at one.

use std::io::Write;

use super::ReportError;

/// A4 in points
const PAGE_WIDTH: f64 = 595.0;
const PAGE_HEIGHT: f64 = 842.0;

const MARGIN: f64 = 50.0;
const HEADING_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 12.0;
const LEADING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Body,
    Heading,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Body => "F1",
            Font::Heading => "F2",
        }
    }
}

#[derive(Debug, Clone)]
struct TextLine {
    font: Font,
    text: String,
}

/// One page of left-aligned text lines
#[derive(Debug, Clone, Default)]
pub struct PdfPage {
    lines: Vec<TextLine>,
}

impl PdfPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine {
            font: Font::Heading,
            text: text.into(),
        });
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine {
            font: Font::Body,
            text: text.into(),
        });
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// Content stream drawing every line
    fn content(&self) -> String {
        let usable = PAGE_HEIGHT - 2.0 * MARGIN;
        let count = self.lines.len().max(1) as f64;
        let leading = LEADING.min(usable / count);
        let scale = leading / LEADING;

        let mut out = String::new();
        let mut y = PAGE_HEIGHT - MARGIN;
        for line in &self.lines {
            if !line.text.is_empty() {
                let size = match line.font {
                    Font::Heading => HEADING_SIZE * scale,
                    Font::Body => BODY_SIZE * scale,
                };
                out.push_str(&format!(
                    "BT /{} {:.2} Tf {:.2} {:.2} Td ({}) Tj ET\n",
                    line.font.resource(),
                    size,
                    MARGIN,
                    y,
                    escape_text(&line.text)
                ));
            }
            y -= leading;
        }
        out
    }

    /// Serializes the page as a complete PDF document.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let content = self.content();
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ),
        ];

        let mut out: Vec<u8> = Vec::new();
        out.write_all(b"%PDF-1.4\n")?;

        let mut offsets = Vec::with_capacity(objects.len());
        for (index, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            write!(out, "{} 0 obj\n{}\nendobj\n", index + 1, body)?;
        }

        let xref_offset = out.len();
        write!(out, "xref\n0 {}\n", objects.len() + 1)?;
        out.write_all(b"0000000000 65535 f \n")?;
        for offset in offsets {
            write!(out, "{:010} 00000 n \n", offset)?;
        }
        write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )?;

        Ok(out)
    }
}

/// Escapes text for a PDF literal string.
///
/// Printable ASCII passes through; Latin-1 letters become octal escapes
/// (WinAnsi agrees with Latin-1 there); anything else becomes `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", c as u32)),
            c if c.is_control() => out.push(' '),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(page: &PdfPage) -> String {
        String::from_utf8(page.to_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_document_structure() {
        let mut page = PdfPage::new();
        page.heading("Title");
        page.line("Body");
        let doc = text(&page);

        assert!(doc.starts_with("%PDF-1.4\n"));
        assert!(doc.ends_with("%%EOF\n"));
        assert!(doc.contains("/Count 1"));
        assert!(doc.contains("(Title) Tj"));
        assert!(doc.contains("(Body) Tj"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let mut page = PdfPage::new();
        page.line("offsets");
        let doc = text(&page);

        let xref_start = doc.find("xref\n").unwrap();
        let entries: Vec<usize> = doc[xref_start..]
            .lines()
            .skip(3)
            .take(6)
            .map(|l| l[..10].parse().unwrap())
            .collect();
        for (index, offset) in entries.iter().enumerate() {
            assert!(doc[*offset..].starts_with(&format!("{} 0 obj", index + 1)));
        }

        let startxref: usize = doc
            .rsplit("startxref\n")
            .next()
            .unwrap()
            .lines()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(startxref, xref_start);
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a(b)c\\"), "a\\(b\\)c\\\\");
        assert_eq!(escape_text("µm"), "\\265m");
        assert_eq!(escape_text("🧪 lab"), "? lab");
        assert_eq!(escape_text("x\ty"), "x y");
    }

    #[test]
    fn test_many_lines_stay_on_page() {
        let mut page = PdfPage::new();
        for i in 0..200 {
            page.line(format!("line {}", i));
        }
        let content = page.content();
        let last = content.lines().last().unwrap();
        let y: f64 = last.split_whitespace().nth(5).unwrap().parse().unwrap();
        assert!(y >= MARGIN);
    }
}
