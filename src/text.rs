//! Text measurement and wrapping on top of `rusttype`.
//!
//! printpdf places text but does not measure it, so the composer needs its
//! own metrics for centering, right alignment, and the wrapping multi-line
//! cells.  Advance widths are taken at a uniform scale of 1.0 and multiplied
//! by the font size in points, then converted to millimetres.

use std::path::PathBuf;

use rusttype::{Font, Scale};

use crate::error::Error;
use crate::fonts::{FontSet, BOLD_FILE, REGULAR_FILE};
use crate::style::FontWeight;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Converts a length in points to millimetres.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * PT_TO_MM
}

/// Glyph metrics for the regular and bold faces of the document family.
pub struct TextMetrics {
    regular: Font<'static>,
    bold: Font<'static>,
}

impl TextMetrics {
    /// Parses both faces of the font set.
    pub fn new(set: &FontSet) -> Result<Self, Error> {
        let regular = Font::try_from_vec(set.regular.clone()).ok_or(Error::FontParse {
            path: PathBuf::from(REGULAR_FILE),
        })?;
        let bold = Font::try_from_vec(set.bold.clone()).ok_or(Error::FontParse {
            path: PathBuf::from(BOLD_FILE),
        })?;
        Ok(Self { regular, bold })
    }

    fn face(&self, weight: FontWeight) -> &Font<'static> {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// Width of `text` in millimetres when set at `size` points.
    pub fn width_mm(&self, text: &str, weight: FontWeight, size: f64) -> f64 {
        let font = self.face(weight);
        let scale = Scale::uniform(1.0);
        let em_widths: f32 = text
            .chars()
            .map(|ch| font.glyph(ch).scaled(scale).h_metrics().advance_width)
            .sum();
        pt_to_mm(f64::from(em_widths) * size)
    }

    /// Wraps `text` to lines no wider than `max_width` millimetres.
    ///
    /// Embedded newlines are honored as hard breaks.  A word that does not
    /// fit on a line of its own is split between characters.  Empty input
    /// still produces one (empty) line so callers advance the cursor by a
    /// single line height, matching the behavior of an empty cell.
    pub fn wrap(&self, text: &str, weight: FontWeight, size: f64, max_width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            self.wrap_paragraph(paragraph, weight, size, max_width, &mut lines);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    fn wrap_paragraph(
        &self,
        paragraph: &str,
        weight: FontWeight,
        size: f64,
        max_width: f64,
        lines: &mut Vec<String>,
    ) {
        if paragraph.is_empty() {
            lines.push(String::new());
            return;
        }

        let mut current = String::new();
        for token in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                token.to_owned()
            } else {
                format!("{current} {token}")
            };

            if self.width_mm(&candidate, weight, size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = token.to_owned();
            }

            if self.width_mm(&current, weight, size) > max_width {
                current = self.split_overlong(&current, weight, size, max_width, lines);
            }
        }
        lines.push(current);
    }

    /// Splits a fragment wider than the column between characters, pushing
    /// all full lines and returning the remainder.
    fn split_overlong(
        &self,
        fragment: &str,
        weight: FontWeight,
        size: f64,
        max_width: f64,
        lines: &mut Vec<String>,
    ) -> String {
        let mut current = String::new();
        for ch in fragment.chars() {
            let mut candidate = current.clone();
            candidate.push(ch);
            if self.width_mm(&candidate, weight, size) > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current.push(ch);
            } else {
                current = candidate;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts;

    fn metrics() -> Option<TextMetrics> {
        if !fonts::fonts_available() {
            eprintln!("Skipping metrics test: DejaVu fonts not available");
            return None;
        }
        let set = fonts::load_default().expect("load fonts");
        Some(TextMetrics::new(&set).expect("parse fonts"))
    }

    #[test]
    fn empty_text_wraps_to_single_empty_line() {
        let Some(metrics) = metrics() else { return };
        let lines = metrics.wrap("", FontWeight::Regular, 8.0, 100.0);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn newlines_force_hard_breaks() {
        let Some(metrics) = metrics() else { return };
        let lines = metrics.wrap("pierwsza\ndruga", FontWeight::Regular, 8.0, 100.0);
        assert_eq!(lines, vec!["pierwsza".to_owned(), "druga".to_owned()]);
    }

    #[test]
    fn wrapped_lines_fit_the_column() {
        let Some(metrics) = metrics() else { return };
        let text = "Dodaj 5 popularnych restauracji i kawiarni z centrum miasta, \
                    każda pinezka z pełnymi danymi kontaktowymi oraz zdjęciami";
        let max = 60.0;
        let lines = metrics.wrap(text, FontWeight::Regular, 8.0, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.width_mm(line, FontWeight::Regular, 8.0) <= max + f64::EPSILON);
        }
    }

    #[test]
    fn overlong_word_is_split_not_dropped() {
        let Some(metrics) = metrics() else { return };
        let word = "jeleniogorzanietomy".repeat(8);
        let lines = metrics.wrap(&word, FontWeight::Regular, 10.0, 40.0);
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn bold_face_is_at_least_as_wide() {
        let Some(metrics) = metrics() else { return };
        let regular = metrics.width_mm("Plan Promocji", FontWeight::Regular, 12.0);
        let bold = metrics.width_mm("Plan Promocji", FontWeight::Bold, 12.0);
        assert!(bold >= regular);
    }
}
