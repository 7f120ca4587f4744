//! Color palette, typography, page geometry, and page-break thresholds.
//!
//! Everything here is a tuned constant rather than load-bearing logic.  The
//! break thresholds in particular are conservative empirical values; they are
//! kept in a plain struct so alternative tunings stay a one-liner away.

/// An sRGB color as the 0-255 triple used throughout the palette.
pub type Rgb8 = [u8; 3];

/// Campaign brand red (`#8d2324`), used for headings, banners, and accents.
pub const BRAND: Rgb8 = [141, 35, 36];
/// Near-black body text.
pub const INK: Rgb8 = [30, 30, 30];
/// Secondary body text (task details, legend descriptions).
pub const MUTED: Rgb8 = [60, 60, 60];
/// Dark gray used on the title page subtitle.
pub const SLATE: Rgb8 = [60, 60, 60];
/// Tagline gray on the title page.
pub const TAGLINE_GRAY: Rgb8 = [100, 100, 100];
/// Faint gray for the "generated on" line.
pub const FAINT_GRAY: Rgb8 = [150, 150, 150];
/// Running header and footer gray.
pub const CHROME_GRAY: Rgb8 = [130, 130, 130];
/// Table-of-contents and list text.
pub const LIST_GRAY: Rgb8 = [50, 50, 50];
/// White, used on filled banners.
pub const WHITE: Rgb8 = [255, 255, 255];
/// Goal-line green (`CEL:` prefix in task entries).
pub const GOAL_GREEN: Rgb8 = [0, 100, 50];
/// Info-box body background.
pub const BOX_BG: Rgb8 = [240, 245, 250];
/// Info-box body text.
pub const BOX_INK: Rgb8 = [40, 40, 40];
/// Background of even summary-table rows.
pub const STRIPE_GRAY: Rgb8 = [245, 245, 245];

/// Font weights available in the embedded DejaVu family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
    /// DejaVuSans.ttf
    Regular,
    /// DejaVuSans-Bold.ttf
    Bold,
}

/// Font selection plus text color for a single draw call.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Weight within the document font family.
    pub weight: FontWeight,
    /// Font size in points.
    pub size: f64,
    /// Text color.
    pub color: Rgb8,
}

impl TextStyle {
    /// Regular-weight style.
    pub fn regular(size: f64, color: Rgb8) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
            color,
        }
    }

    /// Bold style.
    pub fn bold(size: f64, color: Rgb8) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
            color,
        }
    }
}

/// A4 page width in millimetres.
pub const PAGE_WIDTH: f64 = 210.0;
/// A4 page height in millimetres.
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left and right page margin in millimetres.
pub const SIDE_MARGIN: f64 = 10.0;
/// Top margin; the cursor resets here after a page break.
pub const TOP_MARGIN: f64 = 10.0;
/// Reserved band at the page bottom; wrapped lines never enter it.
pub const BOTTOM_RESERVE: f64 = 20.0;
/// Extra cursor drop below the running header on pages after the first.
pub const HEADER_DROP: f64 = 8.0;

/// Width of the writable column between the side margins.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * SIDE_MARGIN;

/// Per-block-type cursor thresholds (mm from the page top) that force a page
/// break *before* the block starts.
///
/// The values are conservative so that no block is visually split across a
/// page boundary.  They are approximations, not measured heights: a very long
/// wrapped task detail can still spill after the check passes, in which case
/// the composer's bottom-reserve auto break takes over.
#[derive(Clone, Copy, Debug)]
pub struct Breaks {
    /// Threshold before a day-header banner.
    pub day_header: f64,
    /// Threshold before a task entry.
    pub task: f64,
    /// Threshold before an info box.
    pub info_box: f64,
    /// Threshold before a numbered rule entry.
    pub rule: f64,
}

impl Default for Breaks {
    fn default() -> Self {
        Self {
            day_header: 245.0,
            task: 255.0,
            info_box: 250.0,
            rule: 260.0,
        }
    }
}

/// Background color of a summary-table row, alternating by row index.
pub fn stripe_color(index: usize) -> Rgb8 {
    if index % 2 == 0 {
        STRIPE_GRAY
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripes_alternate_by_index() {
        assert_eq!(stripe_color(0), STRIPE_GRAY);
        assert_eq!(stripe_color(1), WHITE);
        assert_eq!(stripe_color(2), STRIPE_GRAY);
    }

    #[test]
    fn default_breaks_stay_above_page_bottom() {
        let breaks = Breaks::default();
        for threshold in [breaks.day_header, breaks.task, breaks.info_box, breaks.rule] {
            assert!(threshold > PAGE_HEIGHT / 2.0);
            assert!(threshold < PAGE_HEIGHT);
        }
    }
}
