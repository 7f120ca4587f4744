//! Page composition over `printpdf`: cursor tracking, page breaks, and the
//! drawing primitives the block recipes are built from.
//!
//! The composer owns the document being built and a vertical cursor measured
//! in millimetres from the top of the active page.  Every primitive advances
//! the cursor; `ensure_room` implements the break-before-overflow policy and
//! the line-level primitives apply an automatic break against the bottom
//! reserve as a backstop for long wrapped blocks.

use printpdf::{
    Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point, Rgb,
};

use crate::error::Error;
use crate::fonts::FontSet;
use crate::style::{
    Breaks, FontWeight, Rgb8, TextStyle, BOTTOM_RESERVE, CHROME_GRAY, CONTENT_WIDTH, HEADER_DROP,
    PAGE_HEIGHT, PAGE_WIDTH, SIDE_MARGIN, TOP_MARGIN,
};
use crate::text::{pt_to_mm, TextMetrics};

/// Horizontal padding applied inside cells, in millimetres.
const CELL_PAD: f64 = 1.0;

/// Font size of the running header and the page footer, in points.
const CHROME_SIZE: f64 = 7.0;

/// Baseline of the page footer, measured from the page top.
const FOOTER_BASELINE: f64 = PAGE_HEIGHT - 9.5;

const LAYER_NAME: &str = "Tresc";

/// Horizontal alignment of text inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left aligned (with cell padding).
    #[default]
    Left,
    /// Centered within the cell.
    Center,
    /// Right aligned (with cell padding).
    Right,
}

/// Where the cursor lands after a single-line cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMove {
    /// Stay on the line; the horizontal cursor advances past the cell.
    Right,
    /// Drop below the cell and return to the left margin.
    NewLine,
}

/// A finalized document.
pub struct RenderedPdf {
    /// The serialized PDF.
    pub bytes: Vec<u8>,
    /// Number of pages the document was laid out on.
    pub pages: usize,
}

/// The document sink plus the page layout cursor.
pub struct Composer {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    metrics: TextMetrics,
    breaks: Breaks,
    running_header: String,
    cursor_x: f64,
    cursor_y: f64,
}

fn color(rgb: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        f64::from(rgb[0]) / 255.0,
        f64::from(rgb[1]) / 255.0,
        f64::from(rgb[2]) / 255.0,
        None,
    ))
}

impl Composer {
    /// Creates a composer with the first page open and the cursor at the top
    /// margin.  The running header is drawn on every page after the first.
    pub fn new(fonts: FontSet, title: &str, running_header: &str) -> Result<Self, Error> {
        let metrics = TextMetrics::new(&fonts)?;
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        let regular = doc.add_external_font(fonts.regular.as_slice())?;
        let bold = doc.add_external_font(fonts.bold.as_slice())?;

        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            regular,
            bold,
            metrics,
            breaks: Breaks::default(),
            running_header: running_header.to_owned(),
            cursor_x: SIDE_MARGIN,
            cursor_y: TOP_MARGIN,
        })
    }

    /// The page-break thresholds in effect.
    pub fn breaks(&self) -> Breaks {
        self.breaks
    }

    /// Text metrics for the embedded font family.
    pub fn metrics(&self) -> &TextMetrics {
        &self.metrics
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Vertical cursor position, in millimetres from the page top.
    pub fn y(&self) -> f64 {
        self.cursor_y
    }

    /// Moves the vertical cursor.
    pub fn set_y(&mut self, y: f64) {
        self.cursor_y = y;
    }

    /// Horizontal cursor position, in millimetres from the page left edge.
    pub fn x(&self) -> f64 {
        self.cursor_x
    }

    /// Moves the horizontal cursor.
    pub fn set_x(&mut self, x: f64) {
        self.cursor_x = x;
    }

    /// Advances the vertical cursor by `dy` millimetres.
    pub fn advance(&mut self, dy: f64) {
        self.cursor_y += dy;
    }

    /// Closes the current page and opens a fresh one.
    ///
    /// The cursor returns to the top margin; pages after the first carry the
    /// right-aligned running header, below which content resumes.
    pub fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER_NAME);
        self.pages.push((page, layer));
        self.cursor_x = SIDE_MARGIN;
        self.cursor_y = TOP_MARGIN;

        let chrome = TextStyle::regular(CHROME_SIZE, CHROME_GRAY);
        let width = self
            .metrics
            .width_mm(&self.running_header, chrome.weight, chrome.size);
        let x = PAGE_WIDTH - SIDE_MARGIN - width;
        let baseline = self.cursor_y + 3.0 + 0.3 * pt_to_mm(chrome.size);
        let header = self.running_header.clone();
        self.place_text(&header, chrome, x, baseline);

        self.cursor_y = TOP_MARGIN + HEADER_DROP;
    }

    /// Breaks the page if the cursor has crossed `threshold` (mm from top).
    ///
    /// This is the conservative break-before-overflow check: thresholds are
    /// tuned per block type rather than derived from measured block heights.
    pub fn ensure_room(&mut self, threshold: f64) {
        if self.cursor_y > threshold {
            self.break_page();
        }
    }

    /// Places one line of text in a cell of `height` millimetres.
    ///
    /// `width` of `None` extends the cell to the right margin.  A background
    /// fill covers the whole cell.  The cursor either advances past the cell
    /// on the same line or drops to the next line at the left margin.
    pub fn cell(
        &mut self,
        width: Option<f64>,
        height: f64,
        text: &str,
        style: TextStyle,
        fill: Option<Rgb8>,
        align: Align,
        mv: CellMove,
    ) {
        self.fit_line(height, self.cursor_x);
        let left = self.cursor_x;
        let width = width.unwrap_or(PAGE_WIDTH - SIDE_MARGIN - left);

        if let Some(background) = fill {
            self.fill_rect(left, self.cursor_y, width, height, background);
        }

        if !text.is_empty() {
            let text_width = self.metrics.width_mm(text, style.weight, style.size);
            let x = match align {
                Align::Left => left + CELL_PAD,
                Align::Center => left + (width - text_width) / 2.0,
                Align::Right => left + width - CELL_PAD - text_width,
            };
            let baseline = self.cursor_y + height / 2.0 + 0.3 * pt_to_mm(style.size);
            self.place_text(text, style, x, baseline);
        }

        match mv {
            CellMove::Right => self.cursor_x = left + width,
            CellMove::NewLine => {
                self.cursor_x = SIDE_MARGIN;
                self.cursor_y += height;
            }
        }
    }

    /// Places a wrapping block of text starting at the current cursor.
    ///
    /// The block is wrapped to `width` (or to the right margin), one cell of
    /// `line_height` per line, each optionally filled.  Afterwards the cursor
    /// sits below the block at the left margin.
    pub fn multi_cell(
        &mut self,
        width: Option<f64>,
        line_height: f64,
        text: &str,
        style: TextStyle,
        fill: Option<Rgb8>,
    ) {
        let left = self.cursor_x;
        let width = width.unwrap_or(PAGE_WIDTH - SIDE_MARGIN - left);
        let lines = self
            .metrics
            .wrap(text, style.weight, style.size, width - 2.0 * CELL_PAD);

        for line in lines {
            self.fit_line(line_height, left);
            if let Some(background) = fill {
                self.fill_rect(left, self.cursor_y, width, line_height, background);
            }
            if !line.is_empty() {
                let baseline = self.cursor_y + line_height / 2.0 + 0.3 * pt_to_mm(style.size);
                self.place_text(&line, style, left + CELL_PAD, baseline);
            }
            self.cursor_y += line_height;
        }

        self.cursor_x = SIDE_MARGIN;
    }

    /// Draws a horizontal rule across the content column at the cursor.
    pub fn rule_line(&mut self, stroke: Rgb8, thickness_mm: f64) {
        let layer = self.layer();
        layer.set_outline_color(color(stroke));
        layer.set_outline_thickness(thickness_mm * 72.0 / 25.4);
        let y = Mm(PAGE_HEIGHT - self.cursor_y);
        let line = Line {
            points: vec![
                (Point::new(Mm(SIDE_MARGIN), y), false),
                (Point::new(Mm(PAGE_WIDTH - SIDE_MARGIN), y), false),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        };
        layer.add_shape(line);
    }

    /// Draws the `Strona n/total` footer on every page and serializes the
    /// document.
    pub fn finish(self) -> Result<RenderedPdf, Error> {
        let total = self.pages.len();
        let chrome = TextStyle::regular(CHROME_SIZE, CHROME_GRAY);

        for (index, (page, layer)) in self.pages.iter().enumerate() {
            let label = format!("Strona {}/{}", index + 1, total);
            let width = self.metrics.width_mm(&label, chrome.weight, chrome.size);
            let x = SIDE_MARGIN + (CONTENT_WIDTH - width) / 2.0;
            let layer = self.doc.get_page(*page).get_layer(*layer);
            layer.set_fill_color(color(chrome.color));
            layer.use_text(
                label,
                chrome.size,
                Mm(x),
                Mm(PAGE_HEIGHT - FOOTER_BASELINE),
                &self.regular,
            );
        }

        let bytes = self.doc.save_to_bytes()?;
        Ok(RenderedPdf {
            bytes,
            pages: total,
        })
    }

    /// Breaks the page if a line of `height` would cross the bottom reserve,
    /// keeping the caller's left edge for continuation.
    fn fit_line(&mut self, height: f64, left: f64) {
        if self.cursor_y + height > PAGE_HEIGHT - BOTTOM_RESERVE {
            self.break_page();
            self.cursor_x = left;
        }
    }

    fn layer(&self) -> PdfLayerReference {
        let (page, layer) = self.pages[self.pages.len() - 1];
        self.doc.get_page(page).get_layer(layer)
    }

    fn font_ref(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    fn place_text(&self, text: &str, style: TextStyle, x: f64, baseline_from_top: f64) {
        let layer = self.layer();
        layer.set_fill_color(color(style.color));
        layer.use_text(
            text,
            style.size,
            Mm(x),
            Mm(PAGE_HEIGHT - baseline_from_top),
            self.font_ref(style.weight),
        );
    }

    fn fill_rect(&self, x: f64, y_from_top: f64, width: f64, height: f64, fill: Rgb8) {
        let layer = self.layer();
        layer.set_fill_color(color(fill));
        let top = Mm(PAGE_HEIGHT - y_from_top);
        let bottom = Mm(PAGE_HEIGHT - y_from_top - height);
        let rect = Line {
            points: vec![
                (Point::new(Mm(x), top), false),
                (Point::new(Mm(x + width), top), false),
                (Point::new(Mm(x + width), bottom), false),
                (Point::new(Mm(x), bottom), false),
            ],
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        };
        layer.add_shape(rect);
    }
}
