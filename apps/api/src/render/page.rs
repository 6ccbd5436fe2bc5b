//! Page model and vertical cursor.
//!
//! Coordinates are PDF points with the origin at the bottom-left of the page.
//! `Document` owns every page plus the write cursor; a page break appends a
//! page and moves the cursor index, nothing is ever rebound.

use tracing::trace;

use crate::render::font_metrics::StandardFont;
use crate::render::style::Rgb;

/// US Letter.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 50.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Already sanitized.
    pub text: String,
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub font: StandardFont,
    pub size: f32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextRun),
    Line {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgb>,
        border: Option<(Rgb, f32)>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(run) => Some(run),
            _ => None,
        })
    }
}

/// Outcome of an `ensure_space` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceCheck {
    Fits,
    PageBroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
    current: usize,
    cursor_y: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// One empty page, cursor at the top margin.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            current: 0,
            cursor_y: Self::top(),
        }
    }

    /// Cursor position of a fresh page.
    pub fn top() -> f32 {
        PAGE_HEIGHT - MARGIN
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Moves the cursor to an absolute position on the current page.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor_y = y;
    }

    /// Starts a new page when fewer than `needed` points remain above the bottom margin.
    pub fn ensure_space(&mut self, needed: f32) -> SpaceCheck {
        if self.cursor_y - needed < MARGIN {
            self.new_page();
            trace!(page = self.current_page_index() + 1, needed, "Page break");
            SpaceCheck::PageBroke
        } else {
            SpaceCheck::Fits
        }
    }

    /// Moves the cursor down after a draw. Stops at the bottom margin; the next
    /// `ensure_space` handles the break.
    pub fn advance(&mut self, height: f32) {
        self.cursor_y = (self.cursor_y - height).max(MARGIN);
    }

    pub fn push(&mut self, element: Element) {
        self.pages[self.current].elements.push(element);
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.current = self.pages.len() - 1;
        self.cursor_y = Self::top();
    }
}
