//! Page Document
//!
//! The scrolling page as a flat list of styled lines, rebuilt each frame
//! from the widgets' current state. Alongside the lines it records where
//! each section starts and which cells are clickable, so the app can map
//! mouse positions back to actions without re-deriving layout.

mod gallery;
mod sections;

pub(crate) use gallery::{art_row, frame_color};

use std::ops::Range;
use std::time::Duration;

use folio_core::content::Section;
use folio_core::{Carousel, Typewriter};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Widest the page content gets, however wide the terminal is
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Something on the page that reacts to the mouse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Previous photo button
    CarouselPrev,
    /// Next photo button
    CarouselNext,
    /// Dot for photo `n`
    CarouselDot(usize),
    /// The gallery frame (hover pauses)
    CarouselFrame,
    /// Copy-e-mail button
    CopyEmail,
    /// Project card header (click toggles modules)
    Project(usize),
}

/// A clickable region in document coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotspot {
    /// Document rows covered
    pub rows: Range<usize>,
    /// Columns covered, relative to the page layer
    pub cols: Range<u16>,
    /// What the region does
    pub target: Target,
}

impl Hotspot {
    fn contains(&self, row: usize, col: u16) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

/// Everything a frame of the page depends on
pub struct PageSnapshot<'a> {
    /// Page layer width
    pub width: u16,
    /// Time since the widgets were mounted
    pub now: Duration,
    /// Hero boot terminal
    pub terminal: &'a Typewriter,
    /// Photo gallery
    pub gallery: &'a Carousel,
    /// Copy button label
    pub copy_label: &'a str,
    /// Whether the copy confirmation is showing
    pub copied: bool,
    /// Live uptime per entry of `SERVICES` (`None` for archived roles)
    pub uptimes: Vec<Option<&'a str>>,
    /// Which project cards have their module list open
    pub expanded: &'a [bool],
    /// Project under keyboard focus
    pub focused_project: Option<usize>,
}

/// A rendered page
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// Styled rows, top to bottom
    pub lines: Vec<Line<'static>>,
    anchors: Vec<usize>,
    hotspots: Vec<Hotspot>,
    project_rows: Vec<usize>,
}

impl Document {
    /// Lay out the whole page
    pub fn build(snapshot: &PageSnapshot<'_>) -> Self {
        let mut b = DocumentBuilder::new(snapshot.width);

        for section in Section::ALL {
            b.begin_section();
            match section {
                Section::Hero => sections::hero(&mut b, snapshot),
                Section::Systems => sections::systems(&mut b),
                Section::Projects => sections::projects(&mut b, snapshot),
                Section::Stack => sections::stack(&mut b),
                Section::Processes => sections::processes(&mut b, snapshot),
                Section::Human => sections::human(&mut b, snapshot),
                Section::Contact => sections::contact(&mut b, snapshot),
            }
            b.blank();
        }

        b.finish()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no rows
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First row of `section`
    pub fn anchor(&self, section: Section) -> usize {
        self.anchors.get(section.index()).copied().unwrap_or(0)
    }

    /// Section that contains `row`
    pub fn section_at(&self, row: usize) -> Section {
        let index = self.anchors.iter().rposition(|&start| start <= row).unwrap_or(0);
        Section::from_index(index).unwrap_or(Section::Hero)
    }

    /// First row of project card `index`
    pub fn project_row(&self, index: usize) -> Option<usize> {
        self.project_rows.get(index).copied()
    }

    /// Project card containing `row`, if `row` is in the projects section
    pub fn project_at(&self, row: usize) -> Option<usize> {
        if self.section_at(row) != Section::Projects {
            return None;
        }
        self.project_rows.iter().rposition(|&start| start <= row)
    }

    /// Rows covered by the gallery frame and its controls
    pub fn gallery_rows(&self) -> Option<Range<usize>> {
        self.hotspots
            .iter()
            .find(|h| h.target == Target::CarouselFrame)
            .map(|h| h.rows.clone())
    }

    /// Clickable target at a document cell
    ///
    /// Buttons win over the frame they sit in.
    pub fn hit(&self, row: usize, col: u16) -> Option<Target> {
        let mut frame = None;
        for hotspot in self.hotspots.iter().filter(|h| h.contains(row, col)) {
            if hotspot.target == Target::CarouselFrame {
                frame = Some(Target::CarouselFrame);
            } else {
                return Some(hotspot.target);
            }
        }
        frame
    }

    /// Plain text of a row (for tests and logs)
    pub fn row_text(&self, row: usize) -> String {
        self.lines
            .get(row)
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .unwrap_or_default()
    }
}

/// Incremental document writer shared by the section renderers
pub(crate) struct DocumentBuilder {
    lines: Vec<Line<'static>>,
    anchors: Vec<usize>,
    hotspots: Vec<Hotspot>,
    project_rows: Vec<usize>,
    /// Left margin in columns
    margin: u16,
    /// Usable width in columns
    width: u16,
}

impl DocumentBuilder {
    fn new(layer_width: u16) -> Self {
        let width = layer_width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(20);
        let margin = layer_width.saturating_sub(width) / 2;
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
            hotspots: Vec::new(),
            project_rows: Vec::new(),
            margin,
            width,
        }
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
            hotspots: self.hotspots,
            project_rows: self.project_rows,
        }
    }

    fn begin_section(&mut self) {
        self.anchors.push(self.lines.len());
    }

    /// Usable content width
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Index the next pushed row will get
    pub fn row(&self) -> usize {
        self.lines.len()
    }

    /// Append a row, indented by the margin
    pub fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        if self.margin > 0 {
            all.push(Span::styled(" ".repeat(self.margin as usize), theme::text()));
        }
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Append an empty row
    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append wrapped text with a hanging indent
    pub fn wrapped(&mut self, text: &str, style: Style, indent: u16) {
        let avail = usize::from(self.width.saturating_sub(indent).max(8));
        let pad = " ".repeat(usize::from(indent));
        for piece in textwrap::wrap(text, avail) {
            self.push(vec![
                Span::styled(pad.clone(), style),
                Span::styled(piece.into_owned(), style),
            ]);
        }
    }

    /// Section heading: `── 02 // ACTIVE OPS ─────`
    pub fn section_header(&mut self, section: Section) {
        let label = format!(" MODULE // {:02} ", section.index());
        let title = format!(" {} ", section.title());
        let used = 2 + label.width() + title.width();
        let tail = usize::from(self.width).saturating_sub(used);
        self.push(vec![
            Span::styled("──", theme::faint()),
            Span::styled(label, theme::heading(theme::AMBER_DIM)),
            Span::styled(title, theme::heading(theme::CREAM)),
            Span::styled("─".repeat(tail), theme::faint()),
        ]);
        self.blank();
    }

    /// Register a clickable region; `cols` are relative to the margin
    pub fn hotspot(&mut self, rows: Range<usize>, cols: Range<u16>, target: Target) {
        let cols = (cols.start + self.margin)..(cols.end + self.margin);
        self.hotspots.push(Hotspot { rows, cols, target });
    }

    /// Mark the start of a project card
    pub fn mark_project(&mut self) {
        self.project_rows.push(self.lines.len());
    }
}

/// Pad or cut `text` to exactly `width` columns
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Display width of a span list
pub(crate) fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}
