//! Terminal renderer for suggestion rows.
//!
//! [`Dropdown`] implements [`Renderer`]: it keeps whatever rows the session
//! last rendered and draws them as a boxed list with lipgloss, following the
//! settings in [`DropdownStyle`]. It also tracks which row is highlighted so
//! keyboard users can pick a suggestion.

use super::render::{Renderer, Row};
use super::style::{Corners, DropdownStyle, ShadowSides};
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to rows that do not fit.
pub const ELLIPSIS: &str = "…";

struct BorderGlyphs {
    horizontal: &'static str,
    vertical: &'static str,
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
}

impl BorderGlyphs {
    fn for_style(style: &DropdownStyle) -> Option<Self> {
        let mut glyphs = match style.border_width {
            0 => return None,
            1 => Self {
                horizontal: "─",
                vertical: "│",
                top_left: "┌",
                top_right: "┐",
                bottom_left: "└",
                bottom_right: "┘",
            },
            _ => Self {
                horizontal: "━",
                vertical: "┃",
                top_left: "┏",
                top_right: "┓",
                bottom_left: "┗",
                bottom_right: "┛",
            },
        };

        if style.is_rounded(Corners::TOP_LEFT) {
            glyphs.top_left = "╭";
        }
        if style.is_rounded(Corners::TOP_RIGHT) {
            glyphs.top_right = "╮";
        }
        if style.is_rounded(Corners::BOTTOM_LEFT) {
            glyphs.bottom_left = "╰";
        }
        if style.is_rounded(Corners::BOTTOM_RIGHT) {
            glyphs.bottom_right = "╯";
        }
        Some(glyphs)
    }
}

/// A boxed suggestion list drawn under a text field.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    /// Appearance settings, read on every `view()`.
    pub style: DropdownStyle,
    rows: Vec<Row>,
    visible: bool,
    highlight: usize,
    width: usize,
}

impl Dropdown {
    /// Creates a hidden dropdown with the given style.
    pub fn new(style: DropdownStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Whether the list is on screen.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Rows currently drawn.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the highlighted row.
    pub fn highlight_index(&self) -> usize {
        self.highlight
    }

    /// The highlighted row, if the list is visible.
    pub fn highlighted(&self) -> Option<&Row> {
        if !self.visible {
            return None;
        }
        self.rows.get(self.highlight)
    }

    /// Fixes the inner width of the box. Zero sizes the box to its content.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Moves the highlight down, wrapping to the first row.
    pub fn next(&mut self) {
        if !self.rows.is_empty() {
            self.highlight = (self.highlight + 1) % self.rows.len();
        }
    }

    /// Moves the highlight up, wrapping to the last row.
    pub fn previous(&mut self) {
        if !self.rows.is_empty() {
            if self.highlight == 0 {
                self.highlight = self.rows.len() - 1;
            } else {
                self.highlight -= 1;
            }
        }
    }

    /// Renders the dropdown. Hidden dropdowns render as an empty string.
    pub fn view(&self) -> String {
        if !self.visible || self.rows.is_empty() {
            return String::new();
        }
        let (lines, width) = self.box_lines();
        self.cast_shadow(lines, width).join("\n")
    }

    fn inner_width(&self) -> usize {
        let inset = self.style.horizontal_inset as usize * 2;
        let content = self
            .rows
            .iter()
            .map(|row| row.text.width() + inset)
            .max()
            .unwrap_or(0);
        let width = if self.width > 0 { self.width } else { content };
        width.max(inset + 1)
    }

    /// Draws the box and returns its lines with their common visible width.
    fn box_lines(&self) -> (Vec<String>, usize) {
        let style = &self.style;
        let inset = style.horizontal_inset as usize;
        let inner = self.inner_width();
        let text_width = inner - inset * 2;

        let glyphs = BorderGlyphs::for_style(style);
        let border = paint(style.border_color.as_deref(), None);
        let row_style = paint(style.text_color.as_deref(), style.row_background.as_deref());
        let highlight_style = paint(
            style.highlight_color.as_deref(),
            style.row_background.as_deref(),
        )
        .bold(true);
        let separator = paint(
            style.separator_color.as_deref(),
            style.row_background.as_deref(),
        );

        let frame = |content: String| -> String {
            match &glyphs {
                Some(g) => format!(
                    "{}{}{}",
                    border.render(g.vertical),
                    content,
                    border.render(g.vertical)
                ),
                None => content,
            }
        };

        let mut lines = Vec::new();
        if let Some(g) = &glyphs {
            lines.push(border.render(&format!(
                "{}{}{}",
                g.top_left,
                g.horizontal.repeat(inner),
                g.top_right
            )));
        }

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                for _ in 0..style.separator_height {
                    lines.push(frame(separator.render(&"─".repeat(inner))));
                }
            }

            let text = truncate(&row.text, text_width);
            let pad = text_width.saturating_sub(text.width());
            let content = format!(
                "{}{}{}{}",
                " ".repeat(inset),
                text,
                " ".repeat(pad),
                " ".repeat(inset)
            );
            let painted = if i == self.highlight {
                highlight_style.render(&content)
            } else {
                row_style.render(&content)
            };
            lines.push(frame(painted));

            for _ in 1..style.row_height.max(1) {
                lines.push(frame(row_style.render(&" ".repeat(inner))));
            }
        }

        if let Some(g) = &glyphs {
            lines.push(border.render(&format!(
                "{}{}{}",
                g.bottom_left,
                g.horizontal.repeat(inner),
                g.bottom_right
            )));
        }

        let width = if glyphs.is_some() { inner + 2 } else { inner };
        (lines, width)
    }

    /// Adds shadow glyphs around the box, offset one line down.
    fn cast_shadow(&self, lines: Vec<String>, width: usize) -> Vec<String> {
        let config = self.style.shadow.configuration();
        if config.sides.is_empty() {
            return lines;
        }

        let shade = Style::new().foreground(Color::from(config.color.as_str()));
        let glyph = config.glyph.to_string();
        let left = config.sides.contains(ShadowSides::LEFT);
        let right = config.sides.contains(ShadowSides::RIGHT);

        let mut out: Vec<String> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let edge = if i == 0 {
                    " ".to_string()
                } else {
                    shade.render(&glyph)
                };
                let mut s = String::new();
                if left {
                    s.push_str(&edge);
                }
                s.push_str(&line);
                if right {
                    s.push_str(&edge);
                }
                s
            })
            .collect();

        if config.sides.contains(ShadowSides::BOTTOM) {
            let total = width + usize::from(left) + usize::from(right);
            let lead = usize::from(right && !left);
            let trail = usize::from(left && !right);
            out.push(format!(
                "{}{}",
                " ".repeat(lead),
                shade.render(&glyph.repeat(total - lead - trail))
            ));
        }
        out
    }
}

impl Renderer for Dropdown {
    fn render(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.visible = true;
        self.highlight = 0;
    }

    fn rerender(&mut self, rows: Vec<Row>) {
        // Keep the highlight on the same text when it survives the refresh.
        let current = self.highlighted().map(|row| row.text.clone());
        self.rows = rows;
        self.visible = true;
        self.highlight = current
            .and_then(|text| self.rows.iter().position(|row| row.text == text))
            .unwrap_or(0);
    }

    fn hide(&mut self) {
        self.rows.clear();
        self.visible = false;
        self.highlight = 0;
    }
}

fn paint(foreground: Option<&str>, background: Option<&str>) -> Style {
    let mut style = Style::new();
    if let Some(color) = foreground {
        style = style.foreground(Color::from(color));
    }
    if let Some(color) = background {
        style = style.background(Color::from(color));
    }
    style
}

/// Cuts `text` to at most `max` display cells, marking the cut with an
/// ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - ELLIPSIS.width();
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}
