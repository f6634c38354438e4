//! Appearance settings for the suggestion dropdown.
//!
//! None of these values influence matching or the session; they are stored
//! as given and read by the [`Dropdown`](super::dropdown::Dropdown) when it
//! draws. Colors use lipgloss color strings (`"240"`, `"#AD58B4"`); `None`
//! leaves the terminal default in place.

/// Default glyph used for drop shadows.
pub const SHADOW_GLYPH: char = '░';

/// Default shadow color (a mid gray).
pub const SHADOW_COLOR: &str = "240";

bitflags::bitflags! {
    /// Corners of the dropdown box that get rounded when `corner_radius > 0`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        /// Top left corner.
        const TOP_LEFT     = 0b0001;
        /// Top right corner.
        const TOP_RIGHT    = 0b0010;
        /// Bottom left corner.
        const BOTTOM_LEFT  = 0b0100;
        /// Bottom right corner.
        const BOTTOM_RIGHT = 0b1000;
    }
}

bitflags::bitflags! {
    /// Sides of the dropdown box a shadow is cast on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShadowSides: u8 {
        /// Column left of the box.
        const LEFT   = 0b001;
        /// Column right of the box.
        const RIGHT  = 0b010;
        /// Row under the box.
        const BOTTOM = 0b100;
    }
}

/// Explicit shadow description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowConfig {
    /// Sides the shadow covers.
    pub sides: ShadowSides,
    /// Glyph repeated along each side.
    pub glyph: char,
    /// Glyph color.
    pub color: String,
}

impl ShadowConfig {
    /// A shadow on `sides` with the default glyph and color.
    pub fn new(sides: ShadowSides) -> Self {
        Self {
            sides,
            glyph: SHADOW_GLYPH,
            color: SHADOW_COLOR.to_string(),
        }
    }

    /// Overrides the glyph.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Overrides the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Shadow presets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Shadow {
    /// No shadow.
    #[default]
    None,
    /// Shadow along the bottom and the right side.
    BottomRight,
    /// Shadow along the left side and the bottom.
    BottomLeft,
    /// Shadow on every side except the top.
    Full,
    /// Caller supplied configuration.
    Custom(ShadowConfig),
}

impl Shadow {
    /// Resolves the preset into a concrete configuration.
    pub fn configuration(&self) -> ShadowConfig {
        match self {
            Shadow::None => ShadowConfig::new(ShadowSides::empty()),
            Shadow::BottomRight => ShadowConfig::new(ShadowSides::BOTTOM | ShadowSides::RIGHT),
            Shadow::BottomLeft => ShadowConfig::new(ShadowSides::BOTTOM | ShadowSides::LEFT),
            Shadow::Full => ShadowConfig::new(ShadowSides::all()),
            Shadow::Custom(config) => config.clone(),
        }
    }
}

/// Every appearance knob of the dropdown.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{Corners, DropdownStyle, Shadow};
///
/// let style = DropdownStyle::default()
///     .with_border(1, "#874BFD")
///     .with_corner_radius(1, Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT)
///     .with_shadow(Shadow::BottomRight)
///     .with_separator(1, "238");
/// assert_eq!(style.separator_height, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownStyle {
    /// 0 draws no border, 1 light lines, 2 or more heavy lines.
    pub border_width: u16,
    /// Border color.
    pub border_color: Option<String>,
    /// Any value above zero rounds the corners in `corners_to_round`.
    pub corner_radius: u16,
    /// Corners affected by `corner_radius`.
    pub corners_to_round: Corners,
    /// Drop shadow.
    pub shadow: Shadow,
    /// Lines drawn between rows; 0 disables separators.
    pub separator_height: u16,
    /// Separator color.
    pub separator_color: Option<String>,
    /// Row background.
    pub row_background: Option<String>,
    /// Row text color.
    pub text_color: Option<String>,
    /// Text color of the highlighted row.
    pub highlight_color: Option<String>,
    /// Lines per row, at least one.
    pub row_height: u16,
    /// Blank cells left and right of each row's text.
    pub horizontal_inset: u16,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            border_width: 1,
            border_color: Some("240".to_string()),
            corner_radius: 0,
            corners_to_round: Corners::all(),
            shadow: Shadow::None,
            separator_height: 0,
            separator_color: Some("238".to_string()),
            row_background: None,
            text_color: Some("#dddddd".to_string()),
            highlight_color: Some("#EE6FF8".to_string()),
            row_height: 1,
            horizontal_inset: 1,
        }
    }
}

impl DropdownStyle {
    /// Sets border width and color.
    pub fn with_border(mut self, width: u16, color: impl Into<String>) -> Self {
        self.border_width = width;
        self.border_color = Some(color.into());
        self
    }

    /// Sets the corner radius and which corners it applies to.
    pub fn with_corner_radius(mut self, radius: u16, corners: Corners) -> Self {
        self.corner_radius = radius;
        self.corners_to_round = corners;
        self
    }

    /// Sets the shadow.
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Sets separator height and color.
    pub fn with_separator(mut self, height: u16, color: impl Into<String>) -> Self {
        self.separator_height = height;
        self.separator_color = Some(color.into());
        self
    }

    /// Sets the row background.
    pub fn with_row_background(mut self, color: impl Into<String>) -> Self {
        self.row_background = Some(color.into());
        self
    }

    /// Sets the row height in lines. Zero is treated as one.
    pub fn with_row_height(mut self, height: u16) -> Self {
        self.row_height = height;
        self
    }

    /// Sets the horizontal inset.
    pub fn with_horizontal_inset(mut self, inset: u16) -> Self {
        self.horizontal_inset = inset;
        self
    }

    pub(crate) fn is_rounded(&self, corner: Corners) -> bool {
        self.corner_radius > 0 && self.corners_to_round.contains(corner)
    }
}
