//! Page geometry and typographic style
//!
//! All lengths are millimetres, font sizes are points. A [`PageStyle`] and a
//! [`PageGeometry`] are handed to each [`PageRenderer`](crate::PageRenderer)
//! explicitly; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Points to millimetres
pub const MM_PER_PT: f32 = 0.3528;

/// Physical page size and margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Uniform margin on all four sides
    pub margin_mm: f32,
}

impl PageGeometry {
    /// A4 portrait with 20 mm margins
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 20.0,
    };

    pub fn new(width_mm: f32, height_mm: f32, margin_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
            margin_mm,
        }
    }

    /// Width available to text
    pub fn content_width(&self) -> f32 {
        self.width_mm - 2.0 * self.margin_mm
    }

    /// Lowest position a line may reach
    pub fn content_bottom(&self) -> f32 {
        self.height_mm - self.margin_mm
    }

    /// Check that a fresh page can hold one line of the largest font
    pub fn validate(&self, style: &PageStyle) -> Result<()> {
        let finite = [self.width_mm, self.height_mm, self.margin_mm]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.margin_mm < 0.0 {
            return Err(PageError::Geometry(format!(
                "dimensions must be finite and margins non-negative ({self:?})"
            )));
        }
        if self.content_width() <= 0.0 {
            return Err(PageError::Geometry(format!(
                "margins of {} mm leave no width on a {} mm page",
                self.margin_mm, self.width_mm
            )));
        }
        if !style.fonts.all().iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(PageError::Geometry(format!(
                "font sizes must be positive ({:?})",
                style.fonts
            )));
        }
        let tallest = style.line_height(style.fonts.largest());
        if self.margin_mm + tallest > self.content_bottom() {
            return Err(PageError::Geometry(format!(
                "a {} mm page cannot hold a {:.1} mm line inside {} mm margins",
                self.height_mm, tallest, self.margin_mm
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

/// Point sizes per text role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub title: f32,
    pub heading: f32,
    pub body: f32,
    /// Summary and keyword text
    pub meta: f32,
    /// "Summary" / "Keywords" labels
    pub label: f32,
}

impl FontSizes {
    pub fn all(&self) -> [f32; 5] {
        [self.title, self.heading, self.body, self.meta, self.label]
    }

    pub fn largest(&self) -> f32 {
        self.all().into_iter().fold(0.0, f32::max)
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 20.0,
            heading: 16.0,
            body: 11.0,
            meta: 10.0,
            label: 14.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to `0.0..=1.0`
    pub fn unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Font, colour and spacing rules for page layout
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub fonts: FontSizes,
    /// Title, heading and body text
    pub content_color: Rgb,
    pub label_color: Rgb,
    pub meta_color: Rgb,
    /// Line advance per point of font size, in mm
    pub line_factor: f32,
    /// Average glyph width as a fraction of the font size
    pub glyph_em: f32,
    /// Gap after every wrapped text run
    pub text_gap_mm: f32,
    /// Extra gap after titles and headings
    pub heading_gap_mm: f32,
    /// Extra gap after paragraphs and lists
    pub paragraph_gap_mm: f32,
    /// Gap before the summary and keyword sections
    pub metadata_gap_mm: f32,
    /// Prefix for list items
    pub bullet: &'static str,
}

impl PageStyle {
    pub fn with_fonts(fonts: FontSizes) -> Self {
        Self {
            fonts,
            ..Self::default()
        }
    }

    /// Vertical advance for one line at `font_size`
    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_factor
    }

    /// Estimated characters that fit in `width_mm` at `font_size`
    pub fn chars_per_line(&self, width_mm: f32, font_size: f32) -> usize {
        let glyph_mm = font_size * self.glyph_em * MM_PER_PT;
        if glyph_mm <= 0.0 {
            return usize::MAX;
        }
        ((width_mm / glyph_mm).floor() as usize).max(1)
    }
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            fonts: FontSizes::default(),
            content_color: Rgb(44, 62, 80),
            label_color: Rgb(52, 152, 219),
            meta_color: Rgb(127, 140, 141),
            line_factor: 0.5,
            glyph_em: 0.5,
            text_gap_mm: 3.0,
            heading_gap_mm: 3.0,
            paragraph_gap_mm: 5.0,
            metadata_gap_mm: 10.0,
            bullet: "\u{2022} ",
        }
    }
}
