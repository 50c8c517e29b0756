//! Glyph palette: characters ordered from dark to bright.

use crate::error::{RenderError, Result};
use crate::types::DEFAULT_PALETTE;

/// Non-empty, ordered set of glyphs indexed by quantized luma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<char>,
}

impl GlyphPalette {
    /// Build a palette from the characters of `glyphs`, darkest first.
    ///
    /// ```
    /// use camscii_core::GlyphPalette;
    ///
    /// let p = GlyphPalette::new(" .:#").unwrap();
    /// assert_eq!(p.glyph_for(0.0), ' ');
    /// assert_eq!(p.glyph_for(255.0), '#');
    /// assert!(GlyphPalette::new("").is_err());
    /// ```
    pub fn new(glyphs: &str) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// `round((len - 1) * luma / 255)`, with luma clamped to `[0, 255]`.
    #[inline]
    pub fn index_for(&self, luma: f32) -> usize {
        let top = (self.glyphs.len() - 1) as f32;
        let idx = (top * luma.clamp(0.0, 255.0) / 255.0).round() as usize;
        idx.min(self.glyphs.len() - 1)
    }

    #[inline]
    pub fn glyph_for(&self, luma: f32) -> char {
        self.glyphs[self.index_for(luma)]
    }

    pub fn darkest(&self) -> char {
        self.glyphs[0]
    }

    pub fn brightest(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_PALETTE.chars().collect(),
        }
    }
}
