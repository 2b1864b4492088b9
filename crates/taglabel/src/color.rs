//! Colors and the per-label category palette.

use taglabel_patterns::PatternKind;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel, 255 being opaque.
    pub alpha: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build an opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: u8::MAX,
        }
    }
}

/// Colors applied to highlighted runs, one per pattern kind, plus the base
/// text color.
///
/// Each label owns its palette, so recoloring one label never affects
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ColorPalette {
    /// Hashtag color.
    pub hash: Rgba,
    /// Mention color.
    pub mention: Rgba,
    /// URL color.
    pub url: Rgba,
    /// Custom pattern color.
    pub custom: Rgba,
    /// Color of text outside any highlighted run.
    pub text: Rgba,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            hash: Rgba::rgb(85, 172, 238),
            mention: Rgba::rgb(238, 85, 96),
            url: Rgba::rgb(85, 238, 151),
            custom: Rgba::BLACK,
            text: Rgba::rgb(102, 117, 127),
        }
    }
}

impl ColorPalette {
    /// Color used for runs of `kind`.
    ///
    /// # Examples
    /// ```
    /// use taglabel::{ColorPalette, PatternKind, Rgba};
    /// let palette = ColorPalette::default();
    /// assert_eq!(palette.color_for(PatternKind::Custom), Rgba::BLACK);
    /// ```
    #[must_use]
    pub const fn color_for(&self, kind: PatternKind) -> Rgba {
        match kind {
            PatternKind::Hash => self.hash,
            PatternKind::Mention => self.mention,
            PatternKind::Url => self.url,
            PatternKind::Custom => self.custom,
        }
    }

    /// Replace the color used for runs of `kind`.
    pub fn set(&mut self, kind: PatternKind, color: Rgba) {
        let slot = match kind {
            PatternKind::Hash => &mut self.hash,
            PatternKind::Mention => &mut self.mention,
            PatternKind::Url => &mut self.url,
            PatternKind::Custom => &mut self.custom,
        };
        *slot = color;
    }
}
