//! Style types for highlighted ranges
//!
//! A [`StyleTemplate`] describes how one category looks; binding it to
//! an offset range with [`StyleTemplate::for_range`] yields the
//! [`StyleRange`] handed back to the editor.

use std::fmt;

use crate::error::{Error, Result};
use super::category::StyleCategory;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional)
    pub fn parse(text: &str) -> Result<Self> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(text.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(text.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Mean of the three channels
    pub fn mean(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Stroke used when a range is underlined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    #[default]
    Single,
    Double,
    Squiggle,
}

impl UnderlineStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "single" => Some(UnderlineStyle::Single),
            "double" => Some(UnderlineStyle::Double),
            "squiggle" | "curly" => Some(UnderlineStyle::Squiggle),
            _ => None,
        }
    }
}

/// Underline descriptor: color plus stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underline {
    /// Underline color; `None` uses the foreground
    pub color: Option<Rgb>,
    pub style: UnderlineStyle,
}

/// Visual template for one style category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleTemplate {
    /// Foreground color, `None` keeps the editor default
    pub foreground: Option<Rgb>,
    /// Background color, `None` keeps the editor default
    pub background: Option<Rgb>,
    pub weight: FontWeight,
    pub underline: Option<Underline>,
}

impl StyleTemplate {
    /// Create a template with just a foreground color
    pub fn fg(color: Rgb) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    /// Create a template that only draws an underline
    pub fn underlined(color: Rgb, style: UnderlineStyle) -> Self {
        Self {
            underline: Some(Underline { color: Some(color), style }),
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self, color: Option<Rgb>, style: UnderlineStyle) -> Self {
        self.underline = Some(Underline { color, style });
        self
    }

    /// Check if this template leaves text unstyled
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Bind this template to a concrete range
    pub fn for_range(&self, category: StyleCategory, start: usize, length: usize) -> StyleRange {
        StyleRange {
            start,
            length,
            category,
            template: *self,
        }
    }
}

/// A classified range of the buffer
///
/// Offsets are byte offsets into the whole buffer, not the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length in bytes, always non-zero
    pub length: usize,
    pub category: StyleCategory,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, length: usize, category: StyleCategory) -> Self {
        Self { start, length, category }
    }

    /// Offset one past the last byte
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// A span bound to its visual template, ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRange {
    pub start: usize,
    pub length: usize,
    pub category: StyleCategory,
    pub template: StyleTemplate,
}

impl StyleRange {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}
