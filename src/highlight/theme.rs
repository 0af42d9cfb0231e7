//! Palettes mapping each style category to a template
//!
//! Two palettes are built in: Monokai for dark surfaces and Solarized
//! for light ones. Which one applies is decided once per editor, from
//! an appearance flag or the surface's background color.

use log::debug;

use crate::error::{Error, Result};
use super::category::StyleCategory;
use super::style::{Rgb, Span, StyleRange, StyleTemplate, UnderlineStyle};

/// Channel mean below which a background counts as dark
const DARK_THRESHOLD: u8 = 0x7F;

/// Check if a background color is dark
pub fn is_dark_background(background: Rgb) -> bool {
    background.mean() < DARK_THRESHOLD
}

mod monokai {
    use super::Rgb;

    pub const PINK: Rgb = Rgb::new(0xF9, 0x26, 0x72);
    pub const BROWN: Rgb = Rgb::new(0x75, 0x71, 0x51);
    pub const GREEN: Rgb = Rgb::new(0xA6, 0xE2, 0x2E);
    pub const ORANGE: Rgb = Rgb::new(0xFD, 0x97, 0x1F);
    pub const PURPLE: Rgb = Rgb::new(0xAE, 0x81, 0xFF);
}

mod solarized {
    use super::Rgb;

    pub const BASE1: Rgb = Rgb::new(0x93, 0xA1, 0xA1);
    pub const ORANGE: Rgb = Rgb::new(0xCB, 0x4B, 0x16);
    pub const RED: Rgb = Rgb::new(0xDC, 0x32, 0x2F);
    pub const MAGENTA: Rgb = Rgb::new(0xD3, 0x36, 0x82);
    pub const BLUE: Rgb = Rgb::new(0x26, 0x8B, 0xD2);
    pub const CYAN: Rgb = Rgb::new(0x2A, 0xA1, 0x98);
}

/// One template per style category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    templates: [StyleTemplate; 6],
}

impl Theme {
    /// Create a theme; `templates` is indexed by [`StyleCategory::index`]
    pub fn new(name: &str, templates: [StyleTemplate; 6]) -> Self {
        Self {
            name: name.to_string(),
            templates,
        }
    }

    /// Create a theme by asking for each category's template
    pub fn from_fn(name: &str, template: impl Fn(StyleCategory) -> StyleTemplate) -> Self {
        Self::new(name, StyleCategory::ALL.map(template))
    }

    /// Dark palette
    pub fn monokai() -> Self {
        Self::from_fn("monokai", |category| match category {
            StyleCategory::Error => StyleTemplate::underlined(monokai::PINK, UnderlineStyle::Squiggle),
            StyleCategory::Comment => StyleTemplate::fg(monokai::BROWN),
            StyleCategory::Punctuation => StyleTemplate::fg(monokai::PINK),
            StyleCategory::Keyword => StyleTemplate::fg(monokai::GREEN).with_bold(),
            StyleCategory::Register => StyleTemplate::fg(monokai::ORANGE),
            StyleCategory::Immediate => StyleTemplate::fg(monokai::PURPLE),
        })
    }

    /// Light palette
    pub fn solarized() -> Self {
        Self::from_fn("solarized", |category| match category {
            StyleCategory::Error => StyleTemplate::underlined(solarized::RED, UnderlineStyle::Squiggle),
            StyleCategory::Comment => StyleTemplate::fg(solarized::BASE1),
            StyleCategory::Punctuation => StyleTemplate::fg(solarized::MAGENTA),
            StyleCategory::Keyword => StyleTemplate::fg(solarized::CYAN),
            StyleCategory::Register => StyleTemplate::fg(solarized::BLUE),
            StyleCategory::Immediate => StyleTemplate::fg(solarized::ORANGE),
        })
    }

    /// Look up a built-in palette by name
    ///
    /// `dark` and `light` are accepted as aliases.
    pub fn by_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "monokai" | "dark" => Ok(Self::monokai()),
            "solarized" | "light" => Ok(Self::solarized()),
            _ => Err(Error::UnknownPalette(name.to_string())),
        }
    }

    /// Pick the palette for a dark or light surface
    pub fn for_appearance(dark: bool) -> Self {
        if dark {
            Self::monokai()
        } else {
            Self::solarized()
        }
    }

    /// Pick the palette for a surface with the given background
    pub fn for_background(background: Rgb) -> Self {
        let dark = is_dark_background(background);
        debug!("background {} is {}", background, if dark { "dark" } else { "light" });
        Self::for_appearance(dark)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template for a category
    pub fn template(&self, category: StyleCategory) -> &StyleTemplate {
        &self.templates[category.index()]
    }

    /// Builder: replace one category's template
    pub fn with_template(mut self, category: StyleCategory, template: StyleTemplate) -> Self {
        self.templates[category.index()] = template;
        self
    }

    /// Bind a category's template to a range
    pub fn for_range(&self, category: StyleCategory, start: usize, length: usize) -> StyleRange {
        self.template(category).for_range(category, start, length)
    }

    /// Bind a classified span to its template
    pub fn for_span(&self, span: &Span) -> StyleRange {
        self.for_range(span.category, span.start, span.length)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::monokai()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::style::FontWeight;

    #[test]
    fn test_dark_background() {
        assert!(is_dark_background(Rgb::new(0x27, 0x28, 0x22)));
        assert!(is_dark_background(Rgb::new(0x7E, 0x7E, 0x7E)));
        assert!(!is_dark_background(Rgb::new(0x7F, 0x7F, 0x7F)));
        assert!(!is_dark_background(Rgb::new(0xFD, 0xF6, 0xE3)));
        // Mean, not maximum
        assert!(is_dark_background(Rgb::new(0xFF, 0x00, 0x00)));
    }

    #[test]
    fn test_palette_selection() {
        assert_eq!(Theme::for_appearance(true).name(), "monokai");
        assert_eq!(Theme::for_appearance(false).name(), "solarized");
        assert_eq!(Theme::for_background(Rgb::new(0, 0, 0)).name(), "monokai");
        assert_eq!(Theme::for_background(Rgb::new(0xEE, 0xE8, 0xD5)).name(), "solarized");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("Solarized").unwrap().name(), "solarized");
        assert_eq!(Theme::by_name("dark").unwrap().name(), "monokai");
        assert!(matches!(Theme::by_name("dracula"), Err(Error::UnknownPalette(_))));
    }

    #[test]
    fn test_monokai_templates() {
        let theme = Theme::monokai();
        let keyword = theme.template(StyleCategory::Keyword);
        assert_eq!(keyword.foreground, Some(Rgb::new(0xA6, 0xE2, 0x2E)));
        assert_eq!(keyword.weight, FontWeight::Bold);

        let error = theme.template(StyleCategory::Error);
        assert!(error.foreground.is_none());
        let underline = error.underline.unwrap();
        assert_eq!(underline.style, UnderlineStyle::Squiggle);
        assert_eq!(underline.color, Some(Rgb::new(0xF9, 0x26, 0x72)));
    }

    #[test]
    fn test_every_category_is_styled() {
        for theme in [Theme::monokai(), Theme::solarized()] {
            for category in StyleCategory::ALL {
                assert!(!theme.template(category).is_plain(), "{} {:?}", theme.name(), category);
            }
        }
    }

    #[test]
    fn test_with_template_and_for_span() {
        let plain = StyleTemplate::fg(Rgb::new(1, 1, 1));
        let theme = Theme::solarized().with_template(StyleCategory::Register, plain);
        let range = theme.for_span(&Span::new(4, 3, StyleCategory::Register));
        assert_eq!(range.template, plain);
        assert_eq!((range.start, range.length), (4, 3));
        assert_eq!(theme.template(StyleCategory::Keyword).foreground, Some(solarized::CYAN));
    }
}
