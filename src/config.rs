//! Configuration file support
//!
//! Loads settings from ~/.asmlight.toml (or %USERPROFILE%\.asmlight.toml
//! on Windows), or from a path given on the command line.
//!
//! `comment` and `statement-separator` are regexes matched against the
//! upper-cased line; write letters in them in upper case.
//!
//! Example:
//! ```text
//! palette = "auto"
//! background = "#272822"
//! grammar = "gas"
//!
//! [colors.keyword]
//! foreground = "#66D9EF"
//! bold = true
//!
//! [colors.error]
//! underline = "#FF0000"
//! underline-style = "double"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use toml::{Table, Value};

use crate::error::{Error, Result};
use crate::highlight::{
    FontWeight, Grammar, Rgb, StyleCategory, StyleTemplate, Theme, UnderlineStyle,
};

const CONFIG_FILE_NAME: &str = ".asmlight.toml";

/// Per-category changes applied on top of a palette
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleOverride {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub bold: Option<bool>,
    pub underline: Option<Rgb>,
    pub underline_style: Option<UnderlineStyle>,
}

impl StyleOverride {
    /// Apply this override to a palette template
    pub fn apply_to(&self, mut template: StyleTemplate) -> StyleTemplate {
        if let Some(color) = self.foreground {
            template = template.with_fg(color);
        }
        if let Some(color) = self.background {
            template = template.with_bg(color);
        }
        match self.bold {
            Some(true) => template = template.with_bold(),
            Some(false) => template.weight = FontWeight::Normal,
            None => {}
        }
        if self.underline.is_some() || self.underline_style.is_some() {
            let current = template.underline;
            let color = self.underline.or(current.and_then(|u| u.color));
            let style = self
                .underline_style
                .or(current.map(|u| u.style))
                .unwrap_or_default();
            template = template.with_underline(color, style);
        }
        template
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Palette name; `None` picks one from the surface appearance
    pub palette: Option<String>,
    /// Background color of the editor surface
    pub background: Option<Rgb>,
    /// Built-in grammar name
    pub grammar: String,
    /// Custom comment shape, replacing the grammar's; sees upper-cased text
    pub comment: Option<String>,
    /// Custom statement separator shape, replacing the grammar's; sees upper-cased text
    pub statement_separator: Option<String>,
    /// Per-category overrides, in file order
    pub colors: Vec<(StyleCategory, StyleOverride)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: None,
            background: None,
            grammar: "mips".to_string(),
            comment: None,
            statement_separator: None,
            colors: Vec::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load configuration from the default path
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        if let Some(name) = get_str(table, "palette")? {
            self.palette = match name.to_ascii_lowercase().as_str() {
                "auto" => None,
                _ => Some(name.to_string()),
            };
        }

        if let Some(value) = get_str(table, "background")? {
            self.background = Some(Rgb::parse(value)?);
        }

        if let Some(name) = get_str(table, "grammar")? {
            self.grammar = name.to_string();
        }

        if let Some(pattern) = get_str(table, "comment")? {
            self.comment = Some(pattern.to_string());
        }

        if let Some(pattern) = get_str(table, "statement-separator")? {
            self.statement_separator = Some(pattern.to_string());
        }

        match table.get("colors") {
            None => {}
            Some(Value::Table(colors)) => {
                for (name, value) in colors {
                    let category = StyleCategory::from_name(name)
                        .ok_or_else(|| Error::UnknownCategory(name.clone()))?;
                    let Value::Table(style) = value else {
                        return Err(invalid(&format!("colors.{}", name), "expected a table"));
                    };
                    self.colors.push((category, parse_override(name, style)?));
                }
            }
            Some(_) => return Err(invalid("colors", "expected a table")),
        }

        Ok(())
    }

    /// Resolve the palette
    ///
    /// A named palette wins; otherwise the configured background decides,
    /// then `dark_surface` from the host. Overrides are applied last.
    pub fn theme(&self, dark_surface: bool) -> Result<Theme> {
        let mut theme = match (&self.palette, self.background) {
            (Some(name), _) => Theme::by_name(name)?,
            (None, Some(background)) => Theme::for_background(background),
            (None, None) => Theme::for_appearance(dark_surface),
        };
        for (category, style) in &self.colors {
            let template = style.apply_to(*theme.template(*category));
            theme = theme.with_template(*category, template);
        }
        debug!("using palette {}", theme.name());
        Ok(theme)
    }

    /// Resolve the grammar, with any custom shapes replacing the preset's
    pub fn grammar(&self) -> Result<Grammar> {
        if self.comment.is_none() && self.statement_separator.is_none() {
            return Grammar::by_name(&self.grammar);
        }
        let preset = Grammar::by_name(&self.grammar)?;
        let comment = self.comment.as_deref().unwrap_or(preset.comment.pattern.as_str());
        let separator = self
            .statement_separator
            .as_deref()
            .unwrap_or(preset.statement_separator.pattern.as_str());
        Grammar::new("custom", comment, separator)
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Get an optional string value
fn get_str<'a>(table: &'a Table, key: &str) -> Result<Option<&'a str>> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(invalid(key, "expected a string")),
    }
}

fn parse_override(category: &str, table: &Table) -> Result<StyleOverride> {
    let key = |field: &str| format!("colors.{}.{}", category, field);
    let color = |field: &str| -> Result<Option<Rgb>> {
        get_str(table, field)
            .map_err(|_| invalid(&key(field), "expected a color string"))?
            .map(Rgb::parse)
            .transpose()
    };

    let bold = match table.get("bold") {
        None => None,
        Some(Value::Boolean(b)) => Some(*b),
        Some(_) => return Err(invalid(&key("bold"), "expected true or false")),
    };

    let underline_style = match get_str(table, "underline-style") {
        Ok(None) => None,
        Ok(Some(name)) => Some(
            UnderlineStyle::from_name(name)
                .ok_or_else(|| invalid(&key("underline-style"), "expected single, double or squiggle"))?,
        ),
        Err(_) => return Err(invalid(&key("underline-style"), "expected a string")),
    };

    Ok(StyleOverride {
        foreground: color("foreground")?,
        background: color("background")?,
        bold,
        underline: color("underline")?,
        underline_style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
palette = "solarized"
background = "#FDF6E3"
grammar = "gas"
comment = "//.*"

[colors.keyword]
foreground = "#66D9EF"
bold = false

[colors.error]
underline-style = "double"
        "##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.palette.as_deref(), Some("solarized"));
        assert_eq!(config.background, Some(Rgb::new(0xFD, 0xF6, 0xE3)));
        assert_eq!(config.grammar, "gas");
        assert_eq!(config.comment.as_deref(), Some("//.*"));
        assert!(config.statement_separator.is_none());
        assert_eq!(config.colors.len(), 2);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_auto_palette() {
        let config = Config::parse("palette = \"auto\"\nbackground = \"#272822\"").unwrap();
        assert!(config.palette.is_none());
        assert_eq!(config.theme(false).unwrap().name(), "monokai");

        let config = Config::parse("background = \"#EEE8D5\"").unwrap();
        assert_eq!(config.theme(true).unwrap().name(), "solarized");

        assert_eq!(Config::default().theme(true).unwrap().name(), "monokai");
        assert_eq!(Config::default().theme(false).unwrap().name(), "solarized");
    }

    #[test]
    fn test_overrides_applied() {
        let contents = r##"
palette = "monokai"

[colors.keyword]
foreground = "#66D9EF"
bold = false

[colors.error]
underline-style = "double"

[colors.comment]
underline = "#FFFFFF"
        "##;
        let theme = Config::parse(contents).unwrap().theme(false).unwrap();

        let keyword = theme.template(StyleCategory::Keyword);
        assert_eq!(keyword.foreground, Some(Rgb::new(0x66, 0xD9, 0xEF)));
        assert_eq!(keyword.weight, FontWeight::Normal);

        let error = theme.template(StyleCategory::Error).underline.unwrap();
        assert_eq!(error.style, UnderlineStyle::Double);
        assert_eq!(error.color, Some(Rgb::new(0xF9, 0x26, 0x72)));

        let comment = theme.template(StyleCategory::Comment).underline.unwrap();
        assert_eq!(comment.style, UnderlineStyle::Single);
        assert_eq!(comment.color, Some(Rgb::new(0xFF, 0xFF, 0xFF)));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::parse("palette = 3"), Err(Error::InvalidValue { .. })));
        assert!(matches!(Config::parse("background = \"#12\""), Err(Error::InvalidColor(_))));
        assert!(matches!(Config::parse("[colors.label]\nbold = true"), Err(Error::UnknownCategory(_))));
        assert!(matches!(Config::parse("[colors.keyword]\nbold = \"yes\""), Err(Error::InvalidValue { .. })));
        assert!(matches!(Config::parse("colors = 1"), Err(Error::InvalidValue { .. })));
        assert!(matches!(Config::parse("palette = "), Err(Error::Toml(_))));
        assert!(matches!(Config::parse("palette = \"neon\"").unwrap().theme(true), Err(Error::UnknownPalette(_))));
    }

    #[test]
    fn test_grammar_resolution() {
        let config = Config::default();
        assert_eq!(config.grammar().unwrap().name, "mips");

        let config = Config::parse("grammar = \"gas\"\nstatement-separator = \"!\"").unwrap();
        let grammar = config.grammar().unwrap();
        assert_eq!(grammar.name, "custom");
        assert_eq!(grammar.comment.pattern.as_str(), "#.*");
        assert_eq!(grammar.statement_separator.pattern.as_str(), "!");

        let config = Config::parse("comment = \"(\"").unwrap();
        assert!(matches!(config.grammar(), Err(Error::Pattern { name: "comment", .. })));

        let config = Config::parse("grammar = \"arm\"").unwrap();
        assert!(matches!(config.grammar(), Err(Error::UnknownGrammar(_))));
    }
}
