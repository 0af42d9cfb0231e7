//! Terminal rendering of styled lines using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
        SetUnderlineColor,
    },
};
use unicode_width::UnicodeWidthChar;

use asmlight::highlight::{FontWeight, Rgb, StyleTemplate, UnderlineStyle};
use asmlight::{LineStyleRequest, Result};

fn term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Writes highlighted lines to a terminal
pub struct Renderer<W: Write> {
    out: W,
    /// Display columns available per line; `None` disables clipping
    max_cols: Option<usize>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, max_cols: Option<usize>) -> Self {
        Self { out, max_cols }
    }

    /// Render one answered style request followed by a newline
    pub fn render_line(&mut self, request: &LineStyleRequest) -> Result<()> {
        let text = request.line_text.as_str();
        let mut cols = 0;
        let mut pos = 0;

        for range in &request.styles {
            let start = range.start.saturating_sub(request.line_offset).max(pos);
            let end = (range.end() - request.line_offset).min(text.len());
            if start >= end {
                continue;
            }
            if !self.write_clipped(&text[pos..start], &mut cols)? {
                return self.finish_line();
            }
            self.apply_template(&range.template)?;
            let fits = self.write_clipped(&text[start..end], &mut cols)?;
            self.reset_attributes()?;
            pos = end;
            if !fits {
                return self.finish_line();
            }
        }

        self.write_clipped(&text[pos..], &mut cols)?;
        self.finish_line()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Write as much of `text` as fits; false once the line is full
    fn write_clipped(&mut self, text: &str, cols: &mut usize) -> Result<bool> {
        let Some(max_cols) = self.max_cols else {
            queue!(self.out, Print(text))?;
            return Ok(true);
        };

        let mut end = 0;
        for (idx, ch) in text.char_indices() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
            if *cols + ch_width > max_cols {
                queue!(self.out, Print(&text[..idx]))?;
                return Ok(false);
            }
            *cols += ch_width;
            end = idx + ch.len_utf8();
        }
        queue!(self.out, Print(&text[..end]))?;
        Ok(true)
    }

    fn apply_template(&mut self, template: &StyleTemplate) -> Result<()> {
        if let Some(color) = template.foreground {
            queue!(self.out, SetForegroundColor(term_color(color)))?;
        }
        if let Some(color) = template.background {
            queue!(self.out, SetBackgroundColor(term_color(color)))?;
        }
        if template.weight == FontWeight::Bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if let Some(underline) = template.underline {
            if let Some(color) = underline.color {
                queue!(self.out, SetUnderlineColor(term_color(color)))?;
            }
            let attribute = match underline.style {
                UnderlineStyle::Single => Attribute::Underlined,
                UnderlineStyle::Double => Attribute::DoubleUnderlined,
                UnderlineStyle::Squiggle => Attribute::Undercurled,
            };
            queue!(self.out, SetAttribute(attribute))?;
        }
        Ok(())
    }

    fn reset_attributes(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }

    fn finish_line(&mut self) -> Result<()> {
        queue!(self.out, Print("\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asmlight::{Highlighter, LineClassifier, Theme};

    fn render(line: &str, max_cols: Option<usize>) -> String {
        let classifier = LineClassifier::mips().unwrap();
        let theme = Theme::monokai();
        let highlighter = Highlighter::new(&classifier, &theme);
        let mut request = LineStyleRequest::new(line, 0);
        highlighter.on_line_style_requested(&mut request);

        let mut renderer = Renderer::new(Vec::new(), max_cols);
        renderer.render_line(&request).unwrap();
        String::from_utf8(renderer.out).unwrap()
    }

    /// Drop CSI escape sequences, leaving the printed text
    fn strip_escapes(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\x1b' {
                for ch in chars.by_ref() {
                    if ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(ch);
            }
        }
        plain
    }

    #[test]
    fn test_text_preserved() {
        let line = "loop: addi $t0, $t0, -1 # count down ";
        let output = render(line, None);
        assert_eq!(strip_escapes(&output), format!("{}\n", line));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_clipping() {
        let output = render("syscall ; a long comment", Some(10));
        assert_eq!(strip_escapes(&output), "syscall ; \n");
    }

    #[test]
    fn test_wide_characters_clip_by_width() {
        let output = render("# 日本語", Some(5));
        assert_eq!(strip_escapes(&output), "# 日\n");
    }
}
