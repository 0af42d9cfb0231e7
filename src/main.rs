//! asmlight - print MIPS assembly with syntax highlighting

mod render;

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use log::debug;

use asmlight::highlight::{Rgb, Vocabulary};
use asmlight::{Config, Error, Highlighter, LineClassifier, Result};
use render::Renderer;

/// Command line options
#[derive(Debug, Default)]
struct Options {
    theme: Option<String>,
    background: Option<Rgb>,
    config: Option<PathBuf>,
    grammar: Option<String>,
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        return Ok(());
    };

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(theme) = &options.theme {
        config.palette = Some(theme.clone());
    }
    if let Some(background) = options.background {
        config.palette = None;
        config.background = Some(background);
    }
    if let Some(grammar) = &options.grammar {
        config.grammar = grammar.clone();
    }

    // Terminals give no reliable way to query their background; assume dark.
    let theme = config.theme(true)?;
    let classifier = LineClassifier::new(Vocabulary::mips(), config.grammar()?)?;
    let highlighter = Highlighter::new(&classifier, &theme);

    let stdout = io::stdout();
    let max_cols = if stdout.is_terminal() {
        crossterm::terminal::size().ok().map(|(cols, _)| cols as usize)
    } else {
        None
    };
    let mut renderer = Renderer::new(stdout.lock(), max_cols);

    if options.files.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        render_text(&highlighter, &mut renderer, &text)?;
    } else {
        for path in &options.files {
            debug!("highlighting {}", path.display());
            let text = fs::read_to_string(path)?;
            render_text(&highlighter, &mut renderer, &text)?;
        }
    }

    renderer.flush()
}

fn render_text<W: io::Write>(highlighter: &Highlighter, renderer: &mut Renderer<W>, text: &str) -> Result<()> {
    for request in highlighter.style_text(text) {
        renderer.render_line(&request)?;
    }
    Ok(())
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--theme" | "-t" => options.theme = Some(option_value(arg, iter.next())?.to_string()),
            "--background" | "-b" => options.background = Some(Rgb::parse(option_value(arg, iter.next())?)?),
            "--config" | "-c" => options.config = Some(PathBuf::from(option_value(arg, iter.next())?)),
            "--grammar" | "-g" => options.grammar = Some(option_value(arg, iter.next())?.to_string()),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(Error::InvalidValue {
                    key: arg.clone(),
                    message: "unknown option".to_string(),
                });
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    Ok(Some(options))
}

fn option_value<'a>(option: &str, value: Option<&'a String>) -> Result<&'a str> {
    value.map(|v| v.as_str()).ok_or_else(|| Error::InvalidValue {
        key: option.to_string(),
        message: "missing value".to_string(),
    })
}

fn print_usage() {
    println!("asmlight {} - MIPS assembly syntax highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: asmlight [OPTIONS] [FILE]...");
    println!();
    println!("Reads standard input when no file is given.");
    println!();
    println!("Options:");
    println!("  -t, --theme NAME        Palette: monokai, solarized, dark or light");
    println!("  -b, --background COLOR  Pick the palette for this background (#RRGGBB)");
    println!("  -c, --config PATH       Configuration file (default ~/.asmlight.toml)");
    println!("  -g, --grammar NAME      Comment and separator syntax: mips or gas");
    println!("  -h, --help              Show this help message");
    println!("  -V, --version           Show version information");
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}

fn print_version() {
    println!("asmlight {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["-t", "light", "-g", "gas", "a.s", "b.s"]))
            .unwrap()
            .unwrap();
        assert_eq!(options.theme.as_deref(), Some("light"));
        assert_eq!(options.grammar.as_deref(), Some("gas"));
        assert_eq!(options.files, vec![PathBuf::from("a.s"), PathBuf::from("b.s")]);
    }

    #[test]
    fn test_parse_background() {
        let options = parse_args(&args(&["--background", "#FDF6E3"])).unwrap().unwrap();
        assert_eq!(options.background, Some(Rgb::new(0xFD, 0xF6, 0xE3)));
        assert!(parse_args(&args(&["-b", "white"])).is_err());
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(parse_args(&args(&["--theme"])), Err(Error::InvalidValue { .. })));
        assert!(matches!(parse_args(&args(&["--bogus"])), Err(Error::InvalidValue { .. })));
    }
}
