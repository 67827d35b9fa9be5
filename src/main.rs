//! Favlink CLI
//!
//! Usage:
//!   favlink [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>   Settings file (TOML format)
//!   -e, --editor          Also emit the block editor stylesheet
//!       --no-front-end    Do not emit the live-page stylesheet
//!       --css <CONTEXT>   Print the stylesheet for a context and exit
//!   -v, --verbose         Log pipeline decisions to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use favlink::{build_css, render_page, PageConfig, Settings, StyleContext};

#[derive(Parser)]
#[command(name = "favlink")]
#[command(about = "Expand favlink shortcodes into favicon links")]
#[command(version)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also emit the block editor stylesheet
    #[arg(short, long)]
    editor: bool,

    /// Do not emit the live-page stylesheet
    #[arg(long)]
    no_front_end: bool,

    /// Print the stylesheet for a context and exit
    #[arg(long, value_enum)]
    css: Option<CssContext>,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CssContext {
    FrontEnd,
    Editor,
}

impl From<CssContext> for StyleContext {
    fn from(context: CssContext) -> Self {
        match context {
            CssContext::FrontEnd => StyleContext::FrontEnd,
            CssContext::Editor => StyleContext::Editor,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(context) = cli.css {
        println!("{}", build_css(context.into()));
        return ExitCode::SUCCESS;
    }

    // Load settings
    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let mut config = PageConfig::from(&settings);
    if cli.editor {
        config = config.with_editor_styles(true);
    }
    if cli.no_front_end {
        config = config.with_front_end_styles(false);
    }

    match render_page(&source, &config) {
        Ok(page) => {
            for error in &page.diagnostics {
                eprint!("{}", error.format(&source, &filename));
            }
            print!("{}", page.content);
            if !page.styles.is_empty() {
                if !page.content.ends_with('\n') {
                    println!();
                }
                println!("{}", page.styles.to_html());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
