//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::markdown::Theme;

/// Input path meaning standard input.
pub const STDIN_PATH: &str = "-";

/// Command line configuration for Folio.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Folio subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a markdown post body to HTML
    Render(RenderArgs),

    /// List published posts from a blog catalog
    Posts(PostsArgs),

    /// Render a views series as an SVG line chart
    Chart(ChartArgs),
}

/// Arguments for `folio render`.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Markdown file, or "-" for standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Class theme for emitted tags
    #[arg(long, value_enum, default_value_t = ThemeChoice::Article)]
    pub theme: ThemeChoice,

    /// Escape raw HTML in the source before rendering
    #[arg(long)]
    pub escape: bool,

    /// Wrap output in a standalone preview document
    #[arg(long)]
    pub standalone: bool,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the output file in a browser
    #[arg(long)]
    pub open: bool,
}

/// Arguments for `folio posts`.
#[derive(Debug, Clone, Args)]
pub struct PostsArgs {
    /// Blog catalog JSON file
    pub catalog: PathBuf,

    /// Case-insensitive search over title, excerpt and tags
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact tag to filter by
    #[arg(short, long, default_value = "")]
    pub tag: String,
}

/// Arguments for `folio chart`.
#[derive(Debug, Clone, Args)]
pub struct ChartArgs {
    /// Views series JSON file
    pub series: PathBuf,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Theme presets selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    /// Blog post page classes
    Article,
    /// Editor preview classes
    Preview,
    /// No classes
    Plain,
}

impl ThemeChoice {
    /// Resolves the preset to its theme.
    pub fn theme(self) -> Theme {
        match self {
            ThemeChoice::Article => Theme::article(),
            ThemeChoice::Preview => Theme::preview(),
            ThemeChoice::Plain => Theme::plain(),
        }
    }
}

impl RenderArgs {
    /// Whether input comes from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Title for the standalone document, taken from the input file stem.
    pub fn document_title(&self) -> String {
        if self.reads_stdin() {
            return "Preview".to_string();
        }
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Preview")
            .to_string()
    }
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input file does not exist or `--open` is given
    /// without an output file.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Render(args) => {
                if !args.reads_stdin() {
                    require_file(&args.input, "Markdown input")?;
                }
                if args.open && args.output.is_none() {
                    bail!("--open requires --output");
                }
            }
            Command::Posts(args) => require_file(&args.catalog, "Blog catalog")?,
            Command::Chart(args) => require_file(&args.series, "Views series")?,
        }

        Ok(())
    }
}

fn require_file(path: &Path, what: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{} does not exist: {}", what, path.display());
    }
    Ok(())
}
