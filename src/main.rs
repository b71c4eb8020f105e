use anyhow::{Context, Result};
use folio::config::{ChartArgs, PostsArgs, RenderArgs};
use folio::{BlogCatalog, Command, Config, LineChart, MarkdownRenderer, RELATED_POST_LIMIT};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Render(args) => render(args),
        Command::Posts(args) => posts(args),
        Command::Chart(args) => chart(args),
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn render(args: &RenderArgs) -> Result<()> {
    let source = if args.reads_stdin() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read markdown from stdin")?;
        buffer
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?
    };

    let renderer = MarkdownRenderer::with_theme(args.theme.theme()).escape_html(args.escape);
    let mut html = renderer.render(&source);
    if args.standalone {
        html = folio::components::layout::preview_document(&args.document_title(), &html)
            .into_string();
    }

    write_output(args.output.as_deref(), &html)?;

    if args.open
        && let Some(output) = &args.output
    {
        open::that(output)
            .with_context(|| format!("Failed to open {}", output.display()))?;
    }

    Ok(())
}

fn posts(args: &PostsArgs) -> Result<()> {
    let catalog = BlogCatalog::load(&args.catalog).context("Failed to load blog catalog")?;
    let matches = catalog.search(&args.search, &args.tag);

    if matches.is_empty() {
        tracing::warn!(
            search = %args.search,
            tag = %args.tag,
            "No published posts match"
        );
    }

    for post in &matches {
        println!(
            "{}\t{}\t{} min read\t{}",
            post.id(),
            post.title(),
            post.read_minutes(),
            post.tags().join(", ")
        );

        let related = catalog.related(post, RELATED_POST_LIMIT);
        tracing::debug!(
            id = post.id(),
            related = ?related.iter().map(|p| p.id()).collect::<Vec<_>>(),
            "Related posts"
        );
    }

    tracing::info!(
        "{} of {} posts listed",
        matches.len(),
        catalog.posts().len()
    );
    Ok(())
}

fn chart(args: &ChartArgs) -> Result<()> {
    let chart = LineChart::load(&args.series).context("Failed to load views series")?;
    write_output(args.output.as_deref(), &chart.svg().into_string())
}

/// Writes content to the output file, or stdout when none is given.
fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = output else {
        println!("{}", content);
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Generated: {}", path.display());
    Ok(())
}
