//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;

use proseframe_ast::{Block, Document};
use proseframe_core::diagnostics::Diagnostic;
use proseframe_core::{emphasis, GenerationResponse, Structurer};
use proseframe_page::{PageRenderer, PdfWriter};
use proseframe_render::{HtmlRenderer, PlainRenderer, Renderer};
use proseframe_validate::ValidationEngine;

use crate::config::{load_settings, Settings};

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// Encoding written by the render command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// Styled HTML fragment
    Html,
    /// Markdown-flavoured plain text
    #[default]
    Plain,
    /// Paginated plain-text layout
    Text,
    /// Paginated PDF
    Pdf,
}

impl RenderFormat {
    /// Default output file name for a topic slug
    pub fn default_file_name(self, slug: &str) -> String {
        match self {
            RenderFormat::Html => format!("{slug}.html"),
            RenderFormat::Plain => format!("blog-{slug}.md"),
            RenderFormat::Text => format!("{slug}.txt"),
            RenderFormat::Pdf => format!("{slug}.pdf"),
        }
    }
}

#[derive(Parser)]
#[command(name = "proseframe")]
#[command(author, version, about = "Structure for generated prose", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./proseframe.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the classified block structure of a document
    Structure {
        /// Input file (JSON response payload or raw text)
        input: PathBuf,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,

        /// Topic used when a raw response needs fallback metadata
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Render documents to HTML, markdown, paged text or PDF
    Render {
        /// Input files or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output encoding
        #[arg(short, long, value_enum, default_value = "plain")]
        format: RenderFormat,

        /// Output file, directory for several inputs, or `-` for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Topic for fallback metadata and output file names
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Check a document for structural issues
    Check {
        /// Input file (JSON response payload or raw text)
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Run the CLI application
///
/// Parses arguments, sets up logging, loads settings and dispatches to the
/// command. Exits with status 1 when `check` reports errors.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Structure { input, json, topic } => {
            structure_command(&input, json, topic.as_deref(), &settings)?;
        }
        Commands::Render {
            inputs,
            format,
            output,
            topic,
        } => {
            render_command(&inputs, format, output.as_deref(), topic.as_deref(), &settings)?;
        }
        Commands::Check { input, format } => {
            let errors = check_command(&input, format, &settings)?;
            if errors > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the structure command
pub fn structure_command(
    input: &Path,
    json: bool,
    topic: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let doc = load_document(input, topic, settings)?;

    if json {
        let out = serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
        println!("{}", out);
    } else {
        print!("{}", structure_listing(&doc));
    }
    Ok(())
}

/// One line per block, list items indented beneath
pub fn structure_listing(doc: &Document) -> String {
    let mut out = String::new();
    for (index, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::List(items) => {
                out.push_str(&format!(
                    "{:>3}  {:<9} ({} items)\n",
                    index,
                    block.kind().to_string(),
                    items.len()
                ));
                for item in items {
                    out.push_str(&format!("     - {}\n", emphasis::strip(item)));
                }
            }
            Block::Title(text) | Block::Heading(text) | Block::Paragraph(text) => {
                out.push_str(&format!(
                    "{:>3}  {:<9} {}\n",
                    index,
                    block.kind().to_string(),
                    emphasis::strip(text)
                ));
            }
        }
    }
    if let Some(ref summary) = doc.summary {
        out.push_str(&format!("summary:  {}\n", summary));
    }
    if !doc.keywords.is_empty() {
        out.push_str(&format!("keywords: {}\n", doc.keywords.join(", ")));
    }
    out
}

/// Execute the render command
///
/// Returns the paths written; nothing is returned for stdout output.
pub fn render_command(
    inputs: &[String],
    format: RenderFormat,
    output: Option<&Path>,
    topic: Option<&str>,
    settings: &Settings,
) -> Result<Vec<PathBuf>> {
    let files = expand_inputs(inputs)?;
    let to_stdout = output == Some(Path::new("-"));
    if to_stdout && format == RenderFormat::Pdf {
        anyhow::bail!("PDF output needs a file; pass --output <file.pdf>");
    }

    let mut written = Vec::new();
    for file in &files {
        let topic = topic.map(str::to_string).unwrap_or_else(|| file_topic(file));
        let doc = load_document(file, Some(&topic), settings)?;
        let bytes = render_bytes(&doc, format, settings)?;

        if to_stdout {
            std::io::stdout()
                .write_all(&bytes)
                .context("Failed to write to stdout")?;
            continue;
        }

        let target = output_path(file, output, files.len(), format, &topic)?;
        fs::write(&target, &bytes)
            .with_context(|| format!("Failed to write output file: {}", target.display()))?;
        println!("Wrote {}", target.display());
        written.push(target);
    }

    Ok(written)
}

/// Execute the check command
///
/// Prints diagnostics and returns the number of errors found.
pub fn check_command(input: &Path, format: OutputFormat, settings: &Settings) -> Result<usize> {
    let doc = load_document(input, None, settings)?;

    let engine = ValidationEngine::with_defaults();
    let diagnostics: Vec<Diagnostic> = engine
        .validate(&doc)
        .into_iter()
        .map(|d| d.with_file(input.display().to_string()))
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&diagnostics)
                .context("Failed to serialize diagnostics to JSON")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                println!("No issues found in {}", input.display());
            } else {
                for diag in &diagnostics {
                    println!("{}", diag);
                    println!();
                }
                let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
                let warning_count = diagnostics.iter().filter(|d| d.is_warning()).count();
                println!(
                    "Found {} error(s) and {} warning(s)",
                    error_count, warning_count
                );
            }
        }
    }

    Ok(diagnostics.iter().filter(|d| d.is_error()).count())
}

/// Read an input file and run it through the pipeline
///
/// `.json` files must hold a response payload. Anything else is treated as
/// model output: a payload if it decodes as one, raw prose otherwise.
pub fn load_document(input: &Path, topic: Option<&str>, settings: &Settings) -> Result<Document> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let response = if is_json {
        GenerationResponse::from_json(&content)
            .with_context(|| format!("Failed to decode response payload: {}", input.display()))?
    } else {
        let topic = topic.map(str::to_string).unwrap_or_else(|| file_topic(input));
        GenerationResponse::from_model_output(&content, &topic)
    };

    let structurer = Structurer::new(settings.highlight.mode);
    Ok(structurer.structure_response(&response))
}

fn render_bytes(doc: &Document, format: RenderFormat, settings: &Settings) -> Result<Vec<u8>> {
    let bytes = match format {
        RenderFormat::Html => HtmlRenderer::new(settings.html.clone())
            .render(doc)
            .into_bytes(),
        RenderFormat::Plain => PlainRenderer.render(doc).into_bytes(),
        RenderFormat::Text => page_renderer(settings)?.render(doc).to_text().into_bytes(),
        RenderFormat::Pdf => {
            let paged = page_renderer(settings)?.render(doc);
            PdfWriter::new()
                .write(&paged)
                .context("Failed to generate PDF")?
        }
    };
    Ok(bytes)
}

fn page_renderer(settings: &Settings) -> Result<PageRenderer> {
    PageRenderer::new(settings.page.geometry(), settings.page.style())
        .context("Invalid [page] settings")
}

/// Expand glob patterns; plain paths pass through unchanged
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.contains(['*', '?', '[']) {
            files.push(PathBuf::from(input));
            continue;
        }

        let before = files.len();
        for entry in glob(input).with_context(|| format!("Invalid glob pattern: {}", input))? {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "skipping unreadable path"),
            }
        }
        if files.len() == before {
            anyhow::bail!("No files match pattern: {}", input);
        }
    }
    Ok(files)
}

fn output_path(
    input: &Path,
    output: Option<&Path>,
    input_count: usize,
    format: RenderFormat,
    topic: &str,
) -> Result<PathBuf> {
    let name = format.default_file_name(&slugify(topic));
    match output {
        Some(path) if input_count == 1 && !path.is_dir() => Ok(path.to_path_buf()),
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            Ok(dir.join(name))
        }
        None => Ok(input.with_file_name(name)),
    }
}

/// Topic derived from a file name: `renewable_energy.json` gives
/// "renewable energy"
fn file_topic(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

/// Lower-case the topic and join its words with hyphens
pub fn slugify(topic: &str) -> String {
    let slug = topic
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "document".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_structure() {
        let cli = Cli::try_parse_from(["proseframe", "structure", "post.txt", "--json"]).unwrap();
        match cli.command {
            Commands::Structure { input, json, topic } => {
                assert_eq!(input, PathBuf::from("post.txt"));
                assert!(json);
                assert!(topic.is_none());
            }
            _ => panic!("Expected Structure command"),
        }
    }

    #[test]
    fn test_cli_parse_render() {
        let args = [
            "proseframe",
            "render",
            "a.json",
            "b/*.txt",
            "--format",
            "pdf",
            "--output",
            "out",
            "--topic",
            "Solar Power",
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Render {
                inputs,
                format,
                output,
                topic,
            } => {
                assert_eq!(inputs, ["a.json", "b/*.txt"]);
                assert_eq!(format, RenderFormat::Pdf);
                assert_eq!(output, Some(PathBuf::from("out")));
                assert_eq!(topic.as_deref(), Some("Solar Power"));
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_parse_render_defaults() {
        let cli = Cli::try_parse_from(["proseframe", "render", "a.txt"]).unwrap();
        match cli.command {
            Commands::Render { format, output, .. } => {
                assert_eq!(format, RenderFormat::Plain);
                assert!(output.is_none());
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_requires_input() {
        assert!(Cli::try_parse_from(["proseframe", "render"]).is_err());
    }

    #[test]
    fn test_cli_parse_check_json() {
        let cli =
            Cli::try_parse_from(["proseframe", "check", "doc.json", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Check { input, format } => {
                assert_eq!(input, PathBuf::from("doc.json"));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "proseframe",
            "check",
            "doc.txt",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Renewable Energy"), "renewable-energy");
        assert_eq!(slugify("  What is  AI? "), "what-is-ai");
        assert_eq!(slugify("???"), "document");
    }

    #[test]
    fn test_default_file_names() {
        assert_eq!(RenderFormat::Plain.default_file_name("ai"), "blog-ai.md");
        assert_eq!(RenderFormat::Pdf.default_file_name("ai"), "ai.pdf");
        assert_eq!(RenderFormat::Html.default_file_name("ai"), "ai.html");
        assert_eq!(RenderFormat::Text.default_file_name("ai"), "ai.txt");
    }

    #[test]
    fn test_file_topic() {
        assert_eq!(file_topic(Path::new("dir/solar_power-basics.json")), "solar power basics");
    }

    #[test]
    fn test_structure_listing() {
        let doc = Document::from_blocks(vec![
            Block::Title(format!("Why {}?", emphasis::wrap("AI"))),
            Block::List(vec!["one".into(), "two".into()]),
        ])
        .with_keywords(["ai"]);
        let listing = structure_listing(&doc);
        assert_eq!(
            listing,
            "  0  title     Why AI?\n  1  list      (2 items)\n     - one\n     - two\nkeywords: ai\n"
        );
    }

    #[test]
    fn test_expand_inputs_plain_paths() {
        let files = expand_inputs(&["a.txt".to_string()]).unwrap();
        assert_eq!(files, [PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_expand_inputs_unmatched_pattern() {
        let err = expand_inputs(&["/nonexistent-dir/*.json".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files match pattern"));
    }
}
