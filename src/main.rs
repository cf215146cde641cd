use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use copydoc::{parse_files, query, Document, ParseOptions};

#[derive(Parser)]
#[command(name = "copydoc", about = "Structure marketing-copy drafts into typed documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Args)]
struct OptionArgs {
    /// JSON file with parse options
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Fail files whose header has no `Content` line
    #[arg(long, global = true)]
    strict: bool,

    /// Lines searched after `Featured image:` for SEO Title / ALT Tag
    #[arg(long, global = true)]
    window: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each parsed document as JSON
    Json {
        files: Vec<PathBuf>,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// One line per section: level, type, heading
    Outline { files: Vec<PathBuf> },
    /// FAQ entries and platform names found in each document
    Summary { files: Vec<PathBuf> },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let opts = resolve_options(&cli.options)?;

    let (files, mode) = match &cli.command {
        Commands::Json { files, compact } => (files, Mode::Json { compact: *compact }),
        Commands::Outline { files } => (files, Mode::Outline),
        Commands::Summary { files } => (files, Mode::Summary),
    };

    if files.is_empty() {
        bail!("no input files given");
    }

    let mut failed = 0usize;
    for (path, result) in parse_files(files, &opts) {
        match result {
            Ok(doc) => {
                let out = render(&doc, mode).with_context(|| format!("rendering {}", path.display()))?;
                println!("{}", out);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                failed += 1;
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    if failed > 0 {
        bail!("{} of {} files failed", failed, files.len());
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Mode {
    Json { compact: bool },
    Outline,
    Summary,
}

fn render(doc: &Document, mode: Mode) -> anyhow::Result<String> {
    Ok(match mode {
        Mode::Json { compact: true } => serde_json::to_string(doc)?,
        Mode::Json { compact: false } => serde_json::to_string_pretty(doc)?,
        Mode::Outline => outline(doc),
        Mode::Summary => summary(doc),
    })
}

fn resolve_options(args: &OptionArgs) -> anyhow::Result<ParseOptions> {
    let mut opts = match &args.options {
        Some(path) => ParseOptions::from_file(path)?,
        None => ParseOptions::default(),
    };
    if args.strict {
        opts.strict = true;
    }
    if let Some(window) = args.window {
        opts.featured_image_window = window;
    }
    Ok(opts)
}

fn outline(doc: &Document) -> String {
    doc.sections
        .iter()
        .map(|s| {
            format!(
                "{}h{} {:<16} {}",
                "  ".repeat(s.level.saturating_sub(1) as usize),
                s.level,
                s.kind,
                truncate(&s.heading, 60)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary(doc: &Document) -> String {
    let mut out = Vec::new();
    if !doc.metadata.target_keyword.is_empty() {
        out.push(format!("Keyword:   {}", doc.metadata.target_keyword));
    }
    out.push(format!("Sections:  {}", doc.sections.len()));
    out.push(format!("Platforms: {}", query::platform_names(doc).join(", ")));
    for faq in query::faqs(doc) {
        out.push(format!("  Q: {}", truncate(&faq.question, 72)));
    }
    out.join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
