use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use shared::{init_logging, BatchReport, Config, Variant, DEFAULT_BATCH_SIZE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "article-writer")]
#[command(about = "Generate bilingual affiliate articles from the content planning table")]
struct Args {
    /// Number of pending articles to process
    batch_size: Option<usize>,

    /// Section set to generate (basic, enhanced)
    #[arg(long)]
    variant: Option<Variant>,

    /// Root of the localized content tree
    #[arg(long)]
    content_root: Option<PathBuf>,

    /// Planning table (defaults to design.md in the content root)
    #[arg(long)]
    planning_file: Option<PathBuf>,

    /// Static asset root for article image directories
    #[arg(long)]
    public_root: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(root) = &self.content_root {
            config.content_root = root.clone();
        }
        if let Some(file) = &self.planning_file {
            config.planning_file = Some(file.clone());
        }
        if let Some(root) = &self.public_root {
            config.public_root = root.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::from_env()?;
    args.apply(&mut config);

    let batch_size = args.batch_size.unwrap_or(DEFAULT_BATCH_SIZE);
    println!(
        "📋 Processing up to {} articles ({} variant)",
        batch_size, config.variant
    );
    println!("  Planning table: {}", config.planning_file().display());

    let today = Utc::now().date_naive();
    let report = shared::run(&config, batch_size, today)?;

    print_report(&report);
    Ok(())
}

fn print_report(report: &BatchReport) {
    if report.selected.is_empty() {
        println!("\n✓ No pending articles. Everything in the table is complete.");
        return;
    }

    println!("\n📝 Selected {} articles:", report.selected.len());
    for slug in &report.selected {
        if report.generated.contains(slug) {
            println!("  ✅ {} generated", slug);
        } else if report.skipped.contains(slug) {
            println!("  ⏭️  {} already exists, marked complete", slug);
        }
    }

    if !report.failed.is_empty() {
        println!("\n⚠ Failed to process {} articles:", report.failed.len());
        for failure in &report.failed {
            println!("  ✗ {}", failure.slug);
            println!("    {}", failure.error);
        }
    }

    println!(
        "\n✓ Done: {} generated, {} skipped, {} failed",
        report.generated.len(),
        report.skipped.len(),
        report.failed.len()
    );
}
