use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use shared::{generate_sample, init_logging, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-sample")]
#[command(about = "Write the sample case-study article to preview the enhanced templates")]
struct Args {
    /// Root of the localized content tree
    #[arg(long)]
    content_root: Option<PathBuf>,

    /// Static asset root for article image directories
    #[arg(long)]
    public_root: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::from_env()?;
    if let Some(root) = args.content_root {
        config.content_root = root;
    }
    if let Some(root) = args.public_root {
        config.public_root = root;
    }

    println!("📝 Generating sample article...");
    let output = generate_sample(
        &config.content_root,
        &config.public_root,
        Utc::now().date_naive(),
    )?;

    for path in &output.written {
        println!("  ✅ {}", path.display());
    }

    if output.missing_images.is_empty() {
        println!("\n✓ All images are already in {}", output.image_dir.display());
    } else {
        println!(
            "\n📸 {} images still to capture into {}:",
            output.missing_images.len(),
            output.image_dir.display()
        );
        for image in &output.missing_images {
            println!("  • {} ({})", image.filename, image.description);
            println!("    {} [{}]", image.url, image.element);
        }
    }

    Ok(())
}
