use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "brandgen", version)]
#[command(about = "Generate the site branding rasters (header.png + logo.png)")]
struct Cli {
    /// Output directory for the generated images.
    #[arg(long, default_value = "out")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let theme = brandgen::Theme::default();
    let written = brandgen::generate(&cli.out, &theme)
        .with_context(|| format!("generate branding assets under '{}'", cli.out.display()))?;

    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
