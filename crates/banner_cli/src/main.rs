use anyhow::{bail, Context, Result};
use banner_render::{generate, BannerOptions, FontCatalog, ShadowStyle};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render text as a large ASCII/Unicode-art banner")]
struct Cli {
    /// Text to render; multiple tokens are joined with spaces and a literal
    /// `\n` starts a new banner block
    #[arg(required = true)]
    text: Vec<String>,
    /// Shadow style: outline (box-drawing) or solid (shading)
    #[arg(long, default_value = "")]
    shadow: String,
    /// Font name: sans_mono, sans_bold, or serif
    #[arg(long, default_value = "sans_mono")]
    font: String,
    /// Text color: preset (c, m, y), hex (#RRGGBB/RRGGBB), or decimal r,g,b
    #[arg(long)]
    color: Option<String>,
    /// Sweep the hue across each line, left to right
    #[arg(long, default_value_t = false)]
    gradient: bool,
    /// Override the glyph string for filled pixels
    #[arg(long)]
    on: Option<String>,
    /// Override the glyph string for empty pixels
    #[arg(long)]
    off: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = cli.text.join(" ").replace("\\n", "\n");
    if text.is_empty() {
        bail!("no text to render");
    }

    let shadow: ShadowStyle = cli.shadow.parse()?;

    let face = FontCatalog::builtin()
        .face(&cli.font)
        .with_context(|| format!("failed to load font {:?}", cli.font))?;

    let options = BannerOptions {
        shadow,
        color: cli.color,
        gradient: cli.gradient,
        on_glyph: cli.on,
        off_glyph: cli.off,
    };

    println!("{}", generate(&face, &text, &options));
    Ok(())
}
