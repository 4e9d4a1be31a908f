mod canvas;
mod chart;
mod diagrams;
mod fonts;
mod raster;
mod shape;
mod style;

use clap::Parser;
use std::path::PathBuf;

use diagrams::OutputFormat;

/// Generates the logistics system documentation diagrams
#[derive(Parser, Debug)]
#[command(name = "logisketch")]
#[command(about = "Render the logistics system documentation diagrams to PNG or SVG", long_about = None)]
struct Args {
    /// Output directory for the generated images
    #[arg(value_name = "OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Output format: png or svg
    #[arg(short, long, default_value = "png")]
    format: String,

    /// Raster scale multiplier for PNG output (e.g. 2.0 for sharper output)
    #[arg(long, default_value_t = 1.0)]
    png_scale: f32,

    /// Path to a TOML style file overriding colors and font scale
    #[arg(short, long, value_name = "STYLE")]
    style: Option<PathBuf>,

    /// Generate only the named diagrams (repeatable)
    #[arg(long, value_name = "NAME")]
    only: Vec<String>,

    /// List available diagram names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    if args.list {
        for entry in diagrams::REGISTRY {
            println!("{:<24} {}", entry.stem, entry.title);
        }
        return Ok(());
    }

    let format = match args.format.as_str() {
        "png" => OutputFormat::Png,
        "svg" => OutputFormat::Svg,
        other => return Err(format!("Unsupported format: {} (use png or svg)", other)),
    };

    let style = if let Some(ref style_path) = args.style {
        let content = std::fs::read_to_string(style_path)
            .map_err(|e| format!("Failed to read style file {}: {}", style_path.display(), e))?;
        style::Style::from_toml(&content)?
    } else {
        style::Style::default()
    };

    let selected: Vec<&diagrams::DiagramEntry> = if args.only.is_empty() {
        diagrams::REGISTRY.iter().collect()
    } else {
        args.only
            .iter()
            .map(|name| {
                diagrams::find(name).ok_or_else(|| format!("Unknown diagram: {}", name))
            })
            .collect::<Result<_, _>>()?
    };

    std::fs::create_dir_all(&args.out_dir)
        .map_err(|e| format!("Failed to create {}: {}", args.out_dir.display(), e))?;

    println!("Generating logistics system documentation...");

    let mut measure = fonts::CosmicTextMeasure::new()?;
    let mut written = Vec::with_capacity(selected.len());
    for entry in &selected {
        let path = diagrams::write_diagram(
            entry,
            &style,
            &mut measure,
            &args.out_dir,
            format,
            args.png_scale,
        )?;
        println!("{} created", entry.title);
        written.push(path);
    }

    println!("\nAll {} diagrams generated successfully.", written.len());
    println!("Output files:");
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
