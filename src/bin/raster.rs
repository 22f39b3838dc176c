use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use voxel_dome::utils::{logger, validation::Validate};
use voxel_dome::{rasterize_circle, rasterize_dome, ConfigProvider, Shape, ShapeLimits, TomlConfig};

#[derive(Parser)]
#[command(name = "raster")]
#[command(about = "Rasterize a circle or dome to JSON without starting the server")]
struct Cli {
    #[command(subcommand)]
    shape: ShapeCommand,

    /// TOML configuration whose [circle]/[dome] limits apply
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Pretty-print the JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum ShapeCommand {
    /// 2D disk or ring
    Circle(ShapeArgs),
    /// Hemisphere, solid or hollow
    Dome(ShapeArgs),
}

#[derive(Args)]
struct ShapeArgs {
    #[arg(short, long)]
    radius: Option<i64>,

    #[arg(short, long)]
    thickness: Option<i64>,

    #[arg(short, long)]
    filled: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let limits = |shape: Shape| -> anyhow::Result<ShapeLimits> {
        match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)
                    .with_context(|| format!("failed to load config file '{}'", path))?;
                config.validate()?;
                Ok(config.limits(shape))
            }
            None => Ok(ShapeLimits::builtin(shape)),
        }
    };

    let json = match &cli.shape {
        ShapeCommand::Circle(args) => {
            let req = limits(Shape::Circle)?.clamp(args.radius, args.thickness, args.filled);
            let result = rasterize_circle(req.radius, req.filled, req.thickness);
            tracing::info!("⭕ Circle r={} size={} blocks={}", result.radius, result.size, result.count);
            encode(&result, cli.pretty)?
        }
        ShapeCommand::Dome(args) => {
            let req = limits(Shape::Dome)?.clamp(args.radius, args.thickness, args.filled);
            let result = rasterize_dome(req.radius, req.filled, req.thickness);
            tracing::info!(
                "🏛️ Dome r={} layers={} blocks={}",
                result.radius,
                result.layers.len(),
                result.total_blocks
            );
            encode(&result, cli.pretty)?
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("failed to write '{}'", path))?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
