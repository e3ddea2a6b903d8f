use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use whitted::{output, render, Preset, RenderConfig, Shading};

#[derive(Parser, Debug)]
#[command(name = "whitted", about = "Render a sphere scene with recursive ray tracing")]
struct Args {
    /// JSON file with render settings; missing keys keep the preset's values
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "whitted")]
    scene: Preset,

    /// Output image; `.ppm` is written as binary P6
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Samples per pixel
    #[arg(long)]
    spp: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_parser = parse_shading)]
    shading: Option<Shading>,

    /// Split rows across all cores
    #[arg(long)]
    parallel: bool,

    /// No progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn parse_shading(s: &str) -> Result<Shading, String> {
    match s {
        "flat" => Ok(Shading::Flat),
        "diffuse" => Ok(Shading::Diffuse),
        "whitted" => Ok(Shading::Whitted),
        other => Err(format!("unknown shading `{other}` (flat, diffuse, whitted)")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    // ── settings: preset, then file, then flags ───────────────────────────
    let mut config = RenderConfig::default();
    args.scene.configure(&mut config);
    if let Some(path) = &args.config {
        config = RenderConfig::load_over(path, &config)
            .with_context(|| format!("loading render settings from {}", path.display()))?;
    }
    if let Some(w) = args.width { config.width = w; }
    if let Some(h) = args.height { config.height = h; }
    if let Some(s) = args.spp { config.samples_per_pixel = s; }
    if let Some(s) = args.seed { config.seed = s; }
    if let Some(s) = args.shading { config.shading = s; }
    config.parallel |= args.parallel;

    let scene = args.scene.build().context("building scene")?;
    log::debug!("scene {:?}: {:#?}", args.scene, scene);

    let bar = if args.quiet {
        None
    } else {
        let pb = ProgressBar::new(config.height as u64);
        pb.set_style(ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?);
        Some(pb)
    };

    let frame = render(&scene, &config, bar.as_ref()).context("invalid render settings")?;

    if let Some(b) = bar {
        b.finish_with_message("Rendering complete");
    }

    output::save(&args.output, &frame)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
