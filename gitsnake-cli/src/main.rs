use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use gitsnake::{
    ContributionSource, EngineConfig, JsonFileSource, OfflineSource, SnakeAnimation, SnakeEngine,
    Theme, load_activity,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gitsnake", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the animated SVG.
    Svg(OutputArgs),
    /// Print the planned path and schedule as JSON.
    Plan(OutputArgs),
    /// Rasterize the first frame to a PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct SnakeArgs {
    /// Handle shown in the label.
    #[arg(long)]
    user: String,

    /// Contribution JSON (bare list or `{"contributions": [...]}`); omitted means synthesized.
    #[arg(long)]
    activity: Option<PathBuf>,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the visiting order and any synthesized history.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

#[derive(Parser, Debug)]
struct OutputArgs {
    #[command(flatten)]
    snake: SnakeArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    snake: SnakeArgs,

    /// Pixel scale factor.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(t: ThemeArg) -> Self {
        match t {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Svg(args) => cmd_svg(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn cmd_svg(args: OutputArgs) -> anyhow::Result<()> {
    let (anim, config) = build(&args.snake)?;
    let svg = gitsnake::render_svg(&anim, &config)?;
    emit(args.out.as_deref(), &svg)
}

fn cmd_plan(args: OutputArgs) -> anyhow::Result<()> {
    let (anim, _) = build(&args.snake)?;
    let json = anim.report().to_json_pretty()?;
    emit(args.out.as_deref(), &json)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (anim, config) = build(&args.snake)?;
    let svg = gitsnake::render_svg(&anim, &config)?;
    let (w, h) = gitsnake::render_preview_png(&svg, args.scale, &args.out)?;
    eprintln!("wrote {} ({w}x{h})", args.out.display());
    Ok(())
}

fn build(args: &SnakeArgs) -> anyhow::Result<(SnakeAnimation, EngineConfig)> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let source: Box<dyn ContributionSource> = match &args.activity {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(OfflineSource),
    };
    let today = chrono::Local::now().date_naive();
    let activity = load_activity(source.as_ref(), &args.user, &mut rng, today);
    if activity.synthetic {
        tracing::warn!(user = %args.user, "rendering a synthesized contribution history");
    }

    let anim = SnakeEngine::generate(&args.user, &activity.days, &config, &mut rng)?;
    Ok((anim, config))
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
