use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use genloom::{Job, MultiSink, PngPick, PngSink, RenderThreading};

#[derive(Parser, Debug)]
#[command(name = "genloom", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a job JSON document to a PNG or GIF.
    Render(RenderArgs),
    /// Render one of the built-in presets.
    Preset(PresetArgs),
    /// Print the default job document of a preset.
    Defaults {
        /// Preset name.
        name: String,
    },
    /// List preset names.
    List,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PresetArgs {
    /// Preset name (see `genloom list`).
    name: String,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path; `.png` writes the last frame, `.gif` the animation.
    #[arg(long)]
    out: PathBuf,

    /// Also write the last frame as a PNG.
    #[arg(long)]
    final_png: Option<PathBuf>,

    /// Rasterize frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => {
            let job = Job::from_path(&args.in_path)
                .with_context(|| format!("load job '{}'", args.in_path.display()))?;
            cmd_render(&job, &args.output)
        }
        Command::Preset(args) => {
            let job = Job::preset(&args.name)?;
            cmd_render(&job, &args.output)
        }
        Command::Defaults { name } => {
            let job = Job::preset(&name)?;
            println!("{}", job.to_json_pretty()?);
            Ok(())
        }
        Command::List => {
            for name in genloom::job::PRESET_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn cmd_render(job: &Job, out: &OutputArgs) -> anyhow::Result<()> {
    let threading = RenderThreading {
        parallel: out.parallel,
        chunk_size: out.chunk_size,
        threads: out.threads,
    };

    let mut sink = MultiSink::new().with(genloom::session::sink_for_path(&out.out)?);
    if let Some(png) = &out.final_png {
        sink = sink.with(Box::new(PngSink::with_pick(png, PngPick::Last)));
    }

    let stats = genloom::render_job(job, &mut sink, &threading)
        .with_context(|| format!("render {} job to '{}'", job.kind(), out.out.display()))?;

    tracing::info!(frames = stats.frames, kind = job.kind(), "rendered");
    report(&out.out);
    if let Some(png) = &out.final_png {
        report(png);
    }
    Ok(())
}

fn report(path: &Path) {
    eprintln!("wrote {}", path.display());
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
