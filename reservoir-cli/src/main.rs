mod sample;

use clap::{Args, Parser, Subcommand};
use reservoir_core::{DiffusionSolver, FieldHistory, SolverConfig, parse_injection_rate};
use sample::{sample_injection_rate, scenario_seed};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one injection scenario and write every frame
    Run(RunArgs),
    /// Simulate many scenarios with sampled injection rates
    Sweep(SweepArgs),
}

#[derive(Args, Debug, Clone)]
struct GridArgs {
    /// Rows
    #[arg(long, default_value_t = 50)]
    nx: usize,

    /// Columns
    #[arg(long, default_value_t = 50)]
    ny: usize,

    /// Cell spacing (both axes)
    #[arg(long, default_value_t = 1.0)]
    dx: f64,

    /// Time step
    #[arg(long, default_value_t = 0.2)]
    dt: f64,

    /// Diffusivity
    #[arg(long, default_value_t = 0.1)]
    alpha: f64,

    /// Number of time steps
    #[arg(long, default_value_t = 200)]
    nsteps: usize,
}

impl GridArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_grid(self.nx, self.ny)
            .with_dx(self.dx)
            .with_dt(self.dt)
            .with_alpha(self.alpha)
            .with_nsteps(self.nsteps)
    }
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    grid: GridArgs,

    /// Injection rate at the reservoir center (>= 0)
    #[arg(long, default_value = "0.0", value_parser = parse_injection_rate)]
    injection_rate: f64,
}

#[derive(Args, Debug, Clone)]
struct SweepArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    grid: GridArgs,

    /// Scenario start index (for deterministic split-by-range)
    #[arg(long, default_value_t = 0)]
    scenario_start: usize,

    /// Number of scenarios to simulate
    #[arg(long, default_value_t = 16)]
    count: usize,

    /// Injection rate lower bound (inclusive)
    #[arg(long, default_value = "0.0", value_parser = parse_injection_rate)]
    rate_min: f64,

    /// Injection rate upper bound (exclusive)
    #[arg(long, default_value = "2.0", value_parser = parse_injection_rate)]
    rate_max: f64,

    /// Base RNG seed (reproducibility)
    #[arg(long, default_value_t = 123)]
    seed: u64,
}

#[derive(Serialize)]
struct RunMeta {
    nx: usize,
    ny: usize,
    dx: f64,
    dt: f64,
    alpha: f64,
    nsteps: usize,
    injection_rate: f64,

    stability_number: f64,
    frames: usize,
    center: [usize; 2],
}

#[derive(Serialize)]
struct FrameRow {
    step: usize,
    min: f64,
    max: f64,
    mean: f64,
    center: f64,
}

#[derive(Serialize)]
struct SweepRow {
    scenario_idx: usize,
    base_seed: u64,
    scenario_seed: u64,

    injection_rate: f64,

    nx: usize,
    ny: usize,
    nsteps: usize,

    center_final: f64,
    min_final: f64,
    max_final: f64,
    mean_final: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(&args),
        Command::Sweep(args) => sweep(&args),
    }
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.grid.config().with_injection_rate(args.injection_rate);
    let solver = DiffusionSolver::new(config)?;

    log::info!(
        "running {}x{} for {} steps, injection rate {}",
        config.nx,
        config.ny,
        config.nsteps,
        config.injection_rate
    );
    let history = solver.compute_history();

    fs::create_dir_all(&args.out)?;
    write_history(&args.out.join("history.bin"), &history)?;
    write_frame_rows(&args.out.join("frames.jsonl"), &config, &history)?;

    let (ci, cj) = config.center();
    let meta = RunMeta {
        nx: config.nx,
        ny: config.ny,
        dx: config.dx,
        dt: config.dt,
        alpha: config.alpha,
        nsteps: config.nsteps,
        injection_rate: config.injection_rate,

        stability_number: config.stability_number(),
        frames: history.len(),
        center: [ci, cj],
    };
    let mut meta_file = BufWriter::new(File::create(args.out.join("meta.json"))?);
    serde_json::to_writer_pretty(&mut meta_file, &meta)?;
    meta_file.write_all(b"\n")?;
    meta_file.flush()?;

    println!("Wrote history to: {}", args.out.display());
    if let Some(last) = history.stats(history.len() - 1) {
        println!(
            "Frames: {} (final min={:.2}, max={:.2}, center={:.2})",
            history.len(),
            last.min,
            last.max,
            history.frames()[history.len() - 1][(ci, cj)]
        );
    }

    Ok(())
}

fn sweep(args: &SweepArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.rate_max <= args.rate_min {
        return Err("rate_max must be > rate_min".into());
    }

    let base = args.grid.config();
    // Fail before creating any output.
    DiffusionSolver::new(base)?;

    fs::create_dir_all(&args.out)?;
    let mut final_writer = BufWriter::new(File::create(args.out.join("final.bin"))?);
    let mut meta_file = BufWriter::new(File::create(args.out.join("meta.jsonl"))?);

    let center = base.center();
    for local in 0..args.count {
        let scenario_idx = args.scenario_start + local;
        let seed = scenario_seed(args.seed, scenario_idx);
        let rate = sample_injection_rate(seed, args.rate_min, args.rate_max);

        let solver = DiffusionSolver::new(base.with_injection_rate(rate))?;
        let history = solver.compute_history();
        let last = history
            .last()
            .ok_or("history is never empty")?;

        write_f64_slice(&mut final_writer, last.as_slice())?;

        let row = SweepRow {
            scenario_idx,
            base_seed: args.seed,
            scenario_seed: seed,

            injection_rate: rate,

            nx: base.nx,
            ny: base.ny,
            nsteps: base.nsteps,

            center_final: last[center],
            min_final: last.min(),
            max_final: last.max(),
            mean_final: last.mean(),
        };
        serde_json::to_writer(&mut meta_file, &row)?;
        meta_file.write_all(b"\n")?;

        log::info!("scenario {scenario_idx}: rate {rate:.4}, center {:.2}", last[center]);
    }

    final_writer.flush()?;
    meta_file.flush()?;

    println!("Wrote sweep to: {}", args.out.display());
    println!("Scenarios: {}", args.count);

    Ok(())
}

fn write_history(path: &Path, history: &FieldHistory) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for frame in history {
        write_f64_slice(&mut w, frame.as_slice())?;
    }
    w.flush()
}

fn write_frame_rows(
    path: &Path,
    config: &SolverConfig,
    history: &FieldHistory,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut w = BufWriter::new(File::create(path)?);
    for (step, frame) in history.iter().enumerate() {
        let row = FrameRow {
            step,
            min: frame.min(),
            max: frame.max(),
            mean: frame.mean(),
            center: frame[config.center()],
        };
        serde_json::to_writer(&mut w, &row)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

fn write_f64_slice<W: Write>(w: &mut W, v: &[f64]) -> std::io::Result<()> {
    for &x in v {
        w.write_all(&x.to_le_bytes())?;
    }
    Ok(())
}
