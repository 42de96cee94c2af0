use clap::{Parser, Subcommand, ValueEnum};
use mf_core::units::{constants, m, m2ps, m3ps};
use mf_friction::{
    FlowSample, FrictionError, SecantConfig, SolveOutcome, evaluate_at_point,
    friction_factor_outcome, laminar_friction_factor,
};
use mf_moody::{MoodyChart, MoodyConfig, MoodyError};
use mf_pipe::{PipeError, PipeFlow};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "MoodyFlow CLI - Darcy friction factor and pipe head loss", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Friction factor from the laminar law or the Colebrook equation
    Friction {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Relative roughness (epsilon / D)
        #[arg(long, default_value_t = 0.0)]
        rr: f64,
        /// Use 64/Re instead of solving the Colebrook equation
        #[arg(long)]
        laminar: bool,
    },
    /// Friction factor at a point, with the regime chosen from Re
    Point {
        /// Reynolds number
        #[arg(long)]
        re: f64,
        /// Relative roughness (epsilon / D)
        #[arg(long, default_value_t = 0.0)]
        rr: f64,
        /// Seed for transitional sampling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Darcy-Weisbach head loss in a circular pipe (SI units)
    HeadLoss {
        /// Inner diameter in m
        #[arg(long)]
        diameter: f64,
        /// Absolute roughness in m
        #[arg(long)]
        roughness: f64,
        /// Volumetric flow rate in m^3/s
        #[arg(long)]
        flow: f64,
        /// Kinematic viscosity in m^2/s (defaults to water at 60 F)
        #[arg(long)]
        viscosity: Option<f64>,
        /// Pipe length in m, to report total head loss
        #[arg(long)]
        length: Option<f64>,
        /// Seed for transitional sampling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Export Moody diagram data
    Moody {
        /// YAML config with sweeps and roughness values
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Operating point to overlay, as RE,F (repeatable)
        #[arg(long, value_parser = parse_mark)]
        mark: Vec<(f64, f64)>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Friction(#[from] FrictionError),

    #[error("{0}")]
    Pipe(#[from] PipeError),

    #[error("{0}")]
    Moody(#[from] MoodyError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Friction { re, rr, laminar } => cmd_friction(re, rr, laminar),
        Commands::Point { re, rr, seed } => cmd_point(re, rr, seed),
        Commands::HeadLoss {
            diameter,
            roughness,
            flow,
            viscosity,
            length,
            seed,
        } => cmd_head_loss(diameter, roughness, flow, viscosity, length, seed),
        Commands::Moody {
            config,
            format,
            output,
            mark,
        } => cmd_moody(config.as_deref(), format, output.as_deref(), &mark),
    }
}

fn parse_mark(text: &str) -> Result<(f64, f64), String> {
    let (re, f) = text
        .split_once(',')
        .ok_or_else(|| format!("expected RE,F but got '{}'", text))?;
    let re = re
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad Reynolds number '{}': {}", re, e))?;
    let f = f
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad friction factor '{}': {}", f, e))?;
    Ok((re, f))
}

/// Seeded generator when reproducibility is requested, else thread-local.
fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn cmd_friction(re: f64, rr: f64, laminar: bool) -> CliResult<()> {
    let sample = FlowSample::new(re, rr)?;

    if laminar {
        let f = laminar_friction_factor(sample.reynolds);
        println!("Friction factor (f): {:.6}", f);
        println!("Method: laminar (64/Re)");
        return Ok(());
    }

    let outcome = friction_factor_outcome(
        sample.reynolds,
        sample.relative_roughness,
        &SecantConfig::default(),
    );
    println!("Friction factor (f): {:.6}", outcome.value());
    match &outcome {
        SolveOutcome::Converged { iterations, .. } => {
            println!("Method: Colebrook (converged in {} iterations)", iterations)
        }
        SolveOutcome::FellBack { reason, .. } => {
            println!("Method: Swamee-Jain fallback ({})", reason)
        }
    }
    Ok(())
}

fn cmd_point(re: f64, rr: f64, seed: Option<u64>) -> CliResult<()> {
    let sample = FlowSample::new(re, rr)?;
    let mut rng = make_rng(seed);
    let f = evaluate_at_point(sample.reynolds, sample.relative_roughness, &mut *rng);

    println!("Reynolds number (Re): {:.2}", sample.reynolds);
    println!("Flow regime: {}", sample.regime());
    println!("Friction factor (f): {:.6}", f);
    Ok(())
}

fn cmd_head_loss(
    diameter: f64,
    roughness: f64,
    flow: f64,
    viscosity: Option<f64>,
    length: Option<f64>,
    seed: Option<u64>,
) -> CliResult<()> {
    let nu = viscosity.unwrap_or(constants::WATER_60F_NU_M2PS);
    let pipe = PipeFlow::new(m(diameter), m(roughness), m3ps(flow)).with_viscosity(m2ps(nu));

    let mut rng = make_rng(seed);
    let result = pipe.analyze(&mut *rng)?;

    println!("Head loss per length (hf/L): {:.6} m/m", result.head_loss_per_length.value);
    if let Some(length) = length {
        println!("Head loss over {} m: {:.4} m", length, result.head_loss(m(length)).value);
    }
    println!("Velocity: {:.4} m/s", result.velocity.value);
    println!("Reynolds number (Re): {:.2}", result.reynolds);
    println!("Relative roughness: {:.3e}", result.relative_roughness);
    println!("Friction factor (f): {:.4}", result.friction_factor);
    println!("Flow regime: {}", result.regime);
    Ok(())
}

fn cmd_moody(
    config_path: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
    marks: &[(f64, f64)],
) -> CliResult<()> {
    let config = match config_path {
        Some(path) => MoodyConfig::load(path)?,
        None => MoodyConfig::default(),
    };

    let mut chart = MoodyChart::generate(&config)?;
    for &(re, f) in marks {
        chart.mark_point(re, f);
    }

    if let Some(path) = output {
        let file = BufWriter::new(File::create(path)?);
        write_chart(&chart, format, file)?;
        info!(rows = chart.row_count(), path = %path.display(), "Exported Moody diagram");
        println!("✓ Exported {} data points to {}", chart.row_count(), path.display());
    } else {
        let stdout = io::stdout();
        write_chart(&chart, format, stdout.lock())?;
    }
    Ok(())
}

fn write_chart<W: Write>(chart: &MoodyChart, format: OutputFormat, mut out: W) -> CliResult<()> {
    match format {
        OutputFormat::Csv => chart.write_csv(&mut out)?,
        OutputFormat::Json => chart.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
