use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use softstart_core::{
    ActiveCurveSelector, AnimationDriver, CurveKind, CurveTable, PresentationAdapter, RunState,
    ViewModel, CURVE_TABLE_RESOLUTION, RUN_DURATION_MS,
};
use tracing_subscriber::EnvFilter;

fn main() -> softstart_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { curve, fps } => run_ramp(curve, fps),
        Commands::Table { resolution, output } => export_table(resolution, output.as_deref()),
    }
}

/// Drives one full ramp in real time, printing a readout per frame.
fn run_ramp(curve: Option<CurveKind>, fps: u32) -> softstart_core::Result<()> {
    let selector = match curve {
        Some(kind) => ActiveCurveSelector::Single(kind),
        None => ActiveCurveSelector::All,
    };
    tracing::info!(?selector, fps, "starting ramp");

    let adapter = PresentationAdapter::with_defaults(selector);
    let mut driver = AnimationDriver::new();
    driver.start();

    let frame_budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let clock = Instant::now();

    loop {
        let now_ms = clock.elapsed().as_secs_f64() * 1000.0;
        if let Some(update) = driver.tick(now_ms) {
            let vm = adapter.view_model(update);
            print_readout(&vm);
            if vm.run_state == RunState::Complete {
                break;
            }
        } else {
            break;
        }
        thread::sleep(frame_budget);
    }

    driver.dispose();
    tracing::info!(
        duration_ms = RUN_DURATION_MS,
        "ramp complete, panels at full brightness"
    );
    Ok(())
}

fn print_readout(vm: &ViewModel) {
    let panels: Vec<String> = vm
        .readouts
        .iter()
        .map(|readout| format!("{} PWM {:>3}%", readout.kind.label(), readout.percentage))
        .collect();
    println!("t {:>5.1}% | {}", vm.progress * 100.0, panels.join(" | "));
}

/// Writes the chart's curve table as JSON to a file or stdout.
fn export_table(resolution: usize, output: Option<&std::path::Path>) -> softstart_core::Result<()> {
    tracing::info!(resolution, ?output, "generating curve table");

    let table = CurveTable::generate(resolution)?;
    let json = serde_json::to_string_pretty(table.samples())?;
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "LED soft-start curve simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate the 2 second brightness ramp in the terminal.
    Run {
        /// Show a single curve (`linear`, `sCurve`, `logarithmic`) instead of
        /// all three side by side.
        #[arg(short, long)]
        curve: Option<CurveKind>,
        /// Frames per second for the readout loop.
        #[arg(long, default_value_t = 60)]
        fps: u32,
    },
    /// Emit the chart's curve table as JSON.
    Table {
        /// Number of sample rows covering t = 0..=1.
        #[arg(long, default_value_t = CURVE_TABLE_RESOLUTION)]
        resolution: usize,
        /// Output path for the generated table; prints to stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
