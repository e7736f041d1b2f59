use anyhow::Result;
use rloader::{init_logging, AsyncLoadCoordinator, LoadState, LoaderConfig, LoggingConfig, Snapshot};
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

/// Width of the text progress bar in characters
const BAR_WIDTH: usize = 50;

/// Configuration for a headless load run
struct SimConfig {
    loader: LoaderConfig,
    fps: u32,
    cycles: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            loader: LoaderConfig::default(),
            fps: 60,
            cycles: 1,
        }
    }
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => anyhow::bail!("{} requires a value", flag),
    }
}

fn parse_args() -> Result<SimConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();

    // -config is applied first so the individual flags override it
    if let Some(pos) = args.iter().position(|a| a == "-config") {
        let path = args
            .get(pos + 1)
            .ok_or_else(|| anyhow::anyhow!("-config requires a file path argument"))?;
        config.loader = LoaderConfig::from_file(path)?;
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-duration_ms" => {
                config.loader.duration_ms = next_value(&args, &mut i, "-duration_ms")?.parse()?;
            }
            "-interval_ms" => {
                config.loader.update_interval_ms = next_value(&args, &mut i, "-interval_ms")?.parse()?;
            }
            "-fps" => {
                config.fps = next_value(&args, &mut i, "-fps")?.parse()?;
                if config.fps == 0 {
                    anyhow::bail!("-fps must be greater than zero");
                }
            }
            "-cycles" => {
                config.cycles = next_value(&args, &mut i, "-cycles")?.parse()?;
            }
            "-config" => {
                i += 1;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Background load simulator");
    println!("Usage: rloader-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -duration_ms <N>       Length of each simulated load (default: 5000)");
    println!("  -interval_ms <N>       Sleep between progress updates (default: 10)");
    println!("  -fps <N>               Frames per second of the polling loop (default: 60)");
    println!("  -cycles <N>            Number of load/reset cycles to run (default: 1)");
    println!("  -config <FILE>         JSON loader config; flags above override it");
    println!("  -h, -help, --help      Show this help message");
}

/// Renders one line of the console progress display.
fn render_line(snapshot: Snapshot, blink_period: u32) -> String {
    let filled = usize::from(snapshot.progress.min(100)) * BAR_WIDTH / 100;
    let bar = format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled));
    let label = match snapshot.state {
        LoadState::Waiting => "WAITING",
        LoadState::Loading if snapshot.blink_visible(blink_period) => "LOADING DATA...",
        LoadState::Loading => "",
        LoadState::Finished => "DATA LOADED!",
    };
    format!("{} {:>3}% {:<15}", bar, snapshot.progress, label)
}

/// Runs one load cycle to completion and resets the coordinator.
fn run_cycle(loader: &mut AsyncLoadCoordinator, frame: Duration) -> Result<u32> {
    loader.handle_confirm()?;

    let blink_period = loader.config().blink_period();
    let mut frames = 0u32;
    let mut stdout = std::io::stdout();

    while loader.state() == LoadState::Loading {
        loader.poll_tick();
        frames += 1;
        write!(stdout, "\r{}", render_line(loader.snapshot(), blink_period))?;
        stdout.flush()?;
        thread::sleep(frame);
    }
    writeln!(stdout)?;

    loader.handle_confirm()?;

    Ok(frames)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let config = parse_args()?;

    let frame = Duration::from_secs_f64(1.0 / f64::from(config.fps));
    let mut loader = AsyncLoadCoordinator::with_config(config.loader);

    for cycle in 1..=config.cycles {
        let start = Instant::now();
        let frames = run_cycle(&mut loader, frame)?;
        log::info!(
            "cycle {}/{} finished in {:.2}s over {} frames",
            cycle,
            config.cycles,
            start.elapsed().as_secs_f64(),
            frames
        );
    }

    Ok(())
}
