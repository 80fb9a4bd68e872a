//! Nightsky CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use nightsky_runtime::{Scene, SimulationConfig, simulate};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI configuration parsed from arguments.
///
/// Flags given on the command line win over the `--config` file.
#[derive(Default)]
struct CliConfig {
    config_file: Option<PathBuf>,
    scene: Option<Scene>,
    duration_ms: Option<u64>,
    seed: Option<u64>,
    frame_ms: Option<u64>,
    json: bool,
    verbose: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn number(args: &[String], i: usize, flag: &str) -> Result<u64, String> {
    let text = value(args, i, flag)?;
    text.parse()
        .map_err(|_| format!("invalid {flag} value: {text}"))
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = config.verbose.saturating_add(1),
            "--json" => config.json = true,
            "--scene" => {
                i += 1;
                config.scene = Some(value(&args, i, "--scene")?.parse()?);
            }
            "--duration" => {
                i += 1;
                config.duration_ms = Some(number(&args, i, "--duration")?);
            }
            "--seed" => {
                i += 1;
                config.seed = Some(number(&args, i, "--seed")?);
            }
            "--frame" => {
                i += 1;
                config.frame_ms = Some(number(&args, i, "--frame")?);
            }
            "--config" => {
                i += 1;
                config.config_file = Some(PathBuf::from(value(&args, i, "--config")?));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "nightsky=debug,warn",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("nightsky {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(cli.verbose);

    let mut config = match &cli.config_file {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(scene) = cli.scene {
        config = config.with_scene(scene);
    }
    if let Some(duration_ms) = cli.duration_ms {
        config = config.with_duration_ms(duration_ms);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(frame_ms) = cli.frame_ms {
        config = config.with_frame_ms(frame_ms);
    }

    let report = simulate(&config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mNightsky\x1b[0m - Headless particle-field simulator

\x1b[1mUSAGE:\x1b[0m
    nightsky [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -v, --verbose        Log more (repeat for trace output)
    --scene NAME         backdrop, sparkles, trail, hero or all (default: backdrop)
    --duration MS        Simulated time to run (default: 10000)
    --seed N             Seed for every field (default: 0)
    --frame MS           Frame period (default: 16)
    --config PATH        JSON simulation config; flags override its values
    --json               Print the report as JSON

\x1b[1mEXAMPLES:\x1b[0m
    nightsky                               Ten seconds of the backdrop
    nightsky --scene trail --duration 60000
    nightsky --scene all --seed 7 --json   Full home page, JSON report
    RUST_LOG=nightsky_engine=trace nightsky -v

Logging honours RUST_LOG when set."
    );
}
