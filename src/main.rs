//! bitter-lesson - The Bitter Lesson デモンストレーション

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bitter_lesson::cli::{Args, Command};
use bitter_lesson::config::*;
use bitter_lesson::{render, Grid, GridOverrides, Report, Result};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let args = match Args::parse(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(args.verbose);

    match &args.command {
        Command::Run => {
            if let Err(e) = cmd_run(&args) {
                eprintln!("error: {}", e);
                std::process::exit(e.exit_code());
            }
        }
        Command::Version => println!("bitter-lesson {}", VERSION),
        Command::Help => print_help(),
    }
}

/// ログはstderrへ（レポート出力と混ざらないように）
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(LOG_FILTER_VERBOSE)
    } else {
        EnvFilter::new(LOG_FILTER_DEFAULT)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_help() {
    println!(
        r#"bitter-lesson - The Bitter Lesson demonstration

USAGE:
    bitter-lesson [run] [OPTIONS]
    bitter-lesson version
    bitter-lesson help

OPTIONS:
    -c, --curve <CURVE>     linear, log (default: linear)
    -s, --sizes <N,...>     Problem sizes (default: 5000,10000,20000)
    -t, --times <T,...>     Computation times in seconds (default: 0.1,0.5,1.0,2.0)
        --speed <STEPS>     Computation speed in steps/second (default: 1000)
    -g, --grid <FILE>       Load sizes/times/speed/curve from a JSON file
    -f, --format <FORMAT>   text, json (default: text)
    -v, --verbose           Verbose output
    -q, --quiet             Quiet mode

EXAMPLES:
    bitter-lesson
    bitter-lesson -c log
    bitter-lesson -s 1000,50000 -t 0.5,5 -f json"#
    );
}

fn cmd_run(args: &Args) -> Result<()> {
    // グリッドJSON → コマンドライン引数の順に上書き
    let overrides = match &args.grid_file {
        Some(path) => GridOverrides::load(path)?.merge(args.overrides.clone()),
        None => args.overrides.clone(),
    };

    let mut grid = Grid::default();
    grid.apply(&overrides)?;

    let report = Report::build(&grid)?;
    info!(format = %args.format, "rendering report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&report, args.format, &mut out)
}
