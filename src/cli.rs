//! コマンドラインインターフェース

use std::path::PathBuf;

use crate::error::{Result, SimError};
use crate::report::ReportFormat;
use crate::simulation::{Curve, GridOverrides};

/// コマンドライン引数
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
    pub overrides: GridOverrides,
    pub grid_file: Option<PathBuf>,
    pub format: ReportFormat,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run,
    Version,
    Help,
}

impl Args {
    pub fn parse(args: &[String]) -> Result<Self> {
        let (command, start_idx) = match args.first().map(String::as_str) {
            None => (Command::Run, 0),
            Some("run") => (Command::Run, 1),
            Some("version" | "-V" | "--version") => (Command::Version, 1),
            Some("help" | "-h" | "--help") => (Command::Help, 1),
            Some(_) => (Command::Run, 0),
        };

        let mut overrides = GridOverrides::default();
        let mut grid_file = None;
        let mut format = ReportFormat::Text;
        let mut verbose = false;
        let mut quiet = false;

        let mut i = start_idx;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "-c" | "--curve" => {
                    overrides.curve = Some(value(args, i, flag)?.parse::<Curve>()?);
                    i += 1;
                }
                "-s" | "--sizes" => {
                    overrides.sizes = Some(parse_list(value(args, i, flag)?, flag)?);
                    i += 1;
                }
                "-t" | "--times" => {
                    overrides.times = Some(parse_list(value(args, i, flag)?, flag)?);
                    i += 1;
                }
                "--speed" => {
                    let v = value(args, i, flag)?;
                    overrides.speed = Some(v.parse().map_err(|_| bad_value(flag, v))?);
                    i += 1;
                }
                "-g" | "--grid" => {
                    grid_file = Some(PathBuf::from(value(args, i, flag)?));
                    i += 1;
                }
                "-f" | "--format" => {
                    format = value(args, i, flag)?.parse()?;
                    i += 1;
                }
                "-v" | "--verbose" => verbose = true,
                "-q" | "--quiet" => quiet = true,
                _ => {
                    return Err(SimError::InvalidArgument(format!(
                        "error: unknown argument '{}'",
                        flag
                    )))
                }
            }
            i += 1;
        }

        if quiet {
            format = ReportFormat::Quiet;
        }

        Ok(Args {
            command,
            overrides,
            grid_file,
            format,
            verbose,
        })
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| SimError::InvalidArgument(format!("error: {} requires a value", flag)))
}

fn bad_value(flag: &str, v: &str) -> SimError {
    SimError::InvalidArgument(format!("error: invalid value '{}' for {}", v, flag))
}

/// "5000,10000,20000" -> [5000, 10000, 20000]
fn parse_list<T: std::str::FromStr>(s: &str, flag: &str) -> Result<Vec<T>> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| p.parse().map_err(|_| bad_value(flag, p)))
        .collect()
}
