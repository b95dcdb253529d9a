//! レポート生成と出力

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, SimError};
use crate::simulation::{
    score, specialized_method, total_steps, ComputationTime, Curve, Grid, ProblemSize,
};

const TITLE: &str = "=== The Bitter Lesson Demonstration ===";

const INTRO: &str = "\
This simulation compares two problem-solving approaches:
1. **Specialized Method**: Uses built-in human knowledge. Performance remains constant regardless of computation time.
2. **General Method**: Leverages computation through search and learning. Performance improves with more computation time.";

const SPECIALIZED_HEADER: &str = "**Specialized Method Results:**";

const SPECIALIZED_NOTE: &str =
    "(Notice that the specialized method's performance remains constant across different problem sizes.)";

const GENERAL_HEADER: &str = "**General Method Results:**";

const CONCLUSION: &str = "\
=== Conclusion ===
The specialized method achieves a fixed solution quality regardless of computation time or problem size.
In contrast, the general method's solution quality improves with increased computation time, especially for larger problem sizes.

This demonstrates **'The Bitter Lesson'**:
General methods that leverage computation ultimately outperform specialized methods that rely on built-in human knowledge.

As computational resources continue to grow, focusing on general-purpose algorithms and learning methods becomes increasingly advantageous.";

/// 出力形式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    /// 数値のみ（タブ区切り）
    Quiet,
}

impl FromStr for ReportFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(SimError::InvalidArgument(format!(
                "error: unknown format '{}' (expected text or json)",
                s
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Quiet => "quiet",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecializedRow {
    pub problem_size: ProblemSize,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralRow {
    pub computation_time: ComputationTime,
    pub steps: u64,
    pub quality: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralBlock {
    pub problem_size: ProblemSize,
    pub results: Vec<GeneralRow>,
}

/// 評価済みレポート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub curve: Curve,
    pub speed: f64,
    pub specialized: Vec<SpecializedRow>,
    pub general: Vec<GeneralBlock>,
}

impl Report {
    /// グリッド全体を評価（入力順を保持）
    pub fn build(grid: &Grid) -> Result<Self> {
        grid.validate()?;
        info!(
            sizes = grid.sizes.len(),
            times = grid.times.len(),
            speed = grid.speed,
            curve = %grid.curve,
            "evaluating grid"
        );

        let specialized = grid
            .sizes
            .iter()
            .map(|&size| SpecializedRow {
                problem_size: size,
                quality: specialized_method(size.get()),
            })
            .collect();

        let general = grid
            .sizes
            .iter()
            .map(|&size| GeneralBlock {
                problem_size: size,
                results: grid
                    .times
                    .iter()
                    .map(|&time| GeneralRow {
                        computation_time: time,
                        steps: total_steps(time, grid.speed) as u64,
                        quality: score(size, time, grid.speed, grid.curve),
                    })
                    .collect(),
            })
            .collect();

        Ok(Self {
            curve: grid.curve,
            speed: grid.speed,
            specialized,
            general,
        })
    }
}

pub fn render<W: Write>(report: &Report, format: ReportFormat, out: &mut W) -> Result<()> {
    match format {
        ReportFormat::Text => render_text(report, out)?,
        ReportFormat::Json => render_json(report, out)?,
        ReportFormat::Quiet => render_quiet(report, out)?,
    }
    out.flush()?;
    Ok(())
}

pub fn render_text<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}\n", TITLE)?;
    writeln!(out, "{}\n", INTRO)?;

    writeln!(out, "{}", SPECIALIZED_HEADER)?;
    for row in &report.specialized {
        writeln!(
            out,
            "Problem Size {}: Solution Quality = {:.2}",
            row.problem_size, row.quality
        )?;
    }
    writeln!(out, "\n{}\n", SPECIALIZED_NOTE)?;

    writeln!(out, "{}", GENERAL_HEADER)?;
    for block in &report.general {
        writeln!(out, "\nProblem Size {}:", block.problem_size)?;
        for row in &block.results {
            writeln!(
                out,
                "  Computation Time {}s -> Solution Quality: {:.2}",
                row.computation_time, row.quality
            )?;
        }
        writeln!(
            out,
            "(For problem size {}, the solution quality improves with more computation time.)",
            block.problem_size
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", CONCLUSION)
}

pub fn render_json<W: Write>(report: &Report, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// size \t time \t quality
pub fn render_quiet<W: Write>(report: &Report, out: &mut W) -> std::io::Result<()> {
    for block in &report.general {
        for row in &block.results {
            writeln!(
                out,
                "{}\t{}\t{:.2}",
                block.problem_size, row.computation_time, row.quality
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(grid: &Grid) -> String {
        let report = Report::build(grid).unwrap();
        let mut buf = Vec::new();
        render_text(&report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_cell_report() {
        let grid = Grid::new(&[5000], &[1.0], 1000.0, Curve::Linear).unwrap();
        let out = text(&grid);

        let specialized: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("Problem Size ") && l.contains(" = "))
            .collect();
        assert_eq!(specialized, ["Problem Size 5000: Solution Quality = 0.70"]);

        let general: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("  Computation Time"))
            .collect();
        assert_eq!(general, ["  Computation Time 1.0s -> Solution Quality: 0.20"]);
    }

    #[test]
    fn order_follows_input() {
        let grid = Grid::new(&[20000, 5000], &[2.0, 0.5], 1000.0, Curve::Linear).unwrap();
        let report = Report::build(&grid).unwrap();
        let mut buf = Vec::new();
        render_quiet(&report, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "20000\t2.0\t0.10\n20000\t0.5\t0.03\n5000\t2.0\t0.40\n5000\t0.5\t0.10\n"
        );
    }

    #[test]
    fn log_curve_report() {
        let grid = Grid::new(&[5000], &[1.0], 1000.0, Curve::Logarithmic).unwrap();
        assert!(text(&grid).contains("Computation Time 1.0s -> Solution Quality: 1.00"));
    }

    #[test]
    fn json_report_fields() {
        let grid = Grid::new(&[5000], &[0.0, 1.0], 1000.0, Curve::Linear).unwrap();
        let report = Report::build(&grid).unwrap();
        let mut buf = Vec::new();
        render(&report, ReportFormat::Json, &mut buf).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["curve"], "linear");
        assert_eq!(v["speed"], 1000.0);
        assert_eq!(v["specialized"][0]["problem_size"], 5000);
        assert_eq!(v["specialized"][0]["quality"], 0.7);
        assert_eq!(v["general"][0]["results"][0]["quality"], 0.0);
        assert_eq!(v["general"][0]["results"][1]["steps"], 1000);
        assert!(String::from_utf8(buf).unwrap().contains("\"steps\": 1000,"));
        assert_eq!(v["general"][0]["results"][1]["quality"], 0.2);
    }

    #[test]
    fn format_parse() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
