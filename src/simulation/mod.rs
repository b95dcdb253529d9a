//! シミュレーション本体
//!
//! - 専門手法: 計算量に依存しない固定品質
//! - 汎用手法: 計算ステップ数に応じて品質が向上（問題サイズで逓減）

mod grid;
mod scorer;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::error::{Result, SimError};

pub use grid::{Grid, GridOverrides};
pub use scorer::{general_method, general_method_with, score, specialized_method, total_steps};

// =============================================================================
// 値型
// =============================================================================

/// 問題サイズ（正の整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProblemSize(u64);

impl ProblemSize {
    pub fn new(n: i128) -> Result<Self> {
        if n <= 0 {
            return Err(SimError::NonPositiveProblemSize(n));
        }
        u64::try_from(n)
            .map(Self)
            .map_err(|_| SimError::ProblemSizeOutOfRange(n))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ProblemSize {
    type Error = SimError;

    fn try_from(n: u64) -> Result<Self> {
        if n == 0 {
            return Err(SimError::NonPositiveProblemSize(0));
        }
        Ok(Self(n))
    }
}

impl fmt::Display for ProblemSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 計算時間（秒、有限の非負実数）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ComputationTime(f64);

impl ComputationTime {
    pub fn new(t: f64) -> Result<Self> {
        if !t.is_finite() || t < 0.0 {
            return Err(SimError::InvalidComputationTime(t));
        }
        // -0.0 は 0.0 に正規化
        Ok(Self(t + 0.0))
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.0
    }
}

/// 最短の往復表現（0.1, 1.0, 2.0 ...）
///
/// 極端な値は `1e-5` / `1e16` 形式（Pythonの `1e-05` / `1e+16` とは異なる）
impl fmt::Display for ComputationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// 汎用手法の改善曲線
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Curve {
    /// quality = steps / n
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// quality = steps * ln(steps + 1) / n
    #[serde(rename = "log", alias = "logarithmic")]
    Logarithmic,
}

impl FromStr for Curve {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Curve::Linear),
            "log" | "logarithmic" => Ok(Curve::Logarithmic),
            _ => Err(SimError::InvalidArgument(format!(
                "error: unknown curve '{}' (expected linear or log)",
                s
            ))),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Linear => f.write_str("linear"),
            Curve::Logarithmic => f.write_str("log"),
        }
    }
}

/// 計算速度の検証
pub(crate) fn check_speed(speed: f64) -> Result<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(SimError::InvalidSpeed(speed));
    }
    Ok(speed)
}

/// 品質を [0, 1] に収める
#[inline]
pub(crate) fn clamp_quality(q: f64) -> f64 {
    q.clamp(0.0, MAX_QUALITY)
}
