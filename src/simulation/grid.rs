//! 評価グリッド（問題サイズ × 計算時間）

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{check_speed, ComputationTime, Curve, ProblemSize};
use crate::config::*;
use crate::error::{Result, SimError};

/// 入力順を保持したグリッド
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub sizes: Vec<ProblemSize>,
    pub times: Vec<ComputationTime>,
    pub speed: f64,
    pub curve: Curve,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_PROBLEM_SIZES
                .iter()
                .filter_map(|&n| ProblemSize::try_from(n).ok())
                .collect(),
            times: DEFAULT_COMPUTATION_TIMES
                .iter()
                .filter_map(|&t| ComputationTime::new(t).ok())
                .collect(),
            speed: DEFAULT_SPEED,
            curve: Curve::Linear,
        }
    }
}

impl Grid {
    /// 生の値からグリッドを構築（検証付き）
    pub fn new(sizes: &[i128], times: &[f64], speed: f64, curve: Curve) -> Result<Self> {
        let grid = Self {
            sizes: sizes
                .iter()
                .map(|&n| ProblemSize::new(n))
                .collect::<Result<_>>()?,
            times: times
                .iter()
                .map(|&t| ComputationTime::new(t))
                .collect::<Result<_>>()?,
            speed,
            curve,
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(SimError::EmptyGrid("problem sizes"));
        }
        if self.times.is_empty() {
            return Err(SimError::EmptyGrid("computation times"));
        }
        check_speed(self.speed)?;
        Ok(())
    }

    /// 上書き値を適用
    pub fn apply(&mut self, overrides: &GridOverrides) -> Result<()> {
        if let Some(sizes) = &overrides.sizes {
            self.sizes = sizes
                .iter()
                .map(|&n| ProblemSize::new(n))
                .collect::<Result<_>>()?;
        }
        if let Some(times) = &overrides.times {
            self.times = times
                .iter()
                .map(|&t| ComputationTime::new(t))
                .collect::<Result<_>>()?;
        }
        if let Some(speed) = overrides.speed {
            self.speed = check_speed(speed)?;
        }
        if let Some(curve) = overrides.curve {
            self.curve = curve;
        }
        Ok(())
    }
}

/// グリッドJSON / コマンドライン由来の上書き値
///
/// ```json
/// {"sizes": [5000, 10000], "times": [0.5, 1.0], "speed": 1000, "curve": "log"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridOverrides {
    #[serde(default)]
    pub sizes: Option<Vec<i128>>,
    #[serde(default)]
    pub times: Option<Vec<f64>>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub curve: Option<Curve>,
}

impl GridOverrides {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let wrap = |e: SimError| SimError::GridFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        };
        let data = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let overrides = Self::from_json(&data).map_err(wrap)?;
        info!(path = %path.display(), "loaded grid file");
        debug!(?overrides);
        Ok(overrides)
    }

    /// `other` に値があればそちらを優先
    pub fn merge(mut self, other: GridOverrides) -> Self {
        if other.sizes.is_some() {
            self.sizes = other.sizes;
        }
        if other.times.is_some() {
            self.times = other.times;
        }
        if other.speed.is_some() {
            self.speed = other.speed;
        }
        if other.curve.is_some() {
            self.curve = other.curve;
        }
        self
    }
}
