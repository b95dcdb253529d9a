//! 品質関数

use tracing::debug;

use super::{check_speed, clamp_quality, ComputationTime, Curve, ProblemSize};
use crate::config::*;
use crate::error::Result;

/// 専門手法: 入力に関係なく固定品質
#[inline(always)]
pub fn specialized_method(_problem_size: u64) -> f64 {
    SPECIALIZED_QUALITY
}

/// 汎用手法（速度1000ステップ/秒、線形曲線）
pub fn general_method(problem_size: u64, computation_time: f64) -> Result<f64> {
    general_method_with(problem_size, computation_time, DEFAULT_SPEED, Curve::Linear)
}

/// 汎用手法（速度・曲線を指定）
pub fn general_method_with(
    problem_size: u64,
    computation_time: f64,
    speed: f64,
    curve: Curve,
) -> Result<f64> {
    let size = ProblemSize::try_from(problem_size)?;
    let time = ComputationTime::new(computation_time)?;
    let speed = check_speed(speed)?;
    Ok(score(size, time, speed, curve))
}

/// floor(t * speed)
#[inline]
pub fn total_steps(time: ComputationTime, speed: f64) -> f64 {
    (time.seconds() * speed).floor()
}

/// 検証済みの入力で品質を計算
pub fn score(size: ProblemSize, time: ComputationTime, speed: f64, curve: Curve) -> f64 {
    let steps = total_steps(time, speed);
    let n = size.get() as f64;

    let raw = match curve {
        Curve::Linear => steps / n,
        Curve::Logarithmic => steps * steps.ln_1p() / n,
    };
    let quality = clamp_quality(raw);

    debug!(size = size.get(), time = time.seconds(), steps, %curve, quality, "general method");
    quality
}
