//! 設定と定数

/// デフォルトのグリッド
pub const DEFAULT_PROBLEM_SIZES: [u64; 3] = [5000, 10000, 20000];
pub const DEFAULT_COMPUTATION_TIMES: [f64; 4] = [0.1, 0.5, 1.0, 2.0];

/// 計算速度（ステップ/秒）
pub const DEFAULT_SPEED: f64 = 1000.0;

/// 専門手法の固定品質
pub const SPECIALIZED_QUALITY: f64 = 0.70;

/// 品質の上限
pub const MAX_QUALITY: f64 = 1.0;

/// ログフィルタ
pub const LOG_FILTER_DEFAULT: &str = "warn";
pub const LOG_FILTER_VERBOSE: &str = "debug";
