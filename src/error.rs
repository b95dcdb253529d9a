//! エラー型

use std::path::PathBuf;

/// シミュレーションの入力検証エラー
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// 問題サイズが0以下（ゼロ除算になる）
    #[error("problem size must be positive (got {0})")]
    NonPositiveProblemSize(i128),

    /// 問題サイズが u64 に収まらない
    #[error("problem size {0} exceeds the supported maximum (18446744073709551615)")]
    ProblemSizeOutOfRange(i128),

    /// 計算時間が負または非有限
    #[error("computation time must be a finite non-negative number (got {0})")]
    InvalidComputationTime(f64),

    /// 計算速度が0以下または非有限
    #[error("computation speed must be a finite positive number (got {0})")]
    InvalidSpeed(f64),

    /// サイズ・時間の列が空
    #[error("no {0} to evaluate")]
    EmptyGrid(&'static str),

    /// コマンドライン引数の誤り
    #[error("{0}")]
    InvalidArgument(String),

    /// グリッドJSONの読み込み失敗
    #[error("failed to load grid {}: {source}", .path.display())]
    GridFile {
        path: PathBuf,
        #[source]
        source: Box<SimError>,
    },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// プロセス終了コード（引数エラーは2）
    pub fn exit_code(&self) -> i32 {
        match self {
            SimError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
