//! bitter-lesson - 専門手法と汎用手法の比較シミュレーション

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod simulation;

pub use error::{Result, SimError};
pub use report::{render, Report, ReportFormat};
pub use simulation::{
    general_method, general_method_with, specialized_method, ComputationTime, Curve, Grid,
    GridOverrides, ProblemSize,
};
