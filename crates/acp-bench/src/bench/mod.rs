//! Benchmark module

pub mod config;
pub mod corpus;
pub mod mode;
pub mod report;
pub mod runner;
pub mod timing;

pub use config::BenchmarkConfig;
pub use mode::BenchMode;
pub use report::BenchReport;
pub use runner::BenchmarkRunner;
