use clap::Parser;

use crate::bench::{BenchMode, BenchmarkConfig};

#[derive(Parser, Debug)]
#[command(name = "acp-bench")]
#[command(about = "ACP SDK JSON codec benchmark")]
#[command(version)]
pub struct Cli {
    /// Benchmark to run
    #[arg(long, value_enum, default_value_t = BenchMode::Roundtrip)]
    pub mode: BenchMode,

    /// Loop iterations for throughput, codec and tokens modes
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub count: i64,

    /// Words per synthetic message in tokens mode
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub tokens: i64,

    /// Log filter for stderr diagnostics (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            mode: self.mode,
            count: self.count,
            tokens: self.tokens,
        }
    }
}
