//! Benchmark mode definitions

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Which timed loop to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchMode {
    /// Decode one initialize request and encode its response
    ColdStart,
    /// Decode one session/new request and encode its response
    #[default]
    Roundtrip,
    /// Decode the sample corpus `count` times
    Throughput,
    /// Decode the sample corpus and encode a response, `count` times
    Codec,
    /// Decode a synthetic streamed-token message `count` times
    Tokens,
}

impl BenchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BenchMode::ColdStart => "cold-start",
            BenchMode::Roundtrip => "roundtrip",
            BenchMode::Throughput => "throughput",
            BenchMode::Codec => "codec",
            BenchMode::Tokens => "tokens",
        }
    }
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
