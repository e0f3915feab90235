//! Summary emitted at the end of a run

use serde::Serialize;

use super::mode::BenchMode;

/// One-line JSON summary of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchReport {
    pub status: &'static str,
    #[serde(flatten)]
    pub result: ModeResult,
}

/// Mode-specific counters and rates, tagged with the mode name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ModeResult {
    ColdStart {
        elapsed_ms: u64,
    },
    Roundtrip {
        elapsed_ms: u64,
    },
    Throughput {
        count: i64,
        elapsed_ms: u64,
        msgs_per_sec: i64,
    },
    Codec {
        ops: i64,
        elapsed_ms: u64,
        ops_per_sec: i64,
    },
    Tokens {
        messages: i64,
        tokens_per_msg: i64,
        total_tokens: i128,
        elapsed_ms: u64,
        tokens_per_sec: i128,
        msgs_per_sec: i64,
    },
}

impl ModeResult {
    pub fn mode(&self) -> BenchMode {
        match self {
            ModeResult::ColdStart { .. } => BenchMode::ColdStart,
            ModeResult::Roundtrip { .. } => BenchMode::Roundtrip,
            ModeResult::Throughput { .. } => BenchMode::Throughput,
            ModeResult::Codec { .. } => BenchMode::Codec,
            ModeResult::Tokens { .. } => BenchMode::Tokens,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        match self {
            ModeResult::ColdStart { elapsed_ms }
            | ModeResult::Roundtrip { elapsed_ms }
            | ModeResult::Throughput { elapsed_ms, .. }
            | ModeResult::Codec { elapsed_ms, .. }
            | ModeResult::Tokens { elapsed_ms, .. } => *elapsed_ms,
        }
    }
}

impl BenchReport {
    pub fn ok(result: ModeResult) -> Self {
        Self {
            status: "ok",
            result,
        }
    }

    pub fn mode(&self) -> BenchMode {
        self.result.mode()
    }
}
