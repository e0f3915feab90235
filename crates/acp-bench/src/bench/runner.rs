//! Benchmark runner - executes one timed loop per invocation

use std::hint::black_box;

use tracing::debug;

use super::config::BenchmarkConfig;
use super::corpus::{
    self, InitializeResult, JsonRpcResponse, NewSessionResult, INITIALIZE_REQUEST,
    SESSION_NEW_REQUEST,
};
use super::mode::BenchMode;
use super::report::{BenchReport, ModeResult};
use super::timing::Stopwatch;
use crate::error::Result;

const ROUNDTRIP_SESSION_ID: &str = "sess-benchmark";
const CODEC_SESSION_ID: &str = "sess-bench";

/// Runs the configured benchmark mode
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Run the benchmark to completion and build its summary
    pub fn run(&self) -> Result<BenchReport> {
        let config = &self.config;
        debug!(
            mode = %config.mode,
            count = config.count,
            tokens = config.tokens,
            "Starting benchmark"
        );

        let result = match config.mode {
            BenchMode::ColdStart => run_cold_start()?,
            BenchMode::Roundtrip => run_roundtrip()?,
            BenchMode::Throughput => run_throughput(config.iterations())?,
            BenchMode::Codec => run_codec(config.iterations())?,
            BenchMode::Tokens => run_tokens(config.iterations(), config.tokens)?,
        };

        let report = BenchReport::ok(result);
        debug!(
            mode = %report.mode(),
            elapsed_ms = report.result.elapsed_ms(),
            "Benchmark complete"
        );
        Ok(report)
    }
}

/// Handle the first request of a process: initialize
fn run_cold_start() -> Result<ModeResult> {
    let watch = Stopwatch::start();

    let request = corpus::decode(INITIALIZE_REQUEST)?;
    let response = JsonRpcResponse::new(
        InitializeResult { protocol_version: 1 },
        request["id"].clone(),
    );
    black_box(corpus::encode(&response)?);

    let elapsed = watch.stop();
    Ok(ModeResult::ColdStart {
        elapsed_ms: elapsed.as_millis(),
    })
}

/// One session/new request and its response
fn run_roundtrip() -> Result<ModeResult> {
    let watch = Stopwatch::start();

    let request = corpus::decode(SESSION_NEW_REQUEST)?;
    let response = JsonRpcResponse::new(
        NewSessionResult {
            session_id: ROUNDTRIP_SESSION_ID,
        },
        request["id"].clone(),
    );
    black_box(corpus::encode(&response)?);

    let elapsed = watch.stop();
    Ok(ModeResult::Roundtrip {
        elapsed_ms: elapsed.as_millis(),
    })
}

/// Decode-only pass over the corpus
fn run_throughput(iterations: usize) -> Result<ModeResult> {
    let watch = Stopwatch::start();
    let mut decoded: i64 = 0;

    for message in corpus::cycle(iterations) {
        black_box(corpus::decode(message)?);
        decoded += 1;
    }

    let elapsed = watch.stop();
    debug!(elapsed_ns = elapsed.as_nanos(), decoded, "Throughput loop finished");
    Ok(ModeResult::Throughput {
        count: decoded,
        elapsed_ms: elapsed.as_millis(),
        msgs_per_sec: elapsed.rate(decoded),
    })
}

/// Decode each corpus message and encode a response alongside it
fn run_codec(iterations: usize) -> Result<ModeResult> {
    let watch = Stopwatch::start();
    let mut ops: i64 = 0;

    for (i, message) in corpus::cycle(iterations).enumerate() {
        black_box(corpus::decode(message)?);
        ops += 1;

        let response = JsonRpcResponse::new(
            NewSessionResult {
                session_id: CODEC_SESSION_ID,
            },
            i,
        );
        black_box(corpus::encode(&response)?);
        ops += 1;
    }

    let elapsed = watch.stop();
    debug!(elapsed_ns = elapsed.as_nanos(), ops, "Codec loop finished");
    Ok(ModeResult::Codec {
        ops,
        elapsed_ms: elapsed.as_millis(),
        ops_per_sec: elapsed.rate(ops),
    })
}

/// Repeatedly decode one streamed-text update of `tokens_per_msg` words
fn run_tokens(iterations: usize, tokens_per_msg: i64) -> Result<ModeResult> {
    // Built outside the timed region
    let message = corpus::token_update(tokens_per_msg)?;

    let watch = Stopwatch::start();
    let mut decoded: i64 = 0;
    let mut total_tokens: i128 = 0;

    for _ in 0..iterations {
        black_box(corpus::decode(&message)?);
        decoded += 1;
        total_tokens += i128::from(tokens_per_msg);
    }

    let elapsed = watch.stop();
    debug!(
        elapsed_ns = elapsed.as_nanos(),
        message_bytes = message.len(),
        decoded,
        "Tokens loop finished"
    );
    Ok(ModeResult::Tokens {
        messages: decoded,
        tokens_per_msg,
        total_tokens,
        elapsed_ms: elapsed.as_millis(),
        tokens_per_sec: elapsed.wide_rate(total_tokens),
        msgs_per_sec: elapsed.rate(decoded),
    })
}
