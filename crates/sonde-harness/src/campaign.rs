//! The campaign driver — the loop that owns the generator.
//!
//! Strictly alternates take -> execute -> record, single-threaded. The
//! executor call is the only point that may block. A failed execution
//! synthesizes a substitute empty record so the generation's accounting
//! stays exact — once a generation's dispatch count is fixed, the
//! generator always waits for exactly that many records.

use serde::{Deserialize, Serialize};
use sonde_explore::{GeneratorError, InputGenerator};
use sonde_input::{CoverageSet, StateSnapshot};

use crate::analytics::CampaignAnalytics;
use crate::executor::TargetExecutor;
use crate::limits::{ResourceChecker, ResourceLimits, StopReason};

/// Configuration for one campaign run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub limits: ResourceLimits,
    /// Branch-universe width of the target's coverage bitmaps; substitute
    /// records for failed executions are built at this width.
    pub coverage_width: usize,
}

impl CampaignConfig {
    pub fn with_width(coverage_width: usize) -> Self {
        Self {
            limits: ResourceLimits::default(),
            coverage_width,
        }
    }
}

/// Result of a complete campaign run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignResult {
    pub stop_reason: StopReason,
    pub generations_completed: u64,
    pub executions: u64,
    pub failed_executions: u64,
    pub analytics: CampaignAnalytics,
}

impl CampaignResult {
    /// Serialize for report emission.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Drive the generator against an executor until a limit is hit or the
/// worklist drains.
pub fn run_campaign<E: TargetExecutor>(
    generator: &mut InputGenerator,
    executor: &mut E,
    config: &CampaignConfig,
) -> Result<CampaignResult, GeneratorError> {
    let checker = ResourceChecker::new(config.limits.clone());
    let mut analytics = CampaignAnalytics::new(config.coverage_width);
    let mut executions = 0u64;
    let mut failed_executions = 0u64;

    let stop_reason = loop {
        let generations_completed = generator.generation() - 1;
        if let Some(reason) = checker.check(generations_completed, executions) {
            break reason;
        }

        let Some(sequence) = generator.generate() else {
            break StopReason::WorklistExhausted;
        };

        let (coverage, snapshot) = match executor.run(&sequence) {
            Ok(feedback) => feedback,
            Err(_) => {
                failed_executions += 1;
                (
                    CoverageSet::new(config.coverage_width),
                    StateSnapshot::empty(),
                )
            }
        };
        executions += 1;
        analytics.observe_execution(&coverage);

        let generation_before = generator.generation();
        generator.record(sequence, coverage, snapshot)?;
        if generator.generation() > generation_before {
            analytics.finish_generation(generation_before, generator.pending_len());
        }
    };

    analytics.set_elapsed(checker.elapsed_secs());
    Ok(CampaignResult {
        stop_reason,
        generations_completed: generator.generation() - 1,
        executions,
        failed_executions,
        analytics,
    })
}
