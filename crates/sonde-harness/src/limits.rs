//! Campaign resource limits and stop policy.
//!
//! The generator itself has no terminal state while sequences remain
//! pending; the surrounding campaign decides when to stop. Caps on
//! generations, executions, and wall-clock time live here, with worklist
//! exhaustion as the natural end.

use serde::{Deserialize, Serialize};

/// Resource limits for a single campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLimits {
    /// Maximum completed generations before forced stop.
    pub max_generations: u64,
    /// Maximum target executions across the whole campaign.
    pub max_executions: u64,
    /// Maximum wall-clock seconds before forced stop.
    pub max_wall_secs: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_generations: 50,
            max_executions: 100_000,
            max_wall_secs: 300, // 5 minutes
        }
    }
}

/// Why a campaign stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The worklist drained with no survivors to expand.
    WorklistExhausted,
    /// Generation ceiling reached.
    GenerationLimit,
    /// Execution ceiling reached.
    ExecutionLimit,
    /// Wall-clock time limit exceeded.
    WallTimeExceeded,
}

/// Check campaign progress against limits.
pub struct ResourceChecker {
    limits: ResourceLimits,
    start_time: std::time::Instant,
}

impl ResourceChecker {
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            start_time: std::time::Instant::now(),
        }
    }

    /// Returns the reason to stop, if any limit has been hit.
    pub fn check(&self, generations_completed: u64, executions: u64) -> Option<StopReason> {
        if generations_completed >= self.limits.max_generations {
            return Some(StopReason::GenerationLimit);
        }
        if executions >= self.limits.max_executions {
            return Some(StopReason::ExecutionLimit);
        }
        if self.start_time.elapsed().as_secs() >= self.limits.max_wall_secs {
            return Some(StopReason::WallTimeExceeded);
        }
        None
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
