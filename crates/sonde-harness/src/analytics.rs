//! Campaign analytics.
//!
//! Tracks the coverage curve across generations — cumulative distinct
//! branches, executions, and worklist sizes — for campaign-level
//! observability and report emission.

use serde::{Deserialize, Serialize};
use sonde_input::CoverageSet;

/// One completed generation's measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationPoint {
    /// Generation number, starting at 1.
    pub generation: u64,
    /// Executions performed in this generation.
    pub executions: u64,
    /// Cumulative distinct branches covered after this generation.
    pub branches_covered: usize,
    /// Size of the worklist built for the following generation.
    pub next_worklist: usize,
}

/// Campaign-level analytics aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignAnalytics {
    /// Coverage curve, one point per completed generation.
    pub curve: Vec<GenerationPoint>,
    /// Total executions across the campaign.
    pub total_executions: u64,
    /// Peak cumulative distinct-branch count.
    pub peak_branches: usize,
    /// Wall-clock elapsed seconds.
    pub elapsed_secs: f64,
    /// Union of all observed coverage.
    covered: CoverageSet,
    executions_this_generation: u64,
}

impl CampaignAnalytics {
    pub fn new(coverage_width: usize) -> Self {
        Self {
            curve: Vec::new(),
            total_executions: 0,
            peak_branches: 0,
            elapsed_secs: 0.0,
            covered: CoverageSet::new(coverage_width),
            executions_this_generation: 0,
        }
    }

    /// Fold one execution's coverage into the campaign union. Coverage of
    /// an unexpected width is ignored — analytics are advisory.
    pub fn observe_execution(&mut self, coverage: &CoverageSet) {
        self.total_executions += 1;
        self.executions_this_generation += 1;
        let _ = self.covered.union_with(coverage);
        self.peak_branches = self.peak_branches.max(self.covered.count_ones());
    }

    /// Close out a generation's measurements.
    pub fn finish_generation(&mut self, generation: u64, next_worklist: usize) {
        self.curve.push(GenerationPoint {
            generation,
            executions: self.executions_this_generation,
            branches_covered: self.covered.count_ones(),
            next_worklist,
        });
        self.executions_this_generation = 0;
    }

    pub fn set_elapsed(&mut self, secs: f64) {
        self.elapsed_secs = secs;
    }

    /// Campaign-wide union of observed coverage.
    pub fn covered(&self) -> &CoverageSet {
        &self.covered
    }
}
