//! The live result of the most recent refresh cycle.
//!
//! A [`Snapshot`] is built whole from one response and swapped in as a unit.
//! Results are tagged with the sequence number of the cycle that produced them
//! so a slow cycle finishing late cannot overwrite a newer one.
use crate::error::FetchError;
use crate::models::{PullRequest, ReviewerLoad};
use crate::reviewers;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub pull_requests: Vec<PullRequest>,
    pub workload: Vec<ReviewerLoad>,
}

impl Snapshot {
    pub fn from_pull_requests(pull_requests: Vec<PullRequest>) -> Self {
        let workload = reviewers::workload(&pull_requests);
        Self {
            pull_requests,
            workload,
        }
    }
}

/// Hands out increasing sequence numbers, starting at 1.
#[derive(Debug, Default)]
pub struct CycleCounter(AtomicU64);

impl CycleCounter {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// What one refresh cycle sends back to the driver.
#[derive(Debug)]
pub struct CycleResult {
    pub seq: u64,
    pub outcome: Result<Snapshot, FetchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Replaced,
    Stale { latest: u64 },
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: Arc<Snapshot>,
    applied_seq: u64,
}

impl SnapshotStore {
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    /// Replaces the snapshot unless a result from a later cycle is already live.
    pub fn apply(&mut self, seq: u64, snapshot: Snapshot) -> Applied {
        if seq <= self.applied_seq {
            return Applied::Stale {
                latest: self.applied_seq,
            };
        }
        self.current = Arc::new(snapshot);
        self.applied_seq = seq;
        Applied::Replaced
    }
}
