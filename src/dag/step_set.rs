// src/dag/step_set.rs

use crate::dag::graph::StepIndex;

/// Dense membership set over graph indices.
///
/// Sized once for a graph; used for the sequencer's `selected` set and the
/// scheduler's `completed` / in-progress sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSet {
    members: Vec<bool>,
    count: usize,
}

impl StepSet {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            members: vec![false; len],
            count: 0,
        }
    }

    /// Insert `idx`; returns `true` if it was not already present.
    pub fn insert(&mut self, idx: StepIndex) -> bool {
        if self.members[idx] {
            return false;
        }
        self.members[idx] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, idx: StepIndex) -> bool {
        self.members.get(idx).copied().unwrap_or(false)
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    /// Whether every index of the universe is a member.
    pub fn is_full(&self) -> bool {
        self.count == self.members.len()
    }
}
