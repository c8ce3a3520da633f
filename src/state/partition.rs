//! Index partition selector
//!
//! Splits the series into equal blocks and maps a block range to index bounds.
//! The last block absorbs the remainder.

use crate::constants::partition::{MAX_PARTITIONS, MIN_PARTITIONS};
use crate::error::Rejection;

/// A selection of blocks `first..=last` (1-based) out of `partitions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    pub partitions: usize,
    pub first: usize,
    pub last: usize,
}

impl PartitionPlan {
    pub fn new(partitions: usize, first: usize, last: usize) -> Self {
        Self {
            partitions,
            first,
            last,
        }
    }

    /// Inclusive `(index_min, index_max)` covered by the selected blocks
    pub fn index_range(&self, len: usize) -> Result<(usize, usize), Rejection> {
        let valid = (MIN_PARTITIONS..=MAX_PARTITIONS).contains(&self.partitions)
            && self.partitions <= len
            && self.first >= 1
            && self.first <= self.last
            && self.last <= self.partitions;
        if !valid {
            return Err(Rejection::InvalidPartition {
                partitions: self.partitions,
                first: self.first,
                last: self.last,
            });
        }

        let size = len / self.partitions;
        let remainder = len % self.partitions;

        let start = size * (self.first - 1);
        let end = if self.last == self.partitions {
            size * self.last + remainder - 1
        } else {
            size * self.last - 1
        };
        Ok((start, end))
    }
}
