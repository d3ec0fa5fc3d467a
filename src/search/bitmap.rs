use crate::search::constants::{MAX_TARGET, MIN_TARGET, TARGET_COUNT};

/// Reachability bitmap over the valid target range.
///
/// Index `i` corresponds to target `MIN_TARGET + i`; a set bit means the
/// target is exactly producible from the hand the bitmap was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBitmap {
    bits: [bool; TARGET_COUNT],
}

impl TargetBitmap {
    pub(crate) fn new() -> Self {
        Self {
            bits: [false; TARGET_COUNT],
        }
    }

    /// Marks `value` as reachable when it falls inside the target range;
    /// out-of-range values are ignored.
    pub(crate) fn mark(&mut self, value: u64) {
        if (MIN_TARGET..=MAX_TARGET).contains(&value) {
            self.bits[(value - MIN_TARGET) as usize] = true;
        }
    }

    /// Whether `target` is reachable; `false` for out-of-range targets.
    pub fn contains(&self, target: u64) -> bool {
        (MIN_TARGET..=MAX_TARGET).contains(&target) && self.bits[(target - MIN_TARGET) as usize]
    }

    /// Number of reachable targets.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Reachable targets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &bit)| bit)
            .map(|(i, _)| MIN_TARGET + i as u64)
    }

    /// Flat view indexed by `target - MIN_TARGET`.
    pub fn as_slice(&self) -> &[bool; TARGET_COUNT] {
        &self.bits
    }
}
