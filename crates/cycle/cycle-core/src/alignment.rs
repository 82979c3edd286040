//! Timestamp alignment of two series

use cycle_spi::{CycleError, Result, TimeSeries};

/// Fewest shared observations for a pairwise statistic to be defined
pub const MIN_SHARED: usize = 2;

/// Values of two series restricted to the timestamps they share
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    timestamps: Vec<i64>,
    left: Vec<f64>,
    right: Vec<f64>,
}

impl AlignedPair {
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn left(&self) -> &[f64] {
        &self.left
    }

    pub fn right(&self) -> &[f64] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Inner-join two series on timestamp.
///
/// Both inputs are sorted, so a single merge walk suffices. Fails with
/// `MisalignedSeries` when fewer than [`MIN_SHARED`] timestamps match.
pub fn align(a: &TimeSeries, b: &TimeSeries) -> Result<AlignedPair> {
    let (ta, tb) = (a.timestamps(), b.timestamps());
    let (va, vb) = (a.values(), b.values());

    let capacity = ta.len().min(tb.len());
    let mut timestamps = Vec::with_capacity(capacity);
    let mut left = Vec::with_capacity(capacity);
    let mut right = Vec::with_capacity(capacity);

    let (mut i, mut j) = (0, 0);
    while i < ta.len() && j < tb.len() {
        match ta[i].cmp(&tb[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                timestamps.push(ta[i]);
                left.push(va[i]);
                right.push(vb[j]);
                i += 1;
                j += 1;
            }
        }
    }

    if timestamps.len() < MIN_SHARED {
        return Err(CycleError::MisalignedSeries {
            shared: timestamps.len(),
            required: MIN_SHARED,
        });
    }

    Ok(AlignedPair {
        timestamps,
        left,
        right,
    })
}
