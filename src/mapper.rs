//! Maps temperature drift onto gradient step indices.

use crate::gradient::{NEUTRAL_STEP, STEP_COUNT};

/// Minimum difference from the reference (in raw sensor units) for a sample
/// to count as drift. Differences below this are ignored; with integer
/// samples that makes any changed reading qualify and an exact match hold.
pub const DRIFT_DEAD_ZONE: u16 = 1;

/// Outcome of feeding one sample to the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteMove {
    /// The sample stayed within the dead zone of the reference.
    Held,

    /// The sample read warmer than the reference.
    Warmer,

    /// The sample read cooler than the reference.
    Cooler,
}

/// Tracks a moving temperature reference and the gradient index it implies.
///
/// The mapper reacts to *drift*, not to absolute temperature: each sample is
/// compared against the reference, and when the difference reaches
/// [`DRIFT_DEAD_ZONE`] the index moves a single step toward the matching end
/// of the gradient (warmer toward index 0, cooler toward the last index) and
/// the reference jumps to the sample. A steady temperature therefore settles
/// the display, however far the index has wandered, and a fast swing still
/// walks the gradient one step per sample.
///
/// Samples are raw sensor units ([`i16`]); the mapper never converts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriftMapper {
    index: usize,
    reference: i16,
}

impl DriftMapper {
    /// Creates a mapper centered on the neutral step with the given
    /// reference temperature.
    pub const fn new(reference: i16) -> Self {
        Self {
            index: NEUTRAL_STEP,
            reference,
        }
    }

    /// Feeds one sample to the mapper.
    ///
    /// Returns which way the palette moved. On a qualifying move the
    /// reference follows the sample even when the index is pinned at an end
    /// of the gradient, so continued drift in the same direction must keep
    /// qualifying on its own.
    pub fn observe(&mut self, sample: i16) -> PaletteMove {
        if sample.abs_diff(self.reference) < DRIFT_DEAD_ZONE {
            return PaletteMove::Held;
        }

        let warmer = sample > self.reference;
        self.reference = sample;

        if warmer {
            self.index = self.index.saturating_sub(1);
            PaletteMove::Warmer
        } else {
            if self.index < STEP_COUNT - 1 {
                self.index += 1;
            }
            PaletteMove::Cooler
        }
    }

    /// Recenters the mapper: the index snaps to the neutral step and the
    /// given sample becomes the new reference.
    pub fn rebaseline(&mut self, sample: i16) {
        self.index = NEUTRAL_STEP;
        self.reference = sample;
    }

    /// Current gradient step index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current reference temperature in raw sensor units.
    pub const fn reference(&self) -> i16 {
        self.reference
    }
}
