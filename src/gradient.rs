//! The fixed 20-step color gradient and its construction.

use crate::types::{ColorStep, DrivePattern};
use heapless::Vec;

/// Number of steps in a gradient. Fixed; the palette is not resizable.
pub const STEP_COUNT: usize = 20;

/// Index of the neutral "rest" step the mapper recenters on.
pub const NEUTRAL_STEP: usize = 8;

/// Gradient validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientError {
    /// More than [`STEP_COUNT`] steps were supplied.
    CapacityExceeded,

    /// The builder was finished with the wrong number of steps.
    StepCount {
        /// Steps a gradient must have.
        expected: usize,
        /// Steps actually supplied.
        found: usize,
    },
}

impl core::fmt::Display for GradientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GradientError::CapacityExceeded => {
                write!(f, "gradient holds at most {} steps", STEP_COUNT)
            }
            GradientError::StepCount { expected, found } => {
                write!(f, "gradient needs exactly {} steps, got {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GradientError {}

/// An ordered gradient of exactly [`STEP_COUNT`] color steps.
///
/// Index 0 is one extreme of the gradient, index `STEP_COUNT - 1` the
/// opposite extreme, and [`NEUTRAL_STEP`] the rest step. The hand-tuned
/// [`Gradient::thermal`] table puts the warmest color (red) at index 0 and
/// the coolest (blue) at index 19; the mapper's direction convention follows
/// that layout. A gradient is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    steps: [ColorStep; STEP_COUNT],
}

impl Gradient {
    /// Creates a gradient from a full array of steps.
    pub const fn from_steps(steps: [ColorStep; STEP_COUNT]) -> Self {
        Self { steps }
    }

    /// The hand-tuned warm-to-cool thermal gradient.
    ///
    /// Walks red → yellow → green → cyan → blue, with duty-cycled blends
    /// between the pure hues: a blend window of 9 is a faint trace of the
    /// neighboring color, 1 a strong one. Index 8 is pure green, the neutral
    /// rest step; the blue extreme shades toward violet by blending red back
    /// in.
    pub const fn thermal() -> Self {
        const R: DrivePattern = DrivePattern::RED;
        const G: DrivePattern = DrivePattern::GREEN;
        const B: DrivePattern = DrivePattern::BLUE;

        Self::from_steps([
            // warm extreme: red shading toward yellow
            ColorStep::solid(R),
            ColorStep::new(R, G, 9),
            ColorStep::new(R, G, 3),
            ColorStep::new(R, G, 1),
            ColorStep::solid(DrivePattern::YELLOW),
            // green band around the neutral rest step
            ColorStep::new(G, R, 1),
            ColorStep::new(G, R, 3),
            ColorStep::new(G, R, 9),
            ColorStep::solid(G),
            ColorStep::new(G, B, 9),
            ColorStep::new(G, B, 3),
            ColorStep::new(G, B, 1),
            ColorStep::solid(DrivePattern::CYAN),
            // cool extreme: blue shading toward violet
            ColorStep::new(B, G, 1),
            ColorStep::new(B, G, 3),
            ColorStep::new(B, G, 9),
            ColorStep::solid(B),
            ColorStep::new(B, R, 9),
            ColorStep::new(B, R, 3),
            ColorStep::new(B, R, 1),
        ])
    }

    /// Creates a builder for a custom gradient.
    pub fn builder() -> GradientBuilder {
        GradientBuilder::new()
    }

    /// Returns a reference to the step at the given index.
    pub fn get(&self, index: usize) -> Option<&ColorStep> {
        self.steps.get(index)
    }

    /// Returns the full step table.
    pub fn steps(&self) -> &[ColorStep; STEP_COUNT] {
        &self.steps
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::thermal()
    }
}

/// Builder for constructing validated gradients step by step.
///
/// Useful when a tuning is generated programmatically (symmetric windows,
/// mirrored bands) rather than written out as a literal array.
#[derive(Debug)]
pub struct GradientBuilder {
    steps: Vec<ColorStep, STEP_COUNT>,
}

impl GradientBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    ///
    /// # Errors
    /// * `CapacityExceeded` - more than [`STEP_COUNT`] steps were added
    pub fn step(mut self, step: ColorStep) -> Result<Self, GradientError> {
        self.steps
            .push(step)
            .map_err(|_| GradientError::CapacityExceeded)?;
        Ok(self)
    }

    /// Builds the gradient.
    ///
    /// # Errors
    /// * `StepCount` - fewer than [`STEP_COUNT`] steps were supplied
    pub fn build(self) -> Result<Gradient, GradientError> {
        if self.steps.len() != STEP_COUNT {
            return Err(GradientError::StepCount {
                expected: STEP_COUNT,
                found: self.steps.len(),
            });
        }

        let mut steps = [ColorStep::solid(DrivePattern::OFF); STEP_COUNT];
        for (slot, step) in steps.iter_mut().zip(self.steps.iter()) {
            *slot = *step;
        }
        Ok(Gradient::from_steps(steps))
    }
}

impl Default for GradientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
