//! Duty-cycle generator for blend colors.

/// Which half of the blend cycle the dimmer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlendPhase {
    /// The blend color is asserted.
    BlendOn,

    /// Only the dominant color is asserted.
    BlendOff,
}

/// Alternates the blend color on and off to fake intermediate intensities.
///
/// Tri-color hardware can only switch lines fully on or off, so in-between
/// shades come from time: the blend color is held on for a fixed number of
/// ticks, then off for the active step's blend window. Over a full cycle the
/// blend line carries a duty of `on_ticks / (on_ticks + blend_window)`, and
/// a wider window reads as a fainter trace of the blend color.
///
/// A blend window of zero means a continuous blend: the dimmer reports the
/// blend as on every tick and holds its cycle at the start of the on phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimmer {
    phase: BlendPhase,
    ticks_in_phase: u16,
}

impl Dimmer {
    /// Creates a dimmer at the start of the off phase.
    pub const fn new() -> Self {
        Self {
            phase: BlendPhase::BlendOff,
            ticks_in_phase: 0,
        }
    }

    /// Advances the cycle by one tick and reports whether the blend color
    /// is asserted for this tick.
    ///
    /// `on_ticks` is how long the blend stays on per cycle and is expected
    /// to be nonzero; `blend_window` is how long it stays off and comes from
    /// the active gradient step, so it may change between calls when the
    /// palette moves.
    pub fn advance(&mut self, on_ticks: u16, blend_window: u16) -> bool {
        if blend_window == 0 {
            self.phase = BlendPhase::BlendOn;
            self.ticks_in_phase = 0;
            return true;
        }

        self.ticks_in_phase += 1;
        match self.phase {
            BlendPhase::BlendOn => {
                if self.ticks_in_phase >= on_ticks {
                    self.phase = BlendPhase::BlendOff;
                    self.ticks_in_phase = 0;
                }
            }
            BlendPhase::BlendOff => {
                if self.ticks_in_phase >= blend_window {
                    self.phase = BlendPhase::BlendOn;
                    self.ticks_in_phase = 0;
                }
            }
        }

        self.phase == BlendPhase::BlendOn
    }

    /// Current phase of the blend cycle.
    pub const fn phase(&self) -> BlendPhase {
        self.phase
    }
}

impl Default for Dimmer {
    fn default() -> Self {
        Self::new()
    }
}
