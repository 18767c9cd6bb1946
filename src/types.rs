//! Core types for drive patterns and gradient steps.

use core::ops::{BitOr, BitOrAssign};

/// A drive pattern for the indicator's three output lines.
///
/// Each line (red, green, blue) is either driven or dark; the seven non-empty
/// combinations render the primary and secondary colors, and [`DrivePattern::OFF`]
/// darkens the indicator. Patterns combine with bitwise OR, which is how the
/// scheduler merges a step's dominant and blend patterns each tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrivePattern(u8);

impl DrivePattern {
    /// All lines dark.
    pub const OFF: Self = Self(0b000);

    /// Red line only.
    pub const RED: Self = Self(0b001);

    /// Green line only.
    pub const GREEN: Self = Self(0b010);

    /// Blue line only.
    pub const BLUE: Self = Self(0b100);

    /// Red and green lines.
    pub const YELLOW: Self = Self(0b011);

    /// Red and blue lines.
    pub const MAGENTA: Self = Self(0b101);

    /// Green and blue lines.
    pub const CYAN: Self = Self(0b110);

    /// All three lines.
    pub const WHITE: Self = Self(0b111);

    /// Creates a pattern from individual line states.
    #[inline]
    pub const fn from_lines(red: bool, green: bool, blue: bool) -> Self {
        Self((red as u8) | ((green as u8) << 1) | ((blue as u8) << 2))
    }

    /// Returns the raw line bits (bit 0 = red, bit 1 = green, bit 2 = blue).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if the red line is driven.
    #[inline]
    pub const fn red(self) -> bool {
        self.0 & Self::RED.0 != 0
    }

    /// Returns true if the green line is driven.
    #[inline]
    pub const fn green(self) -> bool {
        self.0 & Self::GREEN.0 != 0
    }

    /// Returns true if the blue line is driven.
    #[inline]
    pub const fn blue(self) -> bool {
        self.0 & Self::BLUE.0 != 0
    }

    /// Returns true if no line is driven.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every line driven by `other` is also driven by `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Combines two patterns (const-friendly equivalent of `|`).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for DrivePattern {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DrivePattern {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl core::fmt::Debug for DrivePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "DrivePattern(")?;
        if self.is_off() {
            write!(f, "OFF")?;
        } else {
            let mut first = true;
            for (driven, name) in [
                (self.red(), "RED"),
                (self.green(), "GREEN"),
                (self.blue(), "BLUE"),
            ] {
                if driven {
                    if !first {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", name)?;
                    first = false;
                }
            }
        }
        write!(f, ")")
    }
}

/// A single step in the color gradient.
///
/// The dominant pattern is driven on every tick while this step is active;
/// the blend pattern is duty-cycled by the dimmer to mix in a secondary hue.
/// `blend_window` is the number of ticks the blend is withheld per dimming
/// cycle. Larger windows yield a fainter secondary color, and a window of
/// zero means the blend is driven continuously alongside the dominant
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorStep {
    /// Pattern driven on every tick.
    pub dominant: DrivePattern,

    /// Pattern mixed in by duty-cycling.
    pub blend: DrivePattern,

    /// Ticks the blend is withheld per dimming cycle; 0 = continuous blend.
    pub blend_window: u16,
}

impl ColorStep {
    /// Creates a new gradient step.
    #[inline]
    pub const fn new(dominant: DrivePattern, blend: DrivePattern, blend_window: u16) -> Self {
        Self {
            dominant,
            blend,
            blend_window,
        }
    }

    /// Creates a step that renders a single pattern with no blending.
    #[inline]
    pub const fn solid(dominant: DrivePattern) -> Self {
        Self::new(dominant, DrivePattern::OFF, 0)
    }
}
