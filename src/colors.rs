//! Perceived-color helpers.
//!
//! Provides convenience functions for turning drive patterns and gradient
//! steps into `palette::Srgb` colors. The control loop itself works purely
//! in on/off patterns and integer ticks; these helpers exist for previews,
//! simulators, and tests that want to know what a step looks like to the
//! eye once the dithering is averaged out.

use crate::types::{ColorStep, DrivePattern};
use palette::{LinSrgb, Srgb};

/// The instantaneous color of a drive pattern, each line fully on or off.
#[inline]
pub fn pattern_color(pattern: DrivePattern) -> Srgb {
    Srgb::new(
        if pattern.red() { 1.0 } else { 0.0 },
        if pattern.green() { 1.0 } else { 0.0 },
        if pattern.blue() { 1.0 } else { 0.0 },
    )
}

/// The fraction of ticks the blend color is lit for the given timing.
///
/// A zero window means a continuous blend and yields `1.0`.
#[inline]
pub fn blend_duty(on_ticks: u16, blend_window: u16) -> f32 {
    if blend_window == 0 {
        return 1.0;
    }

    let on = f32::from(on_ticks);
    on / (on + f32::from(blend_window))
}

/// The time-averaged color of a gradient step.
///
/// Dominant lines burn at full intensity, blend lines at their duty. The
/// average is formed in linear light and encoded to sRGB, since duty cycling
/// dims physical output linearly.
pub fn step_color(step: &ColorStep, on_ticks: u16) -> Srgb {
    let duty = blend_duty(on_ticks, step.blend_window);
    let line = |dominant: bool, blend: bool| match (dominant, blend) {
        (true, _) => 1.0,
        (false, true) => duty,
        (false, false) => 0.0,
    };

    Srgb::from_linear(LinSrgb::new(
        line(step.dominant.red(), step.blend.red()),
        line(step.dominant.green(), step.blend.green()),
        line(step.dominant.blue(), step.blend.blue()),
    ))
}
