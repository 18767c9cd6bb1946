//! Hardware abstractions the control loop is generic over.

use crate::types::DrivePattern;

/// Hardware abstraction for the tri-color indicator.
///
/// Implementations drive three on/off color lines from a
/// [`DrivePattern`]; intensity mixing is done in time by the loop, so the
/// hardware side stays a plain port write.
pub trait Indicator {
    /// Asserts exactly the lines set in `pattern` and releases the rest.
    ///
    /// Called once per tick. Lines not present in the pattern must be
    /// released, otherwise stale colors linger across palette moves.
    fn drive(&mut self, pattern: DrivePattern);

    /// Releases all color lines.
    fn off(&mut self) {
        self.drive(DrivePattern::OFF);
    }
}

/// Hardware abstraction for the temperature sensor.
///
/// Capture is split in two: the loop calls
/// [`request_capture`](Self::request_capture) and moves on; the finished
/// conversion arrives later through a
/// [`SampleChannel`](crate::SampleChannel), typically from the sensor's
/// capture-complete interrupt.
pub trait TemperatureSensor {
    /// Starts one conversion. Must not block on the result.
    fn request_capture(&mut self);
}

/// Hardware abstraction for the rebaseline button.
pub trait Button {
    /// Samples the button level.
    ///
    /// Read once per tick; the loop reacts to the level, not to edges, so
    /// holding the button re-centers on every tick it spans.
    fn is_pressed(&mut self) -> bool;
}

/// Hardware abstraction for the loop's tick cadence.
///
/// Implementations block until the next tick boundary, usually by sleeping
/// until a timer interrupt. All loop timing is expressed in these ticks.
pub trait TickSource {
    /// Returns at the next tick.
    fn wait_for_tick(&mut self);
}
