use embedded_hal::digital::v2::OutputPin;
use thermo_glow::{DrivePattern, Indicator};

/// Indicator implementation for an RGB LED on three GPIO lines
///
/// This wrapper implements the Indicator trait required by the scheduler,
/// driving one push-pull output per color line and handling common
/// anode/cathode logic.
pub struct GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Create a new GPIO indicator
    ///
    /// # Arguments
    /// * `red` - Output pin for the red line
    /// * `green` - Output pin for the green line
    /// * `blue` - Output pin for the blue line
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        let mut indicator = Self {
            red,
            green,
            blue,
            common_anode,
        };

        // Start dark regardless of the pins' reset state
        indicator.drive(DrivePattern::OFF);
        indicator
    }

    /// Drive one line, inverting for common anode wiring
    fn set_line<P: OutputPin>(pin: &mut P, lit: bool, common_anode: bool) {
        if lit != common_anode {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}

// Implement the Indicator trait required by the scheduler
impl<R, G, B> Indicator for GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn drive(&mut self, pattern: DrivePattern) {
        Self::set_line(&mut self.red, pattern.red(), self.common_anode);
        Self::set_line(&mut self.green, pattern.green(), self.common_anode);
        Self::set_line(&mut self.blue, pattern.blue(), self.common_anode);
    }
}
