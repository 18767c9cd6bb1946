use embedded_hal::digital::v2::InputPin;
use thermo_glow::Button;

/// Button implementation for an active-low GPIO input
///
/// The user button on the Nucleo-F072RB pulls PC13 to ground while held,
/// so "pressed" reads as a low level. No debouncing is done here: the
/// scheduler samples the level once per tick and re-centering twice on a
/// bouncy edge lands on the same reference anyway.
pub struct UserButton<P>
where
    P: InputPin,
{
    pin: P,
}

impl<P> UserButton<P>
where
    P: InputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

// Implement the Button trait required by the scheduler
impl<P> Button for UserButton<P>
where
    P: InputPin,
{
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}
