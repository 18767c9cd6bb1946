//! The per-tick control loop tying sensor, button, and indicator together.
//!
//! Provides [`Scheduler`], which owns the loop state and peripherals and
//! advances everything by exactly one step per [`tick`](Scheduler::tick)
//! call. The tick cadence itself comes from a [`TickSource`] via
//! [`run`](Scheduler::run), or from the caller in environments that already
//! have a timer loop.

use crate::channel::SampleChannel;
use crate::config::Config;
use crate::dimmer::Dimmer;
use crate::gradient::Gradient;
use crate::hal::{Button, Indicator, TemperatureSensor, TickSource};
use crate::mapper::{DriftMapper, PaletteMove};
use crate::types::{ColorStep, DrivePattern};

/// What happened during one tick.
///
/// Returned by [`Scheduler::tick`] so callers can log palette moves or
/// verify loop behavior without poking at the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// The button was held and the palette re-centered.
    pub rebaselined: bool,

    /// A capture request went out to the sensor this tick.
    pub capture_requested: bool,

    /// A sample arrived and was fed to the mapper.
    pub palette_move: Option<PaletteMove>,

    /// The dimmer asserted the blend pattern this tick.
    pub blend_active: bool,

    /// The pattern driven to the indicator this tick.
    pub pattern: DrivePattern,
}

/// Runs the temperature indicator control loop.
///
/// Each tick the scheduler reads the rebaseline button, counts down to the
/// next capture request, drains the sample channel into the drift mapper,
/// advances the blend dimmer, and drives the indicator with the resulting
/// pattern. All timing is tick-relative; the scheduler never talks to a
/// clock.
///
/// The button, sensor, and indicator are owned by the scheduler. The sample
/// channel is borrowed, since the sensor's capture-complete interrupt needs
/// the other end of it.
///
/// # Type Parameters
/// * `'c` - Lifetime of the sample channel reference
/// * `B` - Button implementation type
/// * `S` - Temperature sensor implementation type
/// * `I` - Indicator implementation type
pub struct Scheduler<'c, B: Button, S: TemperatureSensor, I: Indicator> {
    config: Config,
    gradient: Gradient,
    mapper: DriftMapper,
    dimmer: Dimmer,
    samples: &'c SampleChannel,
    button: B,
    sensor: S,
    indicator: I,
    ticks_since_capture: u16,
    last_sample: i16,
}

impl<'c, B: Button, S: TemperatureSensor, I: Indicator> Scheduler<'c, B, S, I> {
    /// Creates a scheduler with the indicator turned off.
    ///
    /// `initial_sample` seeds the drift reference and the reading the button
    /// re-centers on. Take one blocking capture at power-on to obtain it:
    ///
    /// request a conversion through the sensor, then
    /// [`SampleChannel::take_blocking`] the result before handing both to
    /// the scheduler.
    pub fn new(
        config: Config,
        gradient: Gradient,
        samples: &'c SampleChannel,
        button: B,
        sensor: S,
        mut indicator: I,
        initial_sample: i16,
    ) -> Self {
        indicator.off();

        Self {
            config,
            gradient,
            mapper: DriftMapper::new(initial_sample),
            dimmer: Dimmer::new(),
            samples,
            button,
            sensor,
            indicator,
            ticks_since_capture: 0,
            last_sample: initial_sample,
        }
    }

    /// Advances the loop by one tick.
    ///
    /// The stages run in a fixed order:
    ///
    /// 1. A held button re-centers the palette on the last sample.
    /// 2. The capture counter advances; on expiry a conversion is requested.
    /// 3. A pending sample, if any, is drained into the drift mapper.
    /// 4. The dimmer advances against the active step's blend window.
    /// 5. The indicator is driven with the dominant color, plus the blend
    ///    color on ticks where the dimmer asserts it.
    ///
    /// The ordering matters at the edges: a press re-centers on the sample
    /// *before* the one arriving this tick, and a sample consumed this tick
    /// already selects the step the dimmer and indicator act on.
    pub fn tick(&mut self) -> TickReport {
        let rebaselined = self.button.is_pressed();
        if rebaselined {
            self.mapper.rebaseline(self.last_sample);
        }

        self.ticks_since_capture += 1;
        let capture_requested = self.ticks_since_capture >= self.config.capture_interval_ticks();
        if capture_requested {
            self.ticks_since_capture = 0;
            self.sensor.request_capture();
        }

        let palette_move = self.samples.take().map(|sample| {
            self.last_sample = sample;
            self.mapper.observe(sample)
        });

        let step = &self.gradient.steps()[self.mapper.index()];
        let blend_active = self
            .dimmer
            .advance(self.config.blend_on_ticks(), step.blend_window);

        let pattern = if blend_active {
            step.dominant.union(step.blend)
        } else {
            step.dominant
        };
        self.indicator.drive(pattern);

        TickReport {
            rebaselined,
            capture_requested,
            palette_move,
            blend_active,
            pattern,
        }
    }

    /// Runs the loop forever at the tick source's cadence.
    pub fn run<T: TickSource>(&mut self, tick_source: &mut T) -> ! {
        loop {
            tick_source.wait_for_tick();
            self.tick();
        }
    }

    /// Current gradient step index.
    pub fn palette_index(&self) -> usize {
        self.mapper.index()
    }

    /// The gradient step currently being rendered.
    pub fn active_step(&self) -> &ColorStep {
        &self.gradient.steps()[self.mapper.index()]
    }

    /// Current drift reference in raw sensor units.
    pub fn reference(&self) -> i16 {
        self.mapper.reference()
    }

    /// Most recent sample consumed from the channel.
    pub fn last_sample(&self) -> i16 {
        self.last_sample
    }

    /// The loop's timing configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The gradient being displayed.
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }
}
