#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use thermo_glow::{
    Button, Config, DrivePattern, Gradient, Indicator, SampleChannel, Scheduler,
    TemperatureSensor, TickSource,
};

// ============================================================================
// Minimal Peripheral Implementations
// ============================================================================

/// Zero-size button for measuring library overhead
pub struct MinimalButton;

impl Button for MinimalButton {
    fn is_pressed(&mut self) -> bool {
        core::hint::black_box(false)
    }
}

/// Zero-size sensor; conversions are injected through the channel below
pub struct MinimalSensor;

impl TemperatureSensor for MinimalSensor {
    fn request_capture(&mut self) {
        core::hint::black_box(());
    }
}

/// Zero-size indicator
pub struct MinimalIndicator;

impl Indicator for MinimalIndicator {
    fn drive(&mut self, pattern: DrivePattern) {
        core::hint::black_box(pattern.bits());
    }
}

/// Tick source that sleeps until any interrupt fires
pub struct WfiTick;

impl TickSource for WfiTick {
    fn wait_for_tick(&mut self) {
        cortex_m::asm::wfi();
    }
}

static SAMPLES: SampleChannel = SampleChannel::new();

// ============================================================================
// Library Exercise
// ============================================================================

// Rebuilds the thermal tuning through the builder so that path is included
#[inline(never)]
fn build_gradient() -> Gradient {
    let mut builder = Gradient::builder();
    for step in Gradient::thermal().steps() {
        builder = match builder.step(*step) {
            Ok(builder) => builder,
            Err(_) => Gradient::builder(),
        };
    }

    builder.build().unwrap_or_else(|_| Gradient::thermal())
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise(scheduler: &mut Scheduler<'static, MinimalButton, MinimalSensor, MinimalIndicator>) {
    // sweep cool past the clamp, then warm back across every step
    let mut sample = 0i16;
    for _ in 0..16 {
        sample -= 4;
        SAMPLES.deliver(sample);
        core::hint::black_box(scheduler.tick());
    }
    for _ in 0..28 {
        sample += 4;
        SAMPLES.deliver(sample);
        core::hint::black_box(scheduler.tick());
    }

    core::hint::black_box(scheduler.palette_index());
    core::hint::black_box(scheduler.reference());
    core::hint::black_box(scheduler.last_sample());
}

#[entry]
fn main() -> ! {
    let config = match Config::new(1200, 1) {
        Ok(config) => config,
        Err(_) => Config::default(),
    };

    let mut scheduler = Scheduler::new(
        config,
        build_gradient(),
        &SAMPLES,
        MinimalButton,
        MinimalSensor,
        MinimalIndicator,
        0,
    );

    exercise(&mut scheduler);

    // Sleep-tick forever - this is a size analysis binary, not meant
    // to do real work
    let mut ticks = WfiTick;
    scheduler.run(&mut ticks)
}
