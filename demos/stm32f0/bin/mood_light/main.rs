#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use stm32f0xx_hal::pac::{self, interrupt};

use stm32f0_demos::tick::SysTickSource;
use thermo_glow::{Config, Gradient, SampleChannel, Scheduler, TemperatureSensor};

mod hardware_setup;
mod sensor;

use sensor::OnChipSensor;

/// Mailbox between the ADC end-of-conversion interrupt and the control loop
static SAMPLES: SampleChannel = SampleChannel::new();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::tick::tick();
}

/// ADC end-of-conversion handler - delivers the raw reading to the loop
#[interrupt]
fn ADC_COMP() {
    let adc = unsafe { &(*pac::ADC::ptr()) };
    if adc.isr.read().eoc().bit_is_set() {
        // Reading DR clears the EOC flag
        SAMPLES.deliver(adc.dr.read().data().bits() as i16);
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Thermo Glow Mood Light ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();

    rprintln!("=== Hardware Ready ===");

    // One blocking conversion seeds the drift reference before the loop starts
    let mut sensor = OnChipSensor::new();
    sensor.request_capture();
    let ambient = SAMPLES.take_blocking();
    rprintln!("Ambient reference: {} raw counts", ambient);

    // At the 1ms SysTick the default 1200-tick interval samples every 1.2s.
    // A mood lamp wants lazy drift; tighten the interval for faster tracking.
    let mut scheduler = Scheduler::new(
        Config::default(),
        Gradient::thermal(),
        &SAMPLES,
        hw.button,
        sensor,
        hw.indicator,
        ambient,
    );

    rprintln!("=== Mood Light Running ===");
    rprintln!("Warming drifts the glow toward red, cooling toward blue.");
    rprintln!("Press the user button to re-center on the current temperature.");

    let mut ticks = SysTickSource::new();
    scheduler.run(&mut ticks)
}
