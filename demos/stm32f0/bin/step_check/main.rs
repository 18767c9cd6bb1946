#![no_std]
#![no_main]

use cortex_m::peripheral::SYST;
use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use stm32f0xx_hal::{
    gpio::{Input, Output, PushPull, gpioa, gpiob},
    pac,
    prelude::*,
};

use stm32f0_demos::indicator::GpioIndicator;
use stm32f0_demos::tick::SysTickSource;

use thermo_glow::{
    DEFAULT_BLEND_ON_TICKS, Dimmer, Gradient, Indicator, STEP_COUNT, TickSource, colors,
};

/// Type alias for the LED drive lines
pub type Led = GpioIndicator<
    gpioa::PA6<Output<PushPull>>,
    gpioa::PA7<Output<PushPull>>,
    gpiob::PB0<Output<PushPull>>,
>;

/// How long each gradient step stays on the LED (in 1ms ticks)
pub const STEP_HOLD_TICKS: u32 = 1_500;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_demos::tick::tick();
}

/// Configure the system clock to run at maximum speed
///
/// # Returns
/// The configured RCC (Reset and Clock Control) peripheral
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}

/// Configure SysTick timer for 1ms interrupts
///
/// Each interrupt latches one base tick; the dimming loop below runs
/// once per latched tick.
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure the RGB indicator lines (PA6, PA7, PB0) as push-pull outputs
fn setup_indicator(
    pa6: gpioa::PA6<Input<stm32f0xx_hal::gpio::Floating>>,
    pa7: gpioa::PA7<Input<stm32f0xx_hal::gpio::Floating>>,
    pb0: gpiob::PB0<Input<stm32f0xx_hal::gpio::Floating>>,
) -> Led {
    let (red, green, blue) = cortex_m::interrupt::free(|cs| {
        (
            pa6.into_push_pull_output(cs),
            pa7.into_push_pull_output(cs),
            pb0.into_push_pull_output(cs),
        )
    });

    rprintln!("RGB indicator configured on PA6, PA7, PB0");

    // Common anode = true
    GpioIndicator::new(red, green, blue, true)
}

/// Print the step about to be shown, with its approximate sRGB rendering
fn announce_step(index: usize, gradient: &Gradient) {
    let step = &gradient.steps()[index];
    let color = colors::step_color(step, DEFAULT_BLEND_ON_TICKS);
    rprintln!(
        "step {:>2}: {:?} ~ R={:.2} G={:.2} B={:.2}",
        index,
        step.dominant,
        color.red,
        color.green,
        color.blue
    );
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Gradient Step Check ===");

    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);

    let mut indicator = setup_indicator(gpioa.pa6, gpioa.pa7, gpiob.pb0);

    rprintln!("=== Hardware Ready ===");
    rprintln!("Walking all {} steps, {}ms each", STEP_COUNT, STEP_HOLD_TICKS);

    let gradient = Gradient::thermal();
    let mut dimmer = Dimmer::new();
    let mut ticks = SysTickSource::new();

    let mut index = 0;
    let mut held = 0u32;
    announce_step(index, &gradient);

    loop {
        ticks.wait_for_tick();

        held += 1;
        if held >= STEP_HOLD_TICKS {
            held = 0;
            index = (index + 1) % STEP_COUNT;
            announce_step(index, &gradient);
        }

        // Same dimming recipe the scheduler uses: blend line on for the
        // configured on-ticks out of each step's window
        let step = &gradient.steps()[index];
        let pattern = if dimmer.advance(DEFAULT_BLEND_ON_TICKS, step.blend_window) {
            step.dominant | step.blend
        } else {
            step.dominant
        };
        indicator.drive(pattern);
    }
}
