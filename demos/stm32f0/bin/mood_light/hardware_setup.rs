use cortex_m::peripheral::SYST;
use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Input, Output, PullUp, PushPull, gpioa, gpiob, gpioc},
    pac,
    prelude::*,
};

use stm32f0_demos::button::UserButton;
use stm32f0_demos::indicator::GpioIndicator;

/// Type alias for the mood lamp's three drive lines
pub type MoodLed = GpioIndicator<
    gpioa::PA6<Output<PushPull>>,
    gpioa::PA7<Output<PushPull>>,
    gpiob::PB0<Output<PushPull>>,
>;

/// Button type (user button on PC13)
pub type Button = UserButton<gpioc::PC13<Input<PullUp>>>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub indicator: MoodLed,
    pub button: Button,
}

/// Initialize all hardware peripherals
///
/// This function handles all hardware initialization in one place:
/// - System clock configuration
/// - SysTick timer setup (1ms ticks)
/// - GPIO port initialization
/// - RGB indicator line configuration
/// - Button configuration
/// - ADC calibration and interrupt setup
///
/// # Returns
/// A `HardwareContext` containing all initialized peripherals ready for use
pub fn init_hardware() -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    // Configure system clock and SysTick
    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    configure_systick(&rcc, &mut cp.SYST);

    // Split GPIO ports
    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    // Setup hardware components
    let indicator = setup_indicator(gpioa.pa6, gpioa.pa7, gpiob.pb0);
    let button = setup_button(gpioc.pc13);
    setup_adc(dp.ADC);

    HardwareContext { indicator, button }
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
/// The SysTick interrupt handler latches one pending base tick per
/// millisecond; the control loop consumes it through `SysTickSource`.
fn configure_systick(rcc: &stm32f0xx_hal::rcc::Rcc, syst: &mut SYST) {
    let sysclk_freq = rcc.clocks.sysclk();

    syst.set_clock_source(cortex_m::peripheral::syst::SystClkSource::Core);
    syst.set_reload((sysclk_freq.0 / 1_000) - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for 1ms interrupts");
}

/// Configure the RGB indicator lines as push-pull outputs
///
/// - Red: PA6
/// - Green: PA7
/// - Blue: PB0
///
/// # Returns
/// Configured `MoodLed` instance (common anode)
fn setup_indicator(
    pa6: gpioa::PA6<Input<stm32f0xx_hal::gpio::Floating>>,
    pa7: gpioa::PA7<Input<stm32f0xx_hal::gpio::Floating>>,
    pb0: gpiob::PB0<Input<stm32f0xx_hal::gpio::Floating>>,
) -> MoodLed {
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

/// Configure user button (PC13) with pull-up
fn setup_button(pc13: gpioc::PC13<Input<stm32f0xx_hal::gpio::Floating>>) -> Button {
    let button = cortex_m::interrupt::free(|cs| pc13.into_pull_up_input(cs));

    rprintln!("Button configured on PC13");
    UserButton::new(button)
}

/// Configure the ADC for interrupt-driven temperature captures
///
/// The HAL's Rcc wrapper owns APB2ENR after freeze, so the ADC clock is
/// enabled through the raw register block. Calibration must finish before
/// the ADC is enabled.
fn setup_adc(adc: pac::ADC) {
    unsafe { (*pac::RCC::ptr()).apb2enr.modify(|_, w| w.adcen().set_bit()) };

    // Self-calibrate, then enable and wait for readiness
    adc.cr.modify(|_, w| w.adcal().set_bit());
    while adc.cr.read().adcal().bit_is_set() {}

    adc.isr.write(|w| w.adrdy().set_bit());
    adc.cr.modify(|_, w| w.aden().set_bit());
    while adc.isr.read().adrdy().bit_is_clear() {}

    // Longest sample time (239.5 cycles); the temperature sensor needs
    // about 17us of it. Convert only channel 16, the internal sensor.
    adc.smpr.write(|w| unsafe { w.bits(0b111) });
    adc.chselr.write(|w| unsafe { w.bits(1 << 16) });

    // Wake the sensor and fire ADC_COMP at end of conversion
    adc.ccr.modify(|_, w| w.tsen().set_bit());
    adc.ier.modify(|_, w| w.eocie().set_bit());
    unsafe { pac::NVIC::unmask(pac::Interrupt::ADC_COMP) };

    rprintln!("ADC sampling the on-chip temperature sensor (channel 16)");
}
