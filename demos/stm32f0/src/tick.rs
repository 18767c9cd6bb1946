use core::cell::Cell;

use critical_section::Mutex;
use thermo_glow::TickSource;

/// Pending-tick flag set by the SysTick interrupt
///
/// The Cortex-M0 has no atomic swap, so a critical section guards the
/// flag instead. Ticks are latched, not counted: a slow loop pass
/// coalesces missed ticks rather than replaying them.
static TICK_PENDING: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Marks one base tick as elapsed.
///
/// This function should be called from the SysTick interrupt handler every 1ms.
/// It's marked as `pub` so it can be accessed from the interrupt handler in main.rs.
pub fn tick() {
    critical_section::with(|cs| {
        TICK_PENDING.borrow(cs).set(true);
    });
}

/// Tick source that paces the control loop off the SysTick interrupt
///
/// `wait_for_tick` sleeps the core with `wfi` until the next latched tick,
/// so the loop runs once per millisecond and idles in between.
pub struct SysTickSource;

impl SysTickSource {
    pub fn new() -> Self {
        Self
    }
}

impl TickSource for SysTickSource {
    fn wait_for_tick(&mut self) {
        loop {
            let elapsed = critical_section::with(|cs| {
                let pending = TICK_PENDING.borrow(cs);
                let value = pending.get();
                pending.set(false);
                value
            });

            if elapsed {
                return;
            }

            cortex_m::asm::wfi();
        }
    }
}
