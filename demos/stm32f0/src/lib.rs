#![no_std]

//! Board support glue for the STM32F072 demo binaries.
//!
//! These modules bridge the `thermo-glow` hardware traits to stm32f0xx-hal
//! pin types and the SysTick interrupt, so every binary in this package
//! shares the same indicator, button, and tick wiring.

pub mod button;
pub mod indicator;
pub mod tick;
