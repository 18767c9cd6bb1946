#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DrivePattern`**: On/off states for the indicator's three color lines
//! - **`ColorStep`**: One gradient entry: a dominant color, a blend color, and the blend's timing window
//! - **`Gradient`**: The fixed 20-step warm-to-cool palette, with a hand-tuned thermal default
//! - **`DriftMapper`**: Turns temperature drift into single-step palette moves
//! - **`Dimmer`**: Duty-cycles the blend color to fake intermediate shades on on/off hardware
//! - **`SampleChannel`**: Lock-free mailbox from the capture-complete interrupt to the loop
//! - **`Config`**: Validated tick timing (capture interval, blend-on duration)
//! - **`Scheduler`**: The per-tick control loop that ties everything together
//! - **`Indicator` / `TemperatureSensor` / `Button` / `TickSource`**: Traits to implement for your hardware
//!
//! The control loop works entirely in integer ticks and raw sensor units;
//! nothing on the hot path touches floating point. The [`colors`] helpers
//! convert patterns and steps to `Srgb<f32>` for previews and simulators.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod gradient;
pub mod mapper;
pub mod dimmer;
pub mod channel;
pub mod config;
pub mod hal;
pub mod scheduler;
pub mod colors;

pub use types::{ColorStep, DrivePattern};
pub use gradient::{Gradient, GradientBuilder, GradientError, NEUTRAL_STEP, STEP_COUNT};
pub use mapper::{DRIFT_DEAD_ZONE, DriftMapper, PaletteMove};
pub use dimmer::{BlendPhase, Dimmer};
pub use channel::SampleChannel;
pub use config::{Config, ConfigError, DEFAULT_BLEND_ON_TICKS, DEFAULT_CAPTURE_INTERVAL_TICKS};
pub use hal::{Button, Indicator, TemperatureSensor, TickSource};
pub use scheduler::{Scheduler, TickReport};
