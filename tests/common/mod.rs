//! Shared test infrastructure for thermo-glow integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use thermo_glow::{
    Button, DrivePattern, Indicator, SampleChannel, Scheduler, TemperatureSensor, TickReport,
};

// ============================================================================
// Mock Button
// ============================================================================

/// Mock button whose level is controlled through a shared cell
pub struct MockButton<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockButton<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl Button for MockButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Mock Sensor
// ============================================================================

/// Mock sensor that completes each requested conversion within the tick,
/// delivering the next scripted sample straight into the channel
pub struct MockSensor<'a> {
    channel: &'a SampleChannel,
    script: heapless::Vec<i16, 64>,
    requests: &'a Cell<usize>,
}

impl<'a> MockSensor<'a> {
    pub fn new(channel: &'a SampleChannel, requests: &'a Cell<usize>, script: &[i16]) -> Self {
        let mut samples = heapless::Vec::new();
        for &sample in script {
            samples.push(sample).unwrap();
        }

        Self {
            channel,
            script: samples,
            requests,
        }
    }

    /// Sensor with no scripted samples; requests are counted but never answered
    pub fn silent(channel: &'a SampleChannel, requests: &'a Cell<usize>) -> Self {
        Self::new(channel, requests, &[])
    }
}

impl TemperatureSensor for MockSensor<'_> {
    fn request_capture(&mut self) {
        let served = self.requests.get();
        self.requests.set(served + 1);

        if let Some(&sample) = self.script.get(served) {
            self.channel.deliver(sample);
        }
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock indicator that mirrors the most recent pattern into a shared cell
pub struct MockIndicator<'a> {
    driven: &'a Cell<Option<DrivePattern>>,
}

impl<'a> MockIndicator<'a> {
    pub fn new(driven: &'a Cell<Option<DrivePattern>>) -> Self {
        Self { driven }
    }
}

impl Indicator for MockIndicator<'_> {
    fn drive(&mut self, pattern: DrivePattern) {
        self.driven.set(Some(pattern));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Advance the scheduler and collect one report per tick
pub fn run_ticks<B: Button, S: TemperatureSensor, I: Indicator>(
    scheduler: &mut Scheduler<'_, B, S, I>,
    ticks: usize,
) -> Vec<TickReport> {
    (0..ticks).map(|_| scheduler.tick()).collect()
}

/// Count how many reports drove the given pattern
pub fn count_pattern(reports: &[TickReport], pattern: DrivePattern) -> usize {
    reports
        .iter()
        .filter(|report| report.pattern == pattern)
        .count()
}
