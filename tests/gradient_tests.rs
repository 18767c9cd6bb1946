//! Integration tests for gradient construction and tuning

mod common;
use common::*;

use core::cell::Cell;
use thermo_glow::{
    ColorStep, Config, DrivePattern, Gradient, GradientError, NEUTRAL_STEP, SampleChannel,
    Scheduler, STEP_COUNT,
};

#[test]
fn thermal_covers_the_whole_sweep() {
    let gradient = Gradient::thermal();

    assert_eq!(*gradient.get(0).unwrap(), ColorStep::solid(DrivePattern::RED));
    assert_eq!(
        *gradient.get(4).unwrap(),
        ColorStep::solid(DrivePattern::YELLOW)
    );
    assert_eq!(
        *gradient.get(NEUTRAL_STEP).unwrap(),
        ColorStep::solid(DrivePattern::GREEN)
    );
    assert_eq!(
        *gradient.get(12).unwrap(),
        ColorStep::solid(DrivePattern::CYAN)
    );
    assert_eq!(
        *gradient.get(16).unwrap(),
        ColorStep::solid(DrivePattern::BLUE)
    );

    // past pure blue the cool end shades toward violet
    let coolest = gradient.get(STEP_COUNT - 1).unwrap();
    assert_eq!(coolest.dominant, DrivePattern::BLUE);
    assert_eq!(coolest.blend, DrivePattern::RED);
}

#[test]
fn thermal_blends_never_overlap_their_dominant() {
    for step in Gradient::thermal().steps() {
        assert_eq!(step.dominant.bits() & step.blend.bits(), 0);
    }
}

#[test]
fn builder_round_trips_the_thermal_tuning() {
    let reference = Gradient::thermal();

    let mut builder = Gradient::builder();
    for step in reference.steps() {
        builder = builder.step(*step).unwrap();
    }

    assert_eq!(builder.build().unwrap(), reference);
}

#[test]
fn builder_reports_missing_steps() {
    let mut builder = Gradient::builder();
    for _ in 0..5 {
        builder = builder.step(ColorStep::solid(DrivePattern::RED)).unwrap();
    }

    assert_eq!(
        builder.build(),
        Err(GradientError::StepCount {
            expected: STEP_COUNT,
            found: 5
        })
    );
}

#[test]
fn builder_rejects_a_twenty_first_step() {
    let mut builder = Gradient::builder();
    for _ in 0..STEP_COUNT {
        builder = builder.step(ColorStep::solid(DrivePattern::BLUE)).unwrap();
    }

    assert_eq!(
        builder.step(ColorStep::solid(DrivePattern::BLUE)).err(),
        Some(GradientError::CapacityExceeded)
    );
}

#[test]
fn custom_tuning_drives_through_the_loop() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut builder = Gradient::builder();
    for _ in 0..STEP_COUNT {
        builder = builder.step(ColorStep::solid(DrivePattern::WHITE)).unwrap();
    }
    let all_white = builder.build().unwrap();

    let mut scheduler = Scheduler::new(
        Config::new(2, 1).unwrap(),
        all_white,
        &channel,
        MockButton::new(&pressed),
        MockSensor::new(&channel, &requests, &[110, 120, 130, 90]),
        MockIndicator::new(&driven),
        100,
    );

    // the palette moves underneath, but every step of this tuning renders
    // the same solid pattern
    let reports = run_ticks(&mut scheduler, 8);
    assert_ne!(scheduler.palette_index(), NEUTRAL_STEP);
    assert_eq!(count_pattern(&reports, DrivePattern::WHITE), 8);
}
