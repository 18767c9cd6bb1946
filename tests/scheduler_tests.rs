//! Integration tests for the control loop

mod common;
use common::*;

use core::cell::Cell;
use thermo_glow::{
    Config, DrivePattern, Gradient, NEUTRAL_STEP, PaletteMove, SampleChannel, Scheduler,
    STEP_COUNT,
};

#[test]
fn sampling_windows_walk_the_palette() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::new(3, 1).unwrap(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::new(&channel, &requests, &[100, 102, 102, 99]),
        MockIndicator::new(&driven),
        100,
    );

    let reports = run_ticks(&mut scheduler, 12);

    // captures land on every third tick and the conversion is consumed
    // within the same tick
    for (i, report) in reports.iter().enumerate() {
        let window_end = (i + 1) % 3 == 0;
        assert_eq!(report.capture_requested, window_end);
        assert_eq!(report.palette_move.is_some(), window_end);
    }

    assert_eq!(reports[2].palette_move, Some(PaletteMove::Held));
    assert_eq!(reports[5].palette_move, Some(PaletteMove::Warmer));
    assert_eq!(reports[8].palette_move, Some(PaletteMove::Held));
    assert_eq!(reports[11].palette_move, Some(PaletteMove::Cooler));

    assert_eq!(requests.get(), 4);
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP);
    assert_eq!(scheduler.reference(), 99);
    assert_eq!(scheduler.last_sample(), 99);
}

#[test]
fn capture_cadence_is_exact() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::new(5, 1).unwrap(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::silent(&channel, &requests),
        MockIndicator::new(&driven),
        340,
    );

    let reports = run_ticks(&mut scheduler, 25);

    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.capture_requested, (i + 1) % 5 == 0);
    }
    assert_eq!(requests.get(), 5);
}

#[test]
fn button_recenters_end_to_end() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::new(2, 1).unwrap(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::new(&channel, &requests, &[190, 180, 170]),
        MockIndicator::new(&driven),
        200,
    );

    run_ticks(&mut scheduler, 6);
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP + 3);
    assert_eq!(scheduler.reference(), 170);

    pressed.set(true);
    let report = scheduler.tick();

    assert!(report.rebaselined);
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP);
    assert_eq!(scheduler.reference(), 170);
    assert_eq!(report.pattern, DrivePattern::GREEN);
    assert_eq!(driven.get(), Some(DrivePattern::GREEN));
}

#[test]
fn button_recenters_from_a_warm_excursion() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::new(1, 1).unwrap(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::new(&channel, &requests, &[42, 44, 46, 48, 50]),
        MockIndicator::new(&driven),
        40,
    );

    // five warmer moves carry the index deep into the red band
    run_ticks(&mut scheduler, 5);
    assert_eq!(scheduler.palette_index(), 3);
    assert_eq!(scheduler.last_sample(), 50);

    pressed.set(true);
    let report = scheduler.tick();

    assert!(report.rebaselined);
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP);
    assert_eq!(scheduler.reference(), 50);
}

#[test]
fn faint_blend_duty_measured_over_100_ticks() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::default(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::silent(&channel, &requests),
        MockIndicator::new(&driven),
        340,
    );

    // one warmer move lands on the faint green-red blend (window of nine)
    channel.deliver(345);
    scheduler.tick();
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP - 1);

    let reports = run_ticks(&mut scheduler, 100);
    let blend = DrivePattern::GREEN.union(DrivePattern::RED);

    assert_eq!(count_pattern(&reports, blend), 10);
    assert_eq!(count_pattern(&reports, DrivePattern::GREEN), 90);
}

#[test]
fn mid_window_delivery_is_consumed_immediately() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let mut scheduler = Scheduler::new(
        Config::default(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::silent(&channel, &requests),
        MockIndicator::new(&driven),
        340,
    );

    let reports = run_ticks(&mut scheduler, 3);
    assert!(reports.iter().all(|report| report.palette_move.is_none()));

    // a delivery between capture windows still reaches the mapper on the
    // next tick; draining is not tied to the capture cadence
    channel.deliver(500);
    let report = scheduler.tick();

    assert!(!report.capture_requested);
    assert_eq!(report.palette_move, Some(PaletteMove::Warmer));
    assert_eq!(scheduler.palette_index(), NEUTRAL_STEP - 1);
}

#[test]
fn cool_extreme_pins_and_unpins() {
    let pressed = Cell::new(false);
    let requests = Cell::new(0);
    let driven = Cell::new(None);
    let channel = SampleChannel::new();

    let script: Vec<i16> = (1i16..=12).map(|i| i * -5).collect();
    let mut scheduler = Scheduler::new(
        Config::new(1, 1).unwrap(),
        Gradient::thermal(),
        &channel,
        MockButton::new(&pressed),
        MockSensor::new(&channel, &requests, &script),
        MockIndicator::new(&driven),
        0,
    );

    let reports = run_ticks(&mut scheduler, 12);

    // eleven moves reach the cool end; the twelfth still reads cooler but
    // the index stays pinned while the reference keeps following
    assert!(
        reports
            .iter()
            .all(|report| report.palette_move == Some(PaletteMove::Cooler))
    );
    assert_eq!(scheduler.palette_index(), STEP_COUNT - 1);
    assert_eq!(scheduler.reference(), -60);

    channel.deliver(-50);
    scheduler.tick();
    assert_eq!(scheduler.palette_index(), STEP_COUNT - 2);
    assert_eq!(scheduler.reference(), -50);
}

#[test]
fn drift_is_relative_not_absolute() {
    for seed in [100i16, 1000, -400] {
        let pressed = Cell::new(false);
        let requests = Cell::new(0);
        let driven = Cell::new(None);
        let channel = SampleChannel::new();

        let mut scheduler = Scheduler::new(
            Config::default(),
            Gradient::thermal(),
            &channel,
            MockButton::new(&pressed),
            MockSensor::silent(&channel, &requests),
            MockIndicator::new(&driven),
            seed,
        );

        // the same relative drift moves the palette the same way at any
        // absolute level
        channel.deliver(seed + 3);
        let report = scheduler.tick();

        assert_eq!(report.palette_move, Some(PaletteMove::Warmer));
        assert_eq!(scheduler.palette_index(), NEUTRAL_STEP - 1);
    }
}
