// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cardclip::calc::PayoffCalculator;
use cardclip::models::CalculatorInputs;

fn calc(spend: f64, percent: f64, apr: f64) -> PayoffCalculator {
    PayoffCalculator::new(&CalculatorInputs {
        monthly_spend: spend,
        paid_off_percent: percent,
        apr,
    })
}

#[test]
fn worked_example_breakdown() {
    // $2000 spend, half paid off, 23% APR
    let c = calc(2000.0, 50.0, 23.0);
    assert_eq!(c.paid_off_balance(), 1000.0);
    assert_eq!(c.carried_balance(), 1000.0);
    assert_eq!(c.annual_interest(), 230.0);
    assert!((c.monthly_savings() - 230.0 / 12.0).abs() < 1e-9);
}

#[test]
fn dollar_edit_resolves_to_rounded_percent() {
    for pct in [0_u32, 1, 25, 33, 50, 99, 100] {
        let mut c = calc(2000.0, 0.0, 23.0);
        c.set_paid_off_dollars(2000.0 * pct as f64 / 100.0);
        assert_eq!(c.paid_off_percent(), pct as f64);
    }
}

#[test]
fn dollar_edit_round_trips_within_rounding() {
    let mut c = calc(1850.0, 0.0, 20.0);
    c.set_paid_off_dollars(925.0);
    // percent resolution rounds to whole percents, so allow half a percent
    // of spend either way
    assert!((c.paid_off_balance() - 925.0).abs() <= 1850.0 / 200.0);
}

#[test]
fn zero_spend_collapses_dollar_edit_to_zero() {
    for dollars in [0.0, 1.0, 500.0, 1e9] {
        let mut c = calc(0.0, 80.0, 23.0);
        c.set_paid_off_dollars(dollars);
        assert_eq!(c.paid_off_percent(), 0.0);
        assert_eq!(c.paid_off_balance(), 0.0);
    }
}

#[test]
fn dollar_edit_above_spend_caps_at_hundred() {
    let mut c = calc(1000.0, 0.0, 20.0);
    c.set_paid_off_dollars(2500.0);
    assert_eq!(c.paid_off_percent(), 100.0);
    assert_eq!(c.carried_balance(), 0.0);
}

#[test]
fn spend_edit_keeps_the_percentage() {
    let mut c = calc(2000.0, 50.0, 23.0);
    c.set_monthly_spend(3000.0);
    assert_eq!(c.paid_off_percent(), 50.0);
    assert_eq!(c.paid_off_balance(), 1500.0);
}

#[test]
fn constructor_clamps_out_of_range_inputs() {
    let c = calc(-100.0, 150.0, -5.0);
    assert_eq!(c.monthly_spend(), 0.0);
    assert_eq!(c.paid_off_percent(), 100.0);
    assert_eq!(c.apr(), 0.0);
}

#[test]
fn setters_clamp_out_of_range_inputs() {
    let mut c = calc(2000.0, 50.0, 23.0);
    c.set_paid_off_percent(-10.0);
    assert_eq!(c.paid_off_percent(), 0.0);
    c.set_paid_off_percent(250.0);
    assert_eq!(c.paid_off_percent(), 100.0);
    c.set_monthly_spend(f64::NAN);
    assert_eq!(c.monthly_spend(), 0.0);
    c.set_apr(-1.0);
    assert_eq!(c.apr(), 0.0);
}

#[test]
fn fully_paid_off_accrues_no_interest() {
    let c = calc(2500.0, 100.0, 29.0);
    assert_eq!(c.carried_balance(), 0.0);
    assert_eq!(c.annual_interest(), 0.0);
    assert_eq!(c.monthly_savings(), 0.0);
}

#[test]
fn linear_interest_saved_over_horizon() {
    let c = calc(2000.0, 50.0, 23.0);
    assert_eq!(c.total_interest_saved(10), 2300.0);
    assert_eq!(c.total_interest_saved(0), 0.0);
}
