// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cardclip::models::ProjectionPoint;
use cardclip::projection::{contributed, final_value, series, total_gains};

#[test]
fn zero_rate_is_linear_accumulation() {
    assert_eq!(final_value(10, 0.0, 500.0), 60000.0);
    for years in [0_u32, 1, 7, 40] {
        assert_eq!(final_value(years, 0.0, 25.0), 25.0 * 12.0 * years as f64);
    }
}

#[test]
fn zero_horizon_is_zero() {
    for rate in [0.0, 4.5, 9.0] {
        assert_eq!(final_value(0, rate, 500.0), 0.0);
    }
}

#[test]
fn ten_years_at_nine_percent() {
    // $500/month, 9% compounded monthly
    assert_eq!(contributed(10, 500.0), 60000.0);
    assert_eq!(final_value(10, 9.0, 500.0), 96757.0);
    assert_eq!(total_gains(10, 9.0, 500.0), 36757.0);
}

#[test]
fn series_shape_and_monotonicity() {
    let pts: Vec<ProjectionPoint> = series(10, 9.0, 500.0).collect();
    assert_eq!(pts.len(), 11);
    assert_eq!(pts[0].year, 0);
    assert_eq!(pts[0].contributed, 0.0);
    assert_eq!(pts[0].compounded_value, 0.0);
    for w in pts.windows(2) {
        assert_eq!(w[1].year, w[0].year + 1);
        assert!(w[1].contributed >= w[0].contributed);
        assert!(w[1].compounded_value >= w[0].compounded_value);
    }
    assert_eq!(pts[1].compounded_value, 6254.0);
    assert_eq!(pts[10].contributed, 60000.0);
    assert_eq!(pts[10].compounded_value, 96757.0);
}

#[test]
fn series_is_restartable() {
    let first: Vec<ProjectionPoint> = series(5, 9.0, 100.0).collect();
    let second: Vec<ProjectionPoint> = series(5, 9.0, 100.0).collect();
    assert_eq!(first, second);
}

#[test]
fn value_never_falls_below_contributions() {
    for rate in [0.0, 1.0, 4.5, 9.0, 12.0] {
        for years in [1_u32, 5, 10, 30] {
            assert!(final_value(years, rate, 250.0) >= contributed(years, 250.0));
        }
    }
}

#[test]
fn extreme_horizon_does_not_panic() {
    // month count stays in f64, so even absurd year counts evaluate
    let v = final_value(400_000_000, 9.0, 1.0);
    assert!(v >= 0.0);
    assert_eq!(final_value(400_000_000, 0.0, 0.0), 0.0);
}

#[test]
fn card_savings_feed_the_projection() {
    // monthly savings from the worked example: 230 / 12
    let m = 230.0 / 12.0;
    assert_eq!(final_value(5, 9.0, m), 1446.0);
    assert_eq!(final_value(10, 9.0, m), 3709.0);
    assert_eq!(contributed(10, m), 2300.0);
}
