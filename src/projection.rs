// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProjectionPoint;

/// Future value of an ordinary annuity: equal monthly contributions
/// compounding monthly over `years`. Rounded to whole currency units at the
/// point of computation, half away from zero.
pub fn final_value(years: u32, annual_rate_percent: f64, monthly_contribution: f64) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    // Months are counted in f64 so oversized horizons cannot overflow.
    let total_months = f64::from(years) * 12.0;
    if monthly_rate == 0.0 {
        // The annuity formula divides by the rate; at 0% growth the total is
        // just the sum of contributions.
        return (monthly_contribution * total_months).round();
    }
    let growth = ((1.0 + monthly_rate).powf(total_months) - 1.0) / monthly_rate;
    (monthly_contribution * growth).round()
}

/// Dollars put in through the end of `year`, rounded like every other
/// currency output.
pub fn contributed(year: u32, monthly_contribution: f64) -> f64 {
    (monthly_contribution * 12.0 * f64::from(year)).round()
}

/// Year-by-year projection from year 0 through `max_years` inclusive. Lazy
/// and restartable: each call yields a fresh pass over the same points.
pub fn series(
    max_years: u32,
    annual_rate_percent: f64,
    monthly_contribution: f64,
) -> impl Iterator<Item = ProjectionPoint> {
    (0..=max_years).map(move |year| ProjectionPoint {
        year,
        contributed: contributed(year, monthly_contribution),
        compounded_value: final_value(year, annual_rate_percent, monthly_contribution),
    })
}

/// Growth over and above the contributions themselves.
pub fn total_gains(max_years: u32, annual_rate_percent: f64, monthly_contribution: f64) -> f64 {
    final_value(max_years, annual_rate_percent, monthly_contribution)
        - contributed(max_years, monthly_contribution)
}
