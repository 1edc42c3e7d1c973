// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_PERIOD_YEARS: u32 = 10;
pub const DEFAULT_RETURN_RATE_PERCENT: f64 = 9.0;

/// Raw calculator state as supplied by the caller, before clamping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub monthly_spend: f64,
    /// Share of the monthly spend paid in full each month, 0-100.
    pub paid_off_percent: f64,
    pub apr: f64,
}

/// Investment horizon and return rate. `None` means "unset, use default".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub time_period: Option<u32>,
    pub return_rate: Option<f64>,
}

impl InvestmentInputs {
    pub fn time_period(&self) -> u32 {
        self.time_period.unwrap_or(DEFAULT_TIME_PERIOD_YEARS)
    }

    pub fn return_rate(&self) -> f64 {
        self.return_rate.unwrap_or(DEFAULT_RETURN_RATE_PERCENT)
    }
}

/// One row of the year-by-year projection. Currency fields are already
/// rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub contributed: f64,
    pub compounded_value: f64,
}

/// Snapshot of the calculator plus every derived scalar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InterestBreakdown {
    pub monthly_spend: f64,
    pub paid_off_percent: f64,
    pub apr: f64,
    pub paid_off_balance: f64,
    pub carried_balance: f64,
    pub annual_interest: f64,
    pub monthly_savings: f64,
}
