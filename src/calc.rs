// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CalculatorInputs, InterestBreakdown};
use crate::utils::{clamp_amount, clamp_percent};

/// Keeps the percentage and absolute-dollar views of "amount paid off"
/// consistent, anchored to the monthly spend. The percentage is the canonical
/// representation; dollar edits are resolved back into it, so every derived
/// figure can be recomputed from the (spend, percent, apr) triple alone.
#[derive(Debug, Clone, Copy)]
pub struct PayoffCalculator {
    monthly_spend: f64,
    paid_off_percent: f64,
    apr: f64,
}

impl PayoffCalculator {
    pub fn new(inputs: &CalculatorInputs) -> Self {
        Self {
            monthly_spend: clamp_amount(inputs.monthly_spend),
            paid_off_percent: clamp_percent(inputs.paid_off_percent),
            apr: clamp_amount(inputs.apr),
        }
    }

    pub fn monthly_spend(&self) -> f64 {
        self.monthly_spend
    }

    pub fn paid_off_percent(&self) -> f64 {
        self.paid_off_percent
    }

    pub fn apr(&self) -> f64 {
        self.apr
    }

    /// The percentage carries over unchanged, so the paid-off dollar figure
    /// scales with the new spend.
    pub fn set_monthly_spend(&mut self, value: f64) {
        self.monthly_spend = clamp_amount(value);
    }

    pub fn set_paid_off_percent(&mut self, value: f64) {
        self.paid_off_percent = clamp_percent(value);
    }

    /// Resolves a dollar edit back into the canonical percentage. With zero
    /// spend there is no meaningful ratio, so the edit collapses to 0%
    /// instead of dividing by zero.
    pub fn set_paid_off_dollars(&mut self, value: f64) {
        let value = clamp_amount(value);
        self.paid_off_percent = if self.monthly_spend > 0.0 {
            clamp_percent((value / self.monthly_spend * 100.0).round())
        } else {
            0.0
        };
    }

    pub fn set_apr(&mut self, value: f64) {
        self.apr = clamp_amount(value);
    }

    pub fn paid_off_balance(&self) -> f64 {
        self.monthly_spend * self.paid_off_percent / 100.0
    }

    pub fn carried_balance(&self) -> f64 {
        self.monthly_spend - self.paid_off_balance()
    }

    pub fn annual_interest(&self) -> f64 {
        self.carried_balance() * self.apr / 100.0
    }

    pub fn monthly_savings(&self) -> f64 {
        self.annual_interest() / 12.0
    }

    /// Linear headline figure: what paying in full saves over the horizon.
    /// Computed from the unrounded monthly savings, on a separate path from
    /// the projection series totals; the two may differ by small rounding
    /// amounts and that is kept as observed.
    pub fn total_interest_saved(&self, years: u32) -> f64 {
        (self.monthly_savings() * 12.0 * f64::from(years)).round()
    }

    pub fn breakdown(&self) -> InterestBreakdown {
        InterestBreakdown {
            monthly_spend: self.monthly_spend,
            paid_off_percent: self.paid_off_percent,
            apr: self.apr,
            paid_off_balance: self.paid_off_balance(),
            carried_balance: self.carried_balance(),
            annual_interest: self.annual_interest(),
            monthly_savings: self.monthly_savings(),
        }
    }
}
