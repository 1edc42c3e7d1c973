// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::PayoffCalculator;
use crate::models::CalculatorInputs;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let calc = calculator_from_args(sub);
    let b = calc.breakdown();

    if !maybe_print_json(json_flag, jsonl_flag, &b)? {
        let rows = vec![
            vec!["Monthly spend".into(), fmt_money(b.monthly_spend)],
            vec![
                format!("Paid off ({:.0}%)", b.paid_off_percent),
                fmt_money(b.paid_off_balance),
            ],
            vec!["Carried balance".into(), fmt_money(b.carried_balance)],
            vec![
                format!("Annual interest at {:.2}% APR", b.apr),
                fmt_money(b.annual_interest),
            ],
            vec![
                "Monthly savings if paid in full".into(),
                fmt_money(b.monthly_savings),
            ],
        ];
        println!("{}", pretty_table(&["Figure", "Amount"], rows));
    }
    Ok(())
}

/// Builds the calculator from the shared `--spend/--paid-off-percent/--apr`
/// args. A `--paid-off` dollar amount is applied last so it resolves through
/// the dollar-to-percent path.
pub(crate) fn calculator_from_args(sub: &clap::ArgMatches) -> PayoffCalculator {
    let inputs = CalculatorInputs {
        monthly_spend: sub
            .get_one::<String>("spend")
            .map(|s| parse_amount(s))
            .unwrap_or(0.0),
        paid_off_percent: sub
            .get_one::<String>("paid-off-percent")
            .map(|s| parse_amount(s))
            .unwrap_or(0.0),
        apr: sub
            .get_one::<String>("apr")
            .map(|s| parse_amount(s))
            .unwrap_or(0.0),
    };
    let mut calc = PayoffCalculator::new(&inputs);
    if let Some(dollars) = sub.get_one::<String>("paid-off") {
        calc.set_paid_off_dollars(parse_amount(dollars));
    }
    calc
}
