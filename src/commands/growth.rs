// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::interest;
use crate::models::{InvestmentInputs, ProjectionPoint};
use crate::projection;
use crate::utils::{clamp_amount, fmt_money, fmt_whole, maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct GrowthSummary {
    monthly_contribution: f64,
    years: u32,
    return_rate: f64,
    total_contributed: f64,
    compounded_value: f64,
    total_gains: f64,
    total_interest_saved: f64,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let show_series = sub.get_flag("series");

    let invest = investment_from_args(sub);
    let years = invest.time_period();
    let rate = invest.return_rate();
    let contribution = contribution_from_args(sub);

    // The headline saved-interest figure stays on its own linear path; it is
    // not reconciled with the series totals.
    let interest_saved = match sub.get_one::<String>("contribution") {
        Some(_) => (contribution * 12.0 * f64::from(years)).round(),
        None => interest::calculator_from_args(sub).total_interest_saved(years),
    };

    if show_series {
        let points: Vec<ProjectionPoint> = projection::series(years, rate, contribution).collect();
        if !maybe_print_json(json_flag, jsonl_flag, &points)? {
            let rows = points
                .iter()
                .map(|p| {
                    vec![
                        p.year.to_string(),
                        fmt_whole(p.contributed),
                        fmt_whole(p.compounded_value),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Year", "Contributed", "Value"], rows));
        }
        return Ok(());
    }

    let summary = GrowthSummary {
        monthly_contribution: contribution,
        years,
        return_rate: rate,
        total_contributed: projection::contributed(years, contribution),
        compounded_value: projection::final_value(years, rate, contribution),
        total_gains: projection::total_gains(years, rate, contribution),
        total_interest_saved: interest_saved,
    };

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec![
                "Monthly contribution".into(),
                fmt_money(summary.monthly_contribution),
            ],
            vec![
                format!("Contributed over {} years", summary.years),
                fmt_whole(summary.total_contributed),
            ],
            vec![
                format!("Value at {:.2}% return", summary.return_rate),
                fmt_whole(summary.compounded_value),
            ],
            vec!["Investment gains".into(), fmt_whole(summary.total_gains)],
            vec![
                "Interest saved (linear)".into(),
                fmt_whole(summary.total_interest_saved),
            ],
        ];
        println!("{}", pretty_table(&["Figure", "Amount"], rows));
    }
    Ok(())
}

pub(crate) fn investment_from_args(sub: &clap::ArgMatches) -> InvestmentInputs {
    InvestmentInputs {
        time_period: sub.get_one::<u32>("years").copied(),
        return_rate: sub
            .get_one::<String>("rate")
            .map(|s| clamp_amount(parse_amount(s))),
    }
}

/// An explicit `--contribution` wins; otherwise the contribution is the
/// monthly interest the card math says paying in full would save.
pub(crate) fn contribution_from_args(sub: &clap::ArgMatches) -> f64 {
    match sub.get_one::<String>("contribution") {
        Some(c) => clamp_amount(parse_amount(c)),
        None => interest::calculator_from_args(sub).monthly_savings(),
    }
}
