// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::growth;
use crate::projection;
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let invest = growth::investment_from_args(sub);
    let contribution = growth::contribution_from_args(sub);
    // stdout only; results are never written to disk
    write_series_csv(
        std::io::stdout(),
        invest.time_period(),
        invest.return_rate(),
        contribution,
    )
}

pub fn write_series_csv<W: std::io::Write>(
    out: W,
    years: u32,
    annual_rate_percent: f64,
    monthly_contribution: f64,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["year", "contributed", "compounded_value"])?;
    for p in projection::series(years, annual_rate_percent, monthly_contribution) {
        wtr.write_record([
            p.year.to_string(),
            format!("{:.0}", p.contributed),
            format!("{:.0}", p.compounded_value),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
