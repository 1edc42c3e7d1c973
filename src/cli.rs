// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn calculator_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("spend")
            .long("spend")
            .value_name("AMOUNT")
            .help("Monthly card spend"),
    )
    .arg(
        Arg::new("paid-off-percent")
            .long("paid-off-percent")
            .value_name("PCT")
            .help("Share of spend paid in full, 0-100"),
    )
    .arg(
        Arg::new("paid-off")
            .long("paid-off")
            .value_name("AMOUNT")
            .help("Amount paid in full, in dollars (overrides --paid-off-percent)"),
    )
    .arg(
        Arg::new("apr")
            .long("apr")
            .value_name("PCT")
            .help("Card APR, percent"),
    )
}

fn projection_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("contribution")
            .long("contribution")
            .value_name("AMOUNT")
            .help("Monthly contribution (skips the card math)"),
    )
    .arg(
        Arg::new("years")
            .long("years")
            .value_name("N")
            .value_parser(value_parser!(u32).range(1..=1000))
            .help("Investment horizon in years, up to 1000 (default 10)"),
    )
    .arg(
        Arg::new("rate")
            .long("rate")
            .value_name("PCT")
            .help("Annual return rate, percent (default 9)"),
    )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("cardclip")
        .about("Credit-card payoff what-if and investment projection")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Create the settings database"))
        .subcommand(json_flags(calculator_args(
            Command::new("interest").about("Interest avoided by paying the card in full"),
        )))
        .subcommand(json_flags(projection_args(calculator_args(
            Command::new("growth")
                .about("Compound growth of the avoided interest")
                .arg(
                    Arg::new("series")
                        .long("series")
                        .action(ArgAction::SetTrue)
                        .help("Show the year-by-year table"),
                ),
        ))))
        .subcommand(projection_args(calculator_args(
            Command::new("export").about("Projection series as CSV on stdout"),
        )))
        .subcommand(
            Command::new("theme")
                .about("Show or set the persisted theme preference")
                .subcommand(Command::new("show").about("Print the current theme"))
                .subcommand(
                    Command::new("set").about("Set the theme").arg(
                        Arg::new("value")
                            .required(true)
                            .value_parser(["dark", "light"])
                            .help("dark or light"),
                    ),
                ),
        )
        .subcommand(Command::new("doctor").about("Check the settings database"))
}
