// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_theme, set_theme};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let value = sub.get_one::<String>("value").unwrap();
            set_theme(conn, value)?;
            println!("Theme set to {}", value);
        }
        // bare `theme` behaves like `theme show`
        _ => println!("{}", get_theme(conn)?),
    }
    Ok(())
}
