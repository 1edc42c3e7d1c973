// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Parse user-supplied currency/percent text. Anything that is not a finite
/// number resolves to 0 rather than an error; range clamping is the
/// calculator's job, not the parser's.
pub fn parse_amount(s: &str) -> f64 {
    s.trim()
        .parse::<Decimal>()
        .ok()
        .and_then(|d| d.to_f64())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Negative or non-finite amounts collapse to 0.
pub fn clamp_amount(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Clamp to [0, 100]; non-finite values collapse to 0.
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

pub fn fmt_money(v: f64) -> String {
    format!("{:.2}", v)
}

/// Whole-unit display for the already-rounded projection figures.
pub fn fmt_whole(v: f64) -> String {
    format!("{:.0}", v)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

// Theme preference: the single setting that survives between runs.
pub fn get_theme(conn: &Connection) -> Result<String> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key='theme'", [], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v.unwrap_or_else(|| "light".to_string()))
}

pub fn set_theme(conn: &Connection, theme: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('theme', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![theme],
    )?;
    Ok(())
}
