// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_theme, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) File-level corruption
    let check: String = conn.query_row("PRAGMA integrity_check", [], |r| r.get(0))?;
    if check != "ok" {
        rows.push(vec!["integrity_check".into(), check]);
    }

    // 2) Settings keys this version does not know about
    let mut stmt = conn.prepare("SELECT key FROM settings WHERE key NOT IN ('theme')")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let k: String = r.get(0)?;
        rows.push(vec!["unknown_setting".into(), k]);
    }

    // 3) Theme value outside dark|light
    let theme = get_theme(conn)?;
    if theme != "dark" && theme != "light" {
        rows.push(vec!["invalid_theme".into(), theme]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
