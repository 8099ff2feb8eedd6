// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use groseri::{cli, commands, dataset};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let data_dir = matches.get_one::<String>("data").map(PathBuf::from);
    let ds = dataset::load(data_dir.as_deref());
    for warning in &ds.warnings {
        eprintln!("warning: {warning}");
    }

    match matches.subcommand() {
        Some(("summary", sub)) => commands::summary::handle(&ds, sub)?,
        Some(("trend", sub)) => commands::trend::handle(&ds, sub)?,
        Some(("sales", sub)) => commands::sales::handle(&ds, sub)?,
        Some(("expiry", sub)) => commands::expiry::handle(&ds, sub)?,
        Some(("pricing", sub)) => commands::pricing::handle(&ds, sub)?,
        Some(("promo", sub)) => commands::promo::handle(&ds, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ds, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
