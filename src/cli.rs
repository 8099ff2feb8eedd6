// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("groseri")
        .version(crate_version!())
        .about("Sales, margin, promo and expiry KPI reporting for a grocery store")
        .arg(
            Arg::new("data")
                .long("data")
                .global(true)
                .value_name("DIR")
                .help(
                    "Directory holding the sheet CSVs (Sales Data, Expiry Data, Pricing Data, \
                     Promo Data); absent sheets fall back to sample data",
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("KPI cards: attainment, sales, margin, ROI, stock, expiry risk")
                .arg(arg_as_of())
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("trend")
                .about("Monthly sales totals per product")
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("sales")
                .about("Sales detail with trend vs June")
                .arg(
                    Arg::new("low-stock-only")
                        .long("low-stock-only")
                        .action(ArgAction::SetTrue)
                        .help("Show only rows at or below the low-stock cutoff"),
                )
                .arg(
                    Arg::new("cutoff")
                        .long("cutoff")
                        .value_name("UNITS")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("50")
                        .help("Low-stock cutoff on remaining stock"),
                )
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("expiry")
                .about("Expiry lots with days to expiry and status")
                .arg(arg_as_of())
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("pricing")
                .about("Purchase and sale prices with margin")
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("promo")
                .about("Promotion target vs actual with ROI")
                .arg(arg_json())
                .arg(arg_jsonl()),
        )
        .subcommand(
            Command::new("export")
                .about("Write processed tables as CSV")
                .subcommand(
                    Command::new("sales")
                        .about("Export processed sales data")
                        .arg(arg_out()),
                )
                .subcommand(
                    Command::new("expiry")
                        .about("Export expiry data with days to expiry and status")
                        .arg(arg_out())
                        .arg(arg_as_of()),
                ),
        )
}

fn arg_json() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn arg_jsonl() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

fn arg_as_of() -> Arg {
    Arg::new("as-of")
        .long("as-of")
        .value_name("YYYY-MM-DD")
        .help("Reference date for expiry computations (defaults to today, UTC)")
}

fn arg_out() -> Arg {
    Arg::new("out")
        .long("out")
        .value_name("PATH")
        .required(true)
        .help("Output CSV path")
}
