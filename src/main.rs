// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! Runs the dictionary attack with and without map_to_curve and reports the
//! outcome of each.

use std::io::Write;
use std::process;

use cpace_map_to_curve::rand_core::OsRng;
use cpace_map_to_curve::{MappingStrategy, Ristretto255, Scenario, Verdict};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let scenario = Scenario::default();
    let mut rng = OsRng;

    for mapping in MappingStrategy::ALL {
        print!("testing {}... ", mapping.description());
        let _ = std::io::stdout().flush();

        match scenario.run::<Ristretto255, _>(mapping, &mut rng) {
            Ok(Verdict::Pass) => println!("PASS"),
            Ok(Verdict::Fail(recovery)) => {
                println!("FAIL\n\t{recovery}");
                // The hash-to-group mapping must never leak the password
                if mapping == MappingStrategy::HashToGroup {
                    tracing::error!(%mapping, "offline guess recovered the payload");
                    process::exit(1);
                }
            }
            Err(e) => {
                println!();
                tracing::error!(%mapping, error = %e, "scenario aborted");
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }
}
