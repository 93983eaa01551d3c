// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use cpace_map_to_curve::rand_core::OsRng;
use cpace_map_to_curve::{transcript, DictionaryAttacker, MappingStrategy, Ristretto255};

const DICTIONARY: [&str; 8] = [
    "123456", "password", "qwerty", "letmein", "dragon", "monkey", "hunter2", "trustno1",
];

fn main() {
    let mut rng = OsRng;

    for mapping in MappingStrategy::ALL {
        println!("== {} ==", mapping);

        let round = transcript::generate::<Ristretto255, _>(
            mapping,
            b"hunter2",
            DICTIONARY[0].as_bytes(),
            b"attack at dawn",
            &mut rng,
        )
        .expect("Error with transcript::generate()");

        let transcript = &round.transcript;
        println!(
            "Ya ({} bytes): {:?}",
            transcript.init_message().to_bytes().len(),
            hex::encode(transcript.init_message().to_bytes())
        );
        println!(
            "Yb ({} bytes): {:?}",
            transcript.respond_message().to_bytes().len(),
            hex::encode(transcript.respond_message().to_bytes())
        );
        println!(
            "sealed payload ({} bytes): {:?}",
            transcript.sealed_payload().len(),
            hex::encode(transcript.sealed_payload())
        );

        let attacker = DictionaryAttacker::new(&round.impersonator)
            .expect("Error with DictionaryAttacker::new()");
        match attacker
            .run(transcript, &DICTIONARY[1..])
            .expect("Error with DictionaryAttacker::run()")
        {
            Some(recovery) => println!(
                "password {:?} found offline, {}",
                String::from_utf8_lossy(&recovery.guess),
                recovery
            ),
            None => println!("no offline guess opened the payload"),
        }
    }
}
