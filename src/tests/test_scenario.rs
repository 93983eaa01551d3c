// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use crate::attack::Recovery;
use crate::group::Ristretto255;
use crate::mapping::MappingStrategy;
use crate::scenario::{Scenario, Verdict};
use crate::MapToCurveError;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

#[test]
fn test_default_scenario() {
    let scenario = Scenario::default();
    assert_eq!(b"foo", scenario.live_guess());
    assert_eq!(
        Scenario::new(b"baz", &["foo", "bar", "baz"], b"hello, world!").unwrap(),
        scenario
    );
}

#[test]
fn test_with_map_to_curve_passes() {
    let mut rng = ChaCha20Rng::seed_from_u64(31);
    let verdict = Scenario::default()
        .run::<Ristretto255, _>(MappingStrategy::HashToGroup, &mut rng)
        .unwrap();
    assert_eq!(Verdict::Pass, verdict);
    assert_eq!(Ok(()), verdict.into_result());
}

#[test]
fn test_without_map_to_curve_fails() {
    let mut rng = ChaCha20Rng::seed_from_u64(32);
    let verdict = Scenario::default()
        .run::<Ristretto255, _>(MappingStrategy::HashToScalarThenMultiply, &mut rng)
        .unwrap();
    assert_eq!(
        Verdict::Fail(Recovery {
            guess: b"baz".to_vec(),
            plaintext: b"hello, world!".to_vec(),
        }),
        verdict
    );

    let error = verdict.into_result().unwrap_err();
    assert_eq!("recovered plaintext: \"hello, world!\"", error.to_string());
}

#[test]
fn test_correct_live_guess_is_not_a_failure() {
    let mut rng = ChaCha20Rng::seed_from_u64(33);
    let scenario = Scenario::new(b"baz", &["baz", "foo", "bar"], b"hello, world!").unwrap();
    for mapping in MappingStrategy::ALL {
        assert_eq!(
            Verdict::Pass,
            scenario.run::<Ristretto255, _>(mapping, &mut rng).unwrap()
        );
    }
}

#[test]
fn test_password_outside_dictionary_passes() {
    let mut rng = ChaCha20Rng::seed_from_u64(34);
    let scenario = Scenario::new(b"qux", &["foo", "bar", "baz"], b"hello, world!").unwrap();
    for mapping in MappingStrategy::ALL {
        assert_eq!(
            Verdict::Pass,
            scenario.run::<Ristretto255, _>(mapping, &mut rng).unwrap()
        );
    }
}

#[test]
fn test_empty_guess_list_is_rejected() {
    assert_eq!(
        Err(MapToCurveError::EmptyGuessList),
        Scenario::new::<&str>(b"baz", &[], b"hello, world!")
    );
}

#[test]
fn test_mapping_labels() {
    assert_eq!(
        "with map_to_curve",
        MappingStrategy::HashToGroup.description()
    );
    assert_eq!(
        "without map_to_curve",
        MappingStrategy::HashToScalarThenMultiply.description()
    );
}
