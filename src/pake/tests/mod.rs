// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use super::cpace::*;
use super::*;
use crate::errors::MapToCurveError;
use crate::group::Ristretto255;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::traits::Identity;
use curve25519_dalek::Scalar;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

// Taken from <https://www.ietf.org/archive/id/draft-irtf-cfrg-cpace-12.html#appendix-B.3>
const YA: &str = "da3d23700a9e5699258aef94dc060dfda5ebb61f02a5ea77fad53f4ff0976d08";
const YB: &str = "d2316b454718c35362d83d69df6320f38578ed5984651435e2949762d900b80d";
const YA_POINT: &str = "d40fb265a7abeaee7939d91a585fe59f7053f982c296ec413c624c669308f87a";
const YB_POINT: &str = "08bcf6e9777a9c313a3db6daa510f2d398403319c2341bd506a92e672eb7e307";
const K: &str = "e22b1ef7788f661478f3cddd4c600774fc0f41e6b711569190ff88fa0e607e09";

fn scalar(hex_str: &str) -> Scalar {
    hex::decode(hex_str)
        .unwrap()
        .try_into()
        .ok()
        .and_then(|bytes| Scalar::from_canonical_bytes(bytes).into())
        .unwrap()
}

fn point(hex_str: &str) -> RistrettoPoint {
    Ristretto255::decode(&hex::decode(hex_str).unwrap()).unwrap()
}

#[test]
fn test_scalar_mult_vfy() {
    /*
    Taken from <https://www.ietf.org/archive/id/draft-irtf-cfrg-cpace-12.html#appendix-B.3.4>
    scalar_mult_vfy(ya,Yb): (length: 32 bytes)
        e22b1ef7788f661478f3cddd4c600774fc0f41e6b711569190ff88fa
        0e607e09
    scalar_mult_vfy(yb,Ya): (length: 32 bytes)
        e22b1ef7788f661478f3cddd4c600774fc0f41e6b711569190ff88fa
        0e607e09
    */
    let k = scalar_mult_vfy::<Ristretto255>(&scalar(YA), &point(YB_POINT)).unwrap();
    assert_eq!(K, hex::encode(Ristretto255::encode(&k)));

    let k = scalar_mult_vfy::<Ristretto255>(&scalar(YB), &point(YA_POINT)).unwrap();
    assert_eq!(K, hex::encode(Ristretto255::encode(&k)));
}

#[test]
fn test_scalar_mult_vfy_rejects_identity() {
    assert_eq!(
        Err(MapToCurveError::IdentityElement),
        scalar_mult_vfy::<Ristretto255>(&scalar(YA), &RistrettoPoint::identity())
    );
}

#[test]
fn test_messages_from_generator() {
    let g = point(YA_POINT);
    let s = scalar(YB);
    assert_eq!(
        initiator_message_from_generator::<Ristretto255>(&g, &s),
        responder_message_from_generator::<Ristretto255>(&g, &s),
    );
    assert_eq!(g * s, initiator_message_from_generator::<Ristretto255>(&g, &s));
}

#[test]
fn test_honest_exchange_agrees() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for mapping in MappingStrategy::ALL {
        let (init_message, initiator) =
            Initiator::<Ristretto255>::start(mapping, b"password", &mut rng).unwrap();
        let (responder_key, respond_message) =
            respond(mapping, b"password", &init_message, &mut rng).unwrap();
        let initiator_key = initiator.finish(&respond_message).unwrap();

        assert_eq!(initiator_key, responder_key);
        assert_eq!(initiator.message(), &init_message);
        assert_eq!(initiator.password(), b"password");
    }
}

#[test]
fn test_mismatched_passwords_disagree() {
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    for mapping in MappingStrategy::ALL {
        let (init_message, initiator) =
            Initiator::<Ristretto255>::start(mapping, b"password", &mut rng).unwrap();
        let (responder_key, respond_message) =
            respond(mapping, b"passw0rd", &init_message, &mut rng).unwrap();
        let initiator_key = initiator.finish(&respond_message).unwrap();

        assert_ne!(initiator_key, responder_key);
    }
}

#[test]
fn test_respond_rejects_identity_message() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let init_message = InitMessage::<Ristretto255>(RistrettoPoint::identity());
    let result = respond(
        MappingStrategy::HashToGroup,
        b"password",
        &init_message,
        &mut rng,
    );
    assert!(matches!(result, Err(MapToCurveError::IdentityElement)));
}

#[test]
fn test_message_encoding_is_canonical() {
    let mut rng = ChaCha20Rng::seed_from_u64(10);
    let (init_message, _) =
        Initiator::<Ristretto255>::start(MappingStrategy::HashToGroup, b"password", &mut rng)
            .unwrap();
    let bytes = init_message.to_bytes();
    assert_eq!(32, bytes.len());
    assert_eq!(init_message.element(), &Ristretto255::decode(&bytes).unwrap());
}
