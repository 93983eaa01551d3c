// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! One exchange round between an impersonated initiator and an honest
//! responder.

use rand_core::{CryptoRng, RngCore};

use crate::aead;
use crate::group::Group;
use crate::mapping::MappingStrategy;
use crate::pake::{respond, InitMessage, Initiator, RespondMessage};
use crate::Result;

/// The public record of a round: both messages and one ciphertext the
/// responder sealed under its session key.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript<G: Group> {
    init_message: InitMessage<G>,
    respond_message: RespondMessage<G>,
    sealed_payload: Vec<u8>,
}

impl<G: Group> Transcript<G> {
    /// The impersonator's message, `Ya`
    pub fn init_message(&self) -> &InitMessage<G> {
        &self.init_message
    }

    /// The responder's message, `Yb`
    pub fn respond_message(&self) -> &RespondMessage<G> {
        &self.respond_message
    }

    /// The payload sealed under the responder's session key
    pub fn sealed_payload(&self) -> &[u8] {
        &self.sealed_payload
    }
}

/// A generated round: the public transcript, and the impersonator's private
/// state from the live attempt.
pub struct Round<G: Group> {
    /// What crossed the wire
    pub transcript: Transcript<G>,
    /// What the impersonator kept for itself
    pub impersonator: Initiator<G>,
}

/// Runs one round.
///
/// The impersonator starts the exchange with `live_guess`, the responder
/// answers with `true_password` and seals `payload` under the key it derives.
/// Every call samples fresh ephemeral scalars and a fresh nonce.
pub fn generate<G: Group, R: RngCore + CryptoRng>(
    mapping: MappingStrategy,
    true_password: &[u8],
    live_guess: &[u8],
    payload: &[u8],
    rng: &mut R,
) -> Result<Round<G>> {
    let (init_message, impersonator) = Initiator::<G>::start(mapping, live_guess, rng)?;
    let (session_key, respond_message) =
        respond::<G, R>(mapping, true_password, &init_message, rng)?;
    let sealed_payload = aead::seal(&session_key, payload, rng)?;

    tracing::debug!(
        group = G::NAME,
        %mapping,
        sealed_len = sealed_payload.len(),
        "generated round"
    );

    Ok(Round {
        transcript: Transcript {
            init_message,
            respond_message,
            sealed_payload,
        },
        impersonator,
    })
}
