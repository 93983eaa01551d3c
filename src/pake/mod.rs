// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

//! The two roles of a CPace-style exchange, parameterized by the mapping
//! that turns the password into the round's generator.

mod cpace;
#[cfg(test)]
mod tests;

use rand_core::{CryptoRng, RngCore};

use crate::group::Group;
use crate::kdf::SessionKey;
use crate::mapping::MappingStrategy;
use crate::Result;
use cpace::{initiator_message_from_generator, responder_message_from_generator, scalar_mult_vfy};

/// The initiator's message, `Ya`
#[derive(Clone, Debug, PartialEq)]
pub struct InitMessage<G: Group>(pub(crate) G::Element);

/// The responder's message, `Yb`
#[derive(Clone, Debug, PartialEq)]
pub struct RespondMessage<G: Group>(pub(crate) G::Element);

impl<G: Group> InitMessage<G> {
    /// The group element carried by the message
    pub fn element(&self) -> &G::Element {
        &self.0
    }

    /// Canonical encoding of the element
    pub fn to_bytes(&self) -> Vec<u8> {
        G::encode(&self.0)
    }
}

impl<G: Group> RespondMessage<G> {
    /// The group element carried by the message
    pub fn element(&self) -> &G::Element {
        &self.0
    }

    /// Canonical encoding of the element
    pub fn to_bytes(&self) -> Vec<u8> {
        G::encode(&self.0)
    }
}

/// State the initiator keeps between sending `Ya` and receiving `Yb`.
///
/// When the initiator is an impersonator, this is everything the attacker
/// remembers from its one live attempt: its ephemeral scalar and the password
/// it guessed.
pub struct Initiator<G: Group> {
    scalar: G::Scalar,
    password: Vec<u8>,
    message: InitMessage<G>,
}

impl<G: Group> Initiator<G> {
    /// Samples `ya` and computes `Ya = ya * map(password)`
    pub fn start<R: RngCore + CryptoRng>(
        mapping: MappingStrategy,
        password: &[u8],
        rng: &mut R,
    ) -> Result<(InitMessage<G>, Self)> {
        let g = mapping.map_password::<G>(password)?;
        let scalar = G::random_scalar(rng);
        let element = initiator_message_from_generator::<G>(&g, &scalar);

        Ok((
            InitMessage(element),
            Self {
                scalar,
                password: password.to_vec(),
                message: InitMessage(element),
            },
        ))
    }

    /// Completes the exchange honestly: `K = ya * Yb`
    pub fn finish(&self, respond_message: &RespondMessage<G>) -> Result<SessionKey> {
        let k = scalar_mult_vfy::<G>(&self.scalar, &respond_message.0)?;
        SessionKey::from_shared_element::<G>(&k)
    }

    /// The message this initiator sent
    pub fn message(&self) -> &InitMessage<G> {
        &self.message
    }

    /// The password this initiator used
    pub fn password(&self) -> &[u8] {
        &self.password
    }

    pub(crate) fn scalar(&self) -> &G::Scalar {
        &self.scalar
    }
}

/// The responder's whole role: samples `yb`, computes
/// `Yb = yb * map(password)` and derives the session key from `K = yb * Ya`.
pub fn respond<G: Group, R: RngCore + CryptoRng>(
    mapping: MappingStrategy,
    password: &[u8],
    init_message: &InitMessage<G>,
    rng: &mut R,
) -> Result<(SessionKey, RespondMessage<G>)> {
    let g = mapping.map_password::<G>(password)?;
    let scalar = G::random_scalar(rng);
    let message = RespondMessage(responder_message_from_generator::<G>(&g, &scalar));

    let k = scalar_mult_vfy::<G>(&scalar, &init_message.0)?;
    let session_key = SessionKey::from_shared_element::<G>(&k)?;

    Ok((session_key, message))
}
