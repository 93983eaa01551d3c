// Copyright (c) Meta Platforms, Inc. and affiliates.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed
// licenses.

use crate::errors::MapToCurveError;
use crate::group::Group;
use crate::Result;

/// `Ya = ya * g`, where `g` is the password-derived generator
pub(crate) fn initiator_message_from_generator<G: Group>(
    g: &G::Element,
    ya: &G::Scalar,
) -> G::Element {
    G::scalar_mul(ya, g)
}

/// `Yb = yb * g`, where `g` is the password-derived generator
pub(crate) fn responder_message_from_generator<G: Group>(
    g: &G::Element,
    yb: &G::Scalar,
) -> G::Element {
    G::scalar_mul(yb, g)
}

/// Multiplies the peer's element by our ephemeral scalar, rejecting an
/// identity result.
pub(crate) fn scalar_mult_vfy<G: Group>(
    scalar: &G::Scalar,
    element: &G::Element,
) -> Result<G::Element> {
    let k = G::scalar_mul(scalar, element);
    match G::is_identity(&k) {
        true => Err(MapToCurveError::IdentityElement),
        false => Ok(k),
    }
}
