//! Claim type remapping for external-provider claims.
//!
//! External identity providers emit claims under legacy WS-* URIs. Before
//! a user is provisioned those types are rewritten to the canonical short
//! names so the local record looks the same regardless of which provider
//! it came from. Value and value type are always preserved; only the type
//! changes.

use idsvr_model::Claim;
use idsvr_model::claim::{claim_types, external_claim_types};

/// Maps a WS-* claim type URI to its canonical short name.
///
/// Returns `None` for types outside the known outbound mapping; those
/// claims pass through provisioning unchanged.
#[must_use]
pub fn outbound_claim_type(claim_type: &str) -> Option<&'static str> {
    match claim_type {
        external_claim_types::ACTOR => Some(claim_types::ACTOR),
        external_claim_types::DATE_OF_BIRTH => Some(claim_types::BIRTH_DATE),
        external_claim_types::EMAIL => Some(claim_types::EMAIL),
        external_claim_types::GENDER => Some(claim_types::GENDER),
        external_claim_types::GIVEN_NAME => Some(claim_types::GIVEN_NAME),
        external_claim_types::NAME_IDENTIFIER => Some(claim_types::NAME_IDENTIFIER),
        external_claim_types::SURNAME => Some(claim_types::FAMILY_NAME),
        external_claim_types::WEBPAGE => Some(claim_types::WEBSITE),
        _ => None,
    }
}

/// Rewrites one incoming claim to its canonical type.
///
/// The display name URI takes precedence over the outbound mapping so an
/// external display name always lands on the `name` claim.
#[must_use]
pub fn remap_claim(claim: &Claim) -> Claim {
    if claim.claim_type == external_claim_types::NAME {
        claim.retyped(claim_types::NAME)
    } else if let Some(mapped) = outbound_claim_type(&claim.claim_type) {
        claim.retyped(mapped)
    } else {
        claim.clone()
    }
}

/// Rewrites a claim list, preserving order.
#[must_use]
pub fn remap_claims(claims: &[Claim]) -> Vec<Claim> {
    claims.iter().map(remap_claim).collect()
}
