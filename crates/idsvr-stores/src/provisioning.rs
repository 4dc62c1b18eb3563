//! User auto-provisioning from external-provider claims.
//!
//! When a user authenticates through an external identity provider for the
//! first time, a local user record is synthesized from the claims the
//! provider handed over:
//!
//! 1. claim types are remapped to canonical names (`claim_map`);
//! 2. a `name` claim is synthesized from given/family name if absent;
//! 3. a fresh random subject identifier is generated;
//! 4. the username is the name claim's value, or the subject if there is
//!    no name to use.
//!
//! The functions here are pure; appending the provisioned user to a
//! tenant's directory is the directory's job.

use idsvr_crypto::generate_subject_id;
use idsvr_model::claim::claim_types;
use idsvr_model::{Claim, ExternalIdentity, User};

use crate::claim_map::remap_claims;

/// Builds a local user record from external-provider claims.
///
/// The returned user is enabled, linked to `(provider, provider_user_id)`,
/// and carries the remapped claims in their incoming order (with a
/// synthesized `name` claim appended when one was derived).
#[must_use]
pub fn provision_user(provider: &str, provider_user_id: &str, claims: &[Claim]) -> User {
    let mut mapped = remap_claims(claims);

    if !mapped.iter().any(|c| c.claim_type == claim_types::NAME)
        && let Some(display_name) = synthesize_display_name(&mapped)
    {
        mapped.push(Claim::new(claim_types::NAME, display_name));
    }

    let subject = generate_subject_id();
    let username = mapped
        .iter()
        .find(|c| c.claim_type == claim_types::NAME)
        .map_or_else(|| subject.clone(), |c| c.value.clone());

    User::new(subject, username)
        .with_external_identity(ExternalIdentity::new(provider, provider_user_id))
        .with_claims(mapped)
}

/// Derives a display name from given and family name claims.
fn synthesize_display_name(claims: &[Claim]) -> Option<String> {
    let given = claim_value(claims, claim_types::GIVEN_NAME);
    let family = claim_value(claims, claim_types::FAMILY_NAME);

    match (given, family) {
        (Some(given), Some(family)) => Some(format!("{given} {family}")),
        (Some(given), None) => Some(given.to_string()),
        (None, Some(family)) => Some(family.to_string()),
        (None, None) => None,
    }
}

fn claim_value<'a>(claims: &'a [Claim], claim_type: &str) -> Option<&'a str> {
    claims
        .iter()
        .find(|c| c.claim_type == claim_type)
        .map(|c| c.value.as_str())
}
