//! Claim domain model.
//!
//! Claims are typed statements about a user. External identity providers
//! emit claims under legacy WS-* URIs; the canonical names here follow the
//! OIDC standard claims registry.

use serde::{Deserialize, Serialize};

/// Value type tag for a claim.
///
/// Most claims carry plain strings; a few (like `email_verified` and
/// `address`) are tagged so downstream token serialization can emit the
/// proper JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimValueType {
    /// Plain string value.
    #[default]
    String,
    /// Boolean value, serialized unquoted.
    Boolean,
    /// Embedded JSON structure, serialized unquoted.
    Json,
}

/// A claim about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g. `name`, `email`, or a WS-* URI from an external provider).
    pub claim_type: String,
    /// Claim value.
    pub value: String,
    /// Value type tag.
    #[serde(default)]
    pub value_type: ClaimValueType,
}

impl Claim {
    /// Creates a string-valued claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: ClaimValueType::String,
        }
    }

    /// Creates a boolean-valued claim.
    #[must_use]
    pub fn boolean(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: ClaimValueType::Boolean,
        }
    }

    /// Creates a JSON-valued claim.
    #[must_use]
    pub fn json(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: ClaimValueType::Json,
        }
    }

    /// Returns a copy of this claim under a different claim type.
    ///
    /// Value and value type are preserved.
    #[must_use]
    pub fn retyped(&self, claim_type: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: self.value.clone(),
            value_type: self.value_type,
        }
    }
}

/// Canonical OIDC claim type names.
pub mod claim_types {
    /// Subject identifier.
    pub const SUBJECT: &str = "sub";
    /// End user display name.
    pub const NAME: &str = "name";
    /// Given (first) name.
    pub const GIVEN_NAME: &str = "given_name";
    /// Family (last) name.
    pub const FAMILY_NAME: &str = "family_name";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Email verification flag.
    pub const EMAIL_VERIFIED: &str = "email_verified";
    /// Role membership.
    pub const ROLE: &str = "role";
    /// Web page or blog URL.
    pub const WEBSITE: &str = "website";
    /// Postal address as a JSON structure.
    pub const ADDRESS: &str = "address";
    /// Birthdate.
    pub const BIRTH_DATE: &str = "birthdate";
    /// Gender.
    pub const GENDER: &str = "gender";
    /// Actor (delegation scenarios).
    pub const ACTOR: &str = "actort";
    /// Name identifier issued by an external provider.
    pub const NAME_IDENTIFIER: &str = "nameid";
}

/// Legacy WS-* claim type URIs emitted by external identity providers.
pub mod external_claim_types {
    /// Display name URI.
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    /// Actor URI.
    pub const ACTOR: &str = "http://schemas.xmlsoap.org/ws/2009/09/identity/claims/actor";
    /// Date of birth URI.
    pub const DATE_OF_BIRTH: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/dateofbirth";
    /// Email address URI.
    pub const EMAIL: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    /// Gender URI.
    pub const GENDER: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/gender";
    /// Given name URI.
    pub const GIVEN_NAME: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/givenname";
    /// Name identifier URI.
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    /// Surname URI.
    pub const SURNAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/surname";
    /// Web page URI.
    pub const WEBPAGE: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/webpage";
}
