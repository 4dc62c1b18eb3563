//! Seed catalog of tenant data.
//!
//! The catalog defines which clients and users a tenant starts with. It is
//! the single source the store resolvers draw from: client registries are
//! rebuilt from it on every resolution, and user directories are seeded
//! from it once per tenant.
//!
//! Tenants absent from the catalog are valid; they seed nothing.

use idsvr_crypto::sha256_base64;
use idsvr_model::claim::claim_types;
use idsvr_model::{Claim, Client, GrantType, Tenant, User};

/// Source of per-tenant seed data.
pub trait SeedCatalog: Send + Sync {
    /// Returns the clients configured for a tenant.
    fn clients_for(&self, tenant: &Tenant) -> Vec<Client>;

    /// Returns the users a tenant's directory starts with.
    fn seed_users_for(&self, tenant: &Tenant) -> Vec<User>;
}

/// The built-in reference catalog.
///
/// Configures two tenants: `first` (client `FirstTenantClient`, user
/// `alice`) and `second` (client `SecondTenantClient`, user `bob`). The
/// two client registrations differ only in their redirect port and secret,
/// which is exactly what makes cross-tenant isolation observable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceCatalog;

impl ReferenceCatalog {
    /// Creates the reference catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeedCatalog for ReferenceCatalog {
    fn clients_for(&self, tenant: &Tenant) -> Vec<Client> {
        match tenant.name() {
            "first" => vec![
                Client::new("FirstTenantClient")
                    .with_name("First Tenant Client")
                    .with_secret(sha256_base64("FirstTenant-ClientSecret"))
                    .with_grant_type(GrantType::AuthorizationCode)
                    .with_redirect_uri("http://localhost:5000/signin-oidc")
                    .with_scope("openid")
                    .with_scope("profile")
                    .with_consent_required(false),
            ],
            "second" => vec![
                Client::new("SecondTenantClient")
                    .with_name("Second Tenant Client")
                    .with_secret(sha256_base64("SecondTenant-ClientSecret"))
                    .with_grant_type(GrantType::AuthorizationCode)
                    .with_redirect_uri("http://localhost:5001/signin-oidc")
                    .with_scope("openid")
                    .with_scope("profile")
                    .with_consent_required(false),
            ],
            _ => Vec::new(),
        }
    }

    fn seed_users_for(&self, tenant: &Tenant) -> Vec<User> {
        match tenant.name() {
            "first" => vec![alice()],
            "second" => vec![bob()],
            _ => Vec::new(),
        }
    }
}

const ADDRESS_VALUE: &str = "{ 'street_address': 'One Hacker Way', 'locality': 'Heidelberg', 'postal_code': 69118, 'country': 'Germany' }";

fn alice() -> User {
    User::new("818727", "alice")
        .with_password("alice")
        .with_claim(Claim::new(claim_types::NAME, "Alice Smith"))
        .with_claim(Claim::new(claim_types::GIVEN_NAME, "Alice"))
        .with_claim(Claim::new(claim_types::FAMILY_NAME, "Smith"))
        .with_claim(Claim::new(claim_types::EMAIL, "AliceSmith@email.com"))
        .with_claim(Claim::boolean(claim_types::EMAIL_VERIFIED, "true"))
        .with_claim(Claim::new(claim_types::ROLE, "Admin"))
        .with_claim(Claim::new(claim_types::ROLE, "Geek"))
        .with_claim(Claim::new(claim_types::WEBSITE, "http://alice.com"))
        .with_claim(Claim::json(claim_types::ADDRESS, ADDRESS_VALUE))
}

fn bob() -> User {
    User::new("88421113", "bob")
        .with_password("bob")
        .with_claim(Claim::new(claim_types::NAME, "Bob Smith"))
        .with_claim(Claim::new(claim_types::GIVEN_NAME, "Bob"))
        .with_claim(Claim::new(claim_types::FAMILY_NAME, "Smith"))
        .with_claim(Claim::new(claim_types::EMAIL, "BobSmith@email.com"))
        .with_claim(Claim::boolean(claim_types::EMAIL_VERIFIED, "true"))
        .with_claim(Claim::new(claim_types::ROLE, "Developer"))
        .with_claim(Claim::new(claim_types::ROLE, "Geek"))
        .with_claim(Claim::new(claim_types::WEBSITE, "http://bob.com"))
        .with_claim(Claim::json(claim_types::ADDRESS, ADDRESS_VALUE))
}
