//! Path-based tenant resolution.
//!
//! The tenant is the first run of word characters following a `/` anywhere
//! in the path. The match is not anchored, so `/first/account/login` and
//! `/first` both resolve to `first`. Captured names are lower-cased by the
//! `Tenant` constructor.

use std::sync::LazyLock;

use regex::Regex;

use idsvr_model::Tenant;

static TENANT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\w+)").expect("tenant pattern is valid"));

/// Resolves the tenant addressed by a request path.
///
/// Returns `None` when the path contains no word-character segment after a
/// slash. Resolution never consults a catalog: any syntactically valid name
/// yields a tenant, and unknown names later resolve to empty stores.
#[must_use]
pub fn resolve_path(path: &str) -> Option<Tenant> {
    TENANT_PATTERN
        .captures(path)
        .map(|captures| Tenant::new(&captures[1]))
}
