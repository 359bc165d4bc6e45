//! Job search: turns the caller's query string into a [`filter::JobQuery`]
//! and pages through the matching jobs via a [`JobStore`].
//!
//! [`JobStore`]: crate::pkg::internal::adaptors::jobs::JobStore

pub mod filter;
pub mod pagination;

use serde::Deserialize;

/// Raw parameters of one search call, as they arrive on the query string.
///
/// Everything stays a string here so a junk `page` or `limit` falls back to
/// its default instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub location: Option<String>,
    pub jtype: Option<String>,
    pub exp: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Treats `Some("")` and whitespace-only values the same as a missing one.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
