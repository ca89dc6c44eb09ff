//! HTTP client helpers.

pub(crate) mod api;
