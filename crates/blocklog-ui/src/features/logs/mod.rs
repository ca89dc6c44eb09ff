//! Logs feature slice.
//!
//! # Design
//! - Load the payload once per page and resolve icons for distinct blocks.
//! - Keep icon handles owned by the page so they are released on unmount.

pub(crate) mod view;
