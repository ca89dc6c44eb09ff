//! Feature slices rendered by the router.

pub(crate) mod logs;
