//! Presentational components for the viewer.

pub(crate) mod badge;
pub(crate) mod icons;
pub(crate) mod log_card;
pub(crate) mod status;
pub(crate) mod theme_toggle;
