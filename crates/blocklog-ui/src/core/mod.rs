//! Core, DOM-free primitives and helpers for the viewer.
pub mod cards;
pub mod config;
pub mod error;
pub mod icons;
pub mod logic;
pub mod store;
pub mod theme;
