//! Ports (trait boundaries) for external collaborators.
//!
//! The rules and the environment own these traits; concrete strategies and
//! observers live in [`crate::adapters`] and [`crate::pipeline`].

pub mod observer;
pub mod selector;

pub use observer::Observer;
pub use selector::ActionSelector;
