//! Adapters implementing the crate's ports.

pub mod random_selector;
pub mod scripted_selector;

pub use random_selector::RandomSelector;
pub use scripted_selector::ScriptedSelector;
