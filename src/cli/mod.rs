//! CLI infrastructure for the fifteen environment
//!
//! A thin demonstration surface: simulate random episodes and inspect boards.

pub mod commands;
pub mod config;
pub mod output;
