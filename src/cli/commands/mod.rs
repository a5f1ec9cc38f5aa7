//! CLI subcommands

pub mod inspect;
pub mod simulate;
