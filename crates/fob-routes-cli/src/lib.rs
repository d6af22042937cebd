//! Command-line front end for `fob-routes`.

pub mod cli;
pub mod inspect;
pub mod logger;
