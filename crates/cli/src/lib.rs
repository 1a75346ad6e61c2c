//! GM9 asset builder CLI library.

pub mod cli;
