//! Command entry points

pub mod deploy;
