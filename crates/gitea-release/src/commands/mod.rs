//! Command implementations

pub mod publish;
