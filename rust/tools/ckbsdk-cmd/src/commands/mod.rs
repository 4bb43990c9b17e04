//! Command implementations for ckbsdk-cmd

pub mod default;
pub mod inspect;
pub mod types;
