//! codeckit-lib: Core types and logic for codeckit
//!
//! This crate provides the building blocks for provisioning the Audio
//! Analyzer service:
//! - `platform`: host OS classification from an `$OSTYPE`-style identifier
//! - `install`: dependency install plans, execution, and outcome reporting
//! - `image`: container image recipe rendering and build-context checks
//! - `runner`: command execution (real shell or recorded trace)

pub mod consts;
pub mod image;
pub mod install;
pub mod platform;
pub mod runner;
