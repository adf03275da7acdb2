//! Staging frameworks
//!
//! A framework participates in the three phases of staging:
//! - `detect`: decide whether the framework applies to the application
//! - `compile`: place the framework's artifacts into the droplet
//! - `release`: contribute JVM options for the runtime command line
//!
//! This crate ships one framework, the Waratek agent.

pub mod waratek;

pub use waratek::{ResolvedAgent, WaratekAgent};
