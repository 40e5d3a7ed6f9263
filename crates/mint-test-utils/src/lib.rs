//! Shared test utilities for the InfinityMint SDK workspace.
//!
//! This crate provides standardised client-build fixtures so crate test
//! suites do not each hand-roll directory layouts. It is a dev-dependency
//! only — never published.
//!
//! # Modules
//!
//! - [`build`] — [`TestBuild`] builder for an on-disk client build

pub mod build;

pub use build::TestBuild;
