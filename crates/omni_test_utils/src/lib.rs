#![warn(missing_docs)]

//! Shared helpers for the workspace's live-node test suites.

pub mod env;
