//! Conference Manager - Conference schedule management
//!
//! This crate keeps a conference's sessions and accepted items (papers,
//! panels, lightning talks), schedules items into sessions within their
//! time budget, and reads and writes the conference as a flat text file.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
