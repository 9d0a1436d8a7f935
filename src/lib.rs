//! Feature Relay - Interactive Feature Supply
//!
//! This crate hands free-form feature text, submitted interactively at
//! unpredictable times, to a test execution engine that polls for the next
//! unit of work. Each submission is normalized, published as a transient
//! scratch resource, resolved into parsed feature documents, and
//! deduplicated before being returned to the engine.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
