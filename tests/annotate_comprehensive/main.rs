//! Annotation Comprehensive Test Suite
//!
//! End-to-end tests through the public `json_annotate` API.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Scenarios** - documented input/output pairs
//! - **Tier 2: Errors** - error kinds, no partial output, legacy messages
//! - **Tier 3: Properties** - property-based shape and policy invariants
//! - **Tier 4: Configuration** - `annotate.toml` driven behavior
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test annotate_comprehensive
//!
//! # Only property-based tests
//! cargo test --test annotate_comprehensive properties
//! ```

#[path = "../common/mod.rs"]
mod common;

// Tier 1: Scenarios
mod scenarios;


// Tier 3: Properties
mod properties;

// Tier 4: Configuration
mod configuration;
