//! Testing utilities for the community events platform
//!
//! This crate provides testing utilities used by the other crates' suites:
//! - Test fixtures for the domain types
//! - Builder patterns for complex test data construction
//! - In-memory mock implementations of the application ports
//!
//! # Examples
//!
//! ```
//! use community_events_testing::{builders::*, fixtures::*};
//!
//! // Build a published event ready to take registrations
//! let event = EventBuilder::new()
//!     .with_title("Night Market")
//!     .with_capacity(200)
//!     .published()
//!     .build();
//!
//! assert_eq!(event.current_registrations(), 0);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
