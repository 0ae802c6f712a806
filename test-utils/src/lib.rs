//! Signing Bot Test Utils
//!
//! Provides shared testing utilities for the signing bot. The crate offers factories for
//! building Serenity models the way Discord's API would return them, so roster and role
//! resolution logic can be exercised without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[test]
//! fn counts_team_members() {
//!     let vikings = create_test_role(111, 999, "Vikings");
//!     let member = create_test_member(999, 222, "player", &[111]);
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
