//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, User, Member) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity guild Member objects

pub mod member;
pub mod role;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
