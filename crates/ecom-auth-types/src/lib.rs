//! Auth types shared across services.
//!
//! Provides JWT validation, cookie builders, and the `Identity` extractor.

pub mod cookie;
pub mod identity;
pub mod token;
