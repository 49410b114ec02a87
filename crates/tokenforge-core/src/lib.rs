//! Core types and utilities for the tokenforge compiler.
//!
//! This crate provides the foundational types used across all other tokenforge crates:
//! - The tagged token tree ([`TokenValue`]) and its scalar leaves
//! - Flattened primitives and resolved token records
//! - Identifier casing rules shared by every platform generator
//! - Target platforms
//! - Error types

pub mod errors;
pub mod naming;
pub mod platform;
pub mod tokens;
pub mod value;

pub use errors::*;
pub use platform::{Platform, PlatformSelection};
pub use tokens::*;
pub use value::{Leaves, PathSegments, Scalar, TokenValue};
