//! # Shared Types Crate
//!
//! Primitive chain types shared across subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: hashes, addresses, and balance numerics are
//!   defined here and nowhere else.
//! - **Unrepresentable invalid states**: addresses are fixed-width arrays and
//!   balances are unsigned, so "malformed address" and "negative balance" are
//!   ruled out by the type system rather than checked at runtime.

pub mod entities;

pub use entities::*;
