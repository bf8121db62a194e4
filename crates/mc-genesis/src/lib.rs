//! # mc-genesis
//!
//! Deterministic genesis-state builder for Meridian nodes.
//!
//! ## Role in System
//!
//! Every node independently derives the network's first block from the same
//! declarative description of initial accounts and bootstrap calls. The block
//! id that falls out of `GenesisBuilder::build` is the fixed root of the block
//! tree; any divergence here is a permanent network split, so nothing in this
//! crate may consult wall clocks, randomness, or ambient state.
//!
//! ## Construction Flow
//!
//! ```text
//! [node bootstrap] ──BootstrapPlan──→ [GenesisBuilder]
//!                                          │ build(factory, engine)
//!                                          ↓
//!                       fresh StateView ← StateFactory
//!                                          │ replay staged operations in order
//!                                          │   Alloc → StateView::set_account
//!                                          │   Call  → ExecutionEngine::execute
//!                                          ↓
//!                                  StateView::commit → state root
//!                                          ↓
//!                            header + fixed [2] signature marker
//!                                          ↓
//!                                    [GenesisBlock]
//! ```
//!
//! Construction is all-or-nothing: the first failing operation aborts the
//! build and the transient state view is dropped.

pub mod adapters;
pub mod bootstrap;
pub mod dev;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use bootstrap::*;
pub use domain::*;
pub use ports::*;
