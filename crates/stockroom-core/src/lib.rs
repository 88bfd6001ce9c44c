//! # stockroom-core: Inventory Store for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the inventory catalog
//! and every rule about product identity, lookup, and mutation, as plain
//! synchronous code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP clients                                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-api (axum routes)                      │   │
//! │  │    decode ──► lock ──► store call ──► encode                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ inventory │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │ Inventory │  │   codes   │  │   │
//! │  │   │ Attribute │  │  rounding │  │  lookups  │  │  fields   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBAL STATE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Attribute, request payloads)
//! - [`money`] - Money type, stored in cents, rounded on the way in
//! - [`inventory`] - The ordered inventory store
//! - [`validation`] - Key folding, code format, field checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, QuantityIncrease};
//!
//! let mut inventory = Inventory::demo_catalog();
//!
//! inventory
//!     .increase_quantities(&[QuantityIncrease {
//!         code: "e5t6-9ui3-th15-qr88".to_string(),
//!         delta: 5,
//!     }])
//!     .unwrap();
//!
//! assert_eq!(inventory.find_by_name("peach").unwrap().quantity, 35);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, UpsertOutcome};
pub use money::Money;
pub use types::*;
