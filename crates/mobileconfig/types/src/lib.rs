//! Configuration-Profile Domain Types
//!
//! This crate defines the leaf types for building device-management
//! configuration profiles:
//!
//! - **Identifier**: fresh random UUID-style tokens for `PayloadUUID` fields
//!   and dotted-identifier suffixes.
//! - **FieldValue / FieldKind**: a tagged representation of loosely-typed
//!   caller input together with the kind a field is declared to hold.
//! - **validate**: accept-or-reject kind checks — a guard rail, never a
//!   coercion layer.
//! - **ProfileConfig**: the per-profile organizational identity (host,
//!   domain, human-readable metadata, removal date) with its derived
//!   reverse-DNS and full dotted identifiers frozen at construction.
//!
//! All types implement `Clone` and `Debug`; identifiers and kind enums also
//! implement `Serialize`/`Deserialize` and `Display`.

#![deny(unsafe_code)]

mod config;
mod error;
mod field;
mod identifier;
pub mod validate;

pub use config::*;
pub use error::*;
pub use field::*;
pub use identifier::*;
