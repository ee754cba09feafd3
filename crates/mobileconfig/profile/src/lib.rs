//! Configuration-Profile Construction
//!
//! Builds device-management configuration profiles (`.mobileconfig`
//! property-list documents) from a validated [`ProfileConfig`] and a set of
//! typed payloads.
//!
//! Flow: construct a `ProfileConfig`, bind a [`PayloadSet`] to it, append
//! payloads through the per-kind `add_*` constructors, then call
//! [`assemble`] to produce a [`ProfileDocument`] ready for plist encoding.
//!
//! ```no_run
//! use mobileconfig_profile::{assemble, PayloadOptions, PayloadSet, WifiOptions};
//! use mobileconfig_types::ProfileConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProfileConfig::builder("device1")
//!     .with_organization("Example Corp")
//!     .build()?;
//! let mut set = PayloadSet::new(config);
//! set.add_wifi(
//!     "Office",
//!     WifiOptions::new().with_encryption("WPA2").with_password("secret"),
//!     PayloadOptions::new(),
//! )?;
//! let document = assemble(&mut set);
//! document.to_xml(std::io::stdout())?;
//! # Ok(())
//! # }
//! ```
//!
//! Payload kinds with a missing or unrecognized primary value skip silently
//! rather than erroring; only kind mismatches on supplied fields fail, with
//! [`mobileconfig_types::ProfileError::InvalidField`].

#![deny(unsafe_code)]

mod assembler;
mod collection;
pub mod icon;
mod options;
mod payload;

pub use assembler::*;
pub use collection::*;
pub use options::*;
pub use payload::*;

pub use mobileconfig_types::ProfileConfig;
