//! # vif-spec
//!
//! Element tables and lookups for generating USB Power Delivery Vendor
//! Information Files (VIF) from device-tree descriptions.
//!
//! The crate holds data only: which elements a VIF document must carry and
//! their default content, which element names are recognized, how device-tree
//! field names map to VIF element names, and how PDO type codes decode. Parsing
//! the device tree and writing the document are left to the generator.
//!
//! ## Example
//!
//! ```rust
//! use vif_spec::VifSpec;
//!
//! let spec = VifSpec::global();
//!
//! assert_eq!(spec.rename("sink-pdos"), "SnkPdoList");
//! assert!(spec.is_vif_element("Component"));
//! assert_eq!(spec.decode_pdo_type(0)?.label(), "Fixed");
//!
//! let version = spec.element_spec("VIF_Specification").and_then(|s| s.text());
//! assert_eq!(version, Some("3.19"));
//! # Ok::<(), vif_spec::Error>(())
//! ```

#![warn(clippy::all)]

pub mod error;

pub mod elements;
pub mod names;
pub mod namespaces;
pub mod pdo;
pub mod spec;

// Re-exports for convenience
pub use elements::{lookup, ElementSpec, VIF_SPEC_VERSION};
pub use error::{Error, Result};
pub use names::{is_vif_element, rename, validate_element, vif_element_name};
pub use pdo::{decode as decode_pdo_type, PdoType, PDO_TYPES};
pub use spec::VifSpec;

/// Version of the vif-spec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
