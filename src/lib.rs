//! # Presence
//!
//! > *"Absent is not the same as empty"*
//!
//! A small algebra for values that may or may not be there.
//!
//! ## Philosophy
//!
//! **Presence** keeps absence out of the payload:
//! - [`Optional<T>`] is a closed sum type; only the variant tag says whether a value exists
//! - Raw sentinel-based inputs are lifted once, at the boundary ([`lift`])
//! - Everything downstream composes with total combinators (`map`, `and_then`, `zip`, [`combine`])
//! - Unwrapping is an explicit, named choice: [`Optional::get`], [`Optional::with_default`], [`Optional::into_option`]
//!
//! ## Quick Example
//!
//! ```rust
//! use presence::lift::of_nullable;
//! use presence::Optional;
//!
//! fn lookup(key: &str) -> Option<&'static str> {
//!     match key {
//!         "host" => Some("localhost"),
//!         "port" => Some("8080"),
//!         _ => None,
//!     }
//! }
//!
//! // Lift at the boundary, then stay in Optional
//! let host = of_nullable(lookup("host"));
//! let port = of_nullable(lookup("port")).and_then(|p| Optional::from(p.parse::<u16>().ok()));
//!
//! let addr = host.zip_with(port, |h, p| format!("{}:{}", h, p));
//! assert_eq!(addr.with_default("unset".to_string()), "localhost:8080");
//!
//! let missing = of_nullable(lookup("user"));
//! assert!(missing.get().is_err());
//! ```
//!
//! The same operations are available as free functions in [`ops`], taking
//! the optional value as their last argument.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combine;
pub mod error;
pub mod lift;
pub mod ops;
pub mod optional;
pub mod testing;

// Re-exports
pub use combine::{combine, CombineAll};
pub use error::EmptyValueError;
pub use lift::{Falsy, Nullable};
pub use optional::Optional;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combine::{combine, CombineAll};
    pub use crate::error::EmptyValueError;
    pub use crate::lift::{of_nullable, of_undefinable, of_val, Falsy, Nullable};
    pub use crate::optional::Optional;
}
