//! # bcgen-core
//!
//! Shared data model for barcode generation: the [Sequence] and [Pool] types,
//! the two acceptance predicates in [constraints], request validation, and the
//! common error type.
//!
//! ```rust
//! use bcgen_core::models::{Pool, Sequence};
//!
//! let mut pool = Pool::new(3);
//! assert!(pool.try_insert(Sequence::try_from("ACA").unwrap()));
//! // one mismatch away from ACA
//! assert!(!pool.try_insert(Sequence::try_from("ACG").unwrap()));
//! ```
pub mod consts;
pub mod constraints;
pub mod errors;
pub mod models;
pub mod utils;

pub use constraints::PoolView;
pub use errors::{BarcodeError, Result};
pub use models::{GenerationRequest, Pool, Sequence};
