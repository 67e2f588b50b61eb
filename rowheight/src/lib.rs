//! A headless row-height measurement cache for sectioned list UIs.
//!
//! Measuring an auto-sized row means instantiating and laying out its template, which is
//! expensive. This crate memoizes those measurements and keeps them valid while the hosted
//! list is edited (sections and rows inserted, deleted, reloaded, exchanged, moved) without
//! flushing the whole cache.
//!
//! It is UI-agnostic. A widget layer is expected to provide:
//! - one [`ListEdit`] per structural edit it applies to the hosted list, in the same order
//! - measured heights (see the `rowheight-adapter` crate for the measure-on-miss workflow)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod edit;
mod index_cache;
mod key_cache;
mod types;


pub use edit::ListEdit;
pub use index_cache::IndexPathHeightCache;
pub use key_cache::{CacheKey, KeyHeightCache};
pub use types::{Height, IndexPath};
