//! Measurement workflows for the `rowheight` crate.
//!
//! The `rowheight` crate is host-agnostic and only stores heights. This crate provides the
//! measure-on-miss control flow on top of it:
//!
//! - A [`TemplateMeasurer`] seam your UI layer implements: it creates one reusable template
//!   instance per reuse identifier and lays a configured template out to produce a height.
//! - A [`HeightResolver`] that owns the template registry plus both caches and answers
//!   height queries, measuring only on a cache miss.
//!
//! This crate is intentionally framework-agnostic (no UIKit/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod measure;
mod resolver;

#[cfg(test)]
mod tests;

pub use measure::TemplateMeasurer;
pub use resolver::HeightResolver;
