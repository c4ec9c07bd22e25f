//! # Service Layer
//!
//! Thin wrappers around the store capability set. Each operation issues one
//! store call and re-wraps any failure as `General`, so the boundary handler
//! can rely on a single failure contract regardless of the originating layer.

mod quote;

pub use quote::QuoteService;
