//! # chain-core
//!
//! Core types and traits for the request chain: [`Request`], [`Outcome`], the [`Handler`] trait with its
//! [`Successor`] link and [`forward_or_complete`], error types, and tracing initialization.
//! Used by handler-chain, handlers and chain-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChainError, Result};
pub use logger::init_tracing;
pub use types::{forward_or_complete, Handler, Outcome, Request, Successor};
