//! idlc-util - Core Utilities and Foundation Types
//!
//! Shared foundation for the IDL compiler crates:
//!
//! - [`span`] - [`Span`] locations and [`SourceFile`] line lookup
//! - [`diagnostic`] - [`Diagnostic`] values, rendering and the [`Handler`] collector
//! - [`error`] - error types for fallible utility operations
//!
//! The lexer depends only on [`Span`]; front ends use the rest to turn
//! illegal tokens into readable reports.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
