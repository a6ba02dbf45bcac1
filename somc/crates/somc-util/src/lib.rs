//! somc-util - Foundation types shared by the SOM front end
//!
//! This crate holds the pieces every phase of the front end needs but none
//! of them owns:
//!
//! - [`span`] - byte ranges with line/column information, plus a
//!   [`SourceMap`] for turning a span back into a source excerpt
//! - [`diagnostic`] - errors and warnings, the fluent
//!   [`DiagnosticBuilder`], stable [`DiagnosticCode`]s and the collecting
//!   [`Handler`]
//! - [`error`] - error types for the utility operations themselves
//!
//! # Example
//!
//! ```
//! use somc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '$'")
//!     .code(DiagnosticCode::E_LEXER_ILLEGAL_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
