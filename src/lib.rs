/*!
 * # fastread - speed reading text engine
 *
 * A Rust library for RSVP-style (rapid serial visual presentation) reading:
 * text is shown one word at a time, with a highlighted pivot letter that keeps
 * the reader's eyes still.
 *
 * ## Features
 *
 * - Chapter / paragraph / fragment text model with a global fragment index
 * - Binary-search lookup of any fragment by its global index
 * - Jumps to the previous/next sentence, paragraph and chapter
 * - Forward iteration over all fragments
 * - Several pivot letter strategies (length buckets, middle, quarter, roots, logarithm)
 * - Configurable reading speed and sentence pauses
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text`: the structured text model:
 *   - `text::fragment`: fragments, delimiters and pivot letter selection
 *   - `text::structured_text`: the indexed hierarchy, lookup and navigation
 *   - `text::cursor`: forward iteration protocol
 *   - `text::assembler`: streaming construction from tokenizer output
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod text;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError, TextError};
pub use text::{
    Chapter, Delimiter, Fragment, FragmentCursor, IndexedFragment, Paragraph,
    PivotCalculationMethod, StructuredText, StructuredTextBuilder, TextAssembler,
};
