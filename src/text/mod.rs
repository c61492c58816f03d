/*!
 * Structured text model for the reader.
 *
 * - `fragment`: displayable units and pivot letter selection
 * - `structured_text`: the chapter / paragraph / fragment index and navigation
 * - `cursor`: forward iteration over all fragments
 * - `assembler`: streaming construction from tokenizer output
 */

pub mod assembler;
pub mod cursor;
pub mod fragment;
pub mod structured_text;

// Re-export types used by other modules
pub use assembler::TextAssembler;
pub use cursor::{FragmentCursor, Fragments};
pub use fragment::{Delimiter, Fragment, PivotCalculationMethod};
pub use structured_text::{
    Chapter, FragmentRange, IndexedFragment, Paragraph, StructuredText, StructuredTextBuilder,
    find_containing,
};
