/*!
 * Streaming construction of a structured text from tokenizer output.
 *
 * The tokenizer hands over (word, punctuation, delimiter) triples along with
 * chapter and paragraph boundaries. The assembler numbers the fragments as they
 * arrive, so callers never deal with global indices themselves.
 */

use log::{debug, trace};

use crate::text::fragment::{Delimiter, Fragment};
use crate::text::structured_text::{IndexedFragment, Paragraph, StructuredText, StructuredTextBuilder};

/// Incremental builder that assigns global fragment indices
#[derive(Debug, Default)]
pub struct TextAssembler {
    builder: StructuredTextBuilder,
    next_index: usize,
    paragraph_open: bool,
    skipped_empty: usize,
}

impl TextAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new chapter; later fragments go into it
    pub fn begin_chapter(&mut self, name: impl Into<String>) {
        let name = name.into();
        trace!("Chapter \"{}\" starts at fragment {}", name, self.next_index);
        self.builder.add_empty_chapter(name);
        self.paragraph_open = false;
    }

    /// Close the current paragraph; the next fragment opens a new one
    pub fn end_paragraph(&mut self) {
        self.paragraph_open = false;
    }

    /// Append a fragment to the current paragraph.
    ///
    /// Empty fragments carry nothing to display and get no index. A chapter
    /// with an empty name is opened if none was started yet.
    pub fn push_fragment(&mut self, fragment: Fragment) {
        if fragment.is_empty() {
            self.skipped_empty += 1;
            return;
        }

        let chapter = self.builder.current_chapter_mut();
        if !self.paragraph_open {
            chapter.push_paragraph(Paragraph::new());
        }
        chapter
            .last_paragraph_mut()
            .push(IndexedFragment::new(fragment, self.next_index));

        self.next_index += 1;
        self.paragraph_open = true;
    }

    /// Convenience wrapper around [`TextAssembler::push_fragment`]
    pub fn push(&mut self, word: &str, punctuation: &str, delimiter: Delimiter) {
        self.push_fragment(Fragment::new(word, punctuation, delimiter));
    }

    /// Number of fragments indexed so far
    pub fn fragments_count(&self) -> usize {
        self.next_index
    }

    /// Normalise and freeze the assembled text
    pub fn finish(self) -> StructuredText {
        if self.skipped_empty > 0 {
            debug!("Skipped {} empty fragment(s) while assembling", self.skipped_empty);
        }
        self.builder.finalize()
    }
}
