/*!
 * Forward iteration over a structured text.
 *
 * [`FragmentCursor`] is a plain set of positions (chapter, paragraph within the
 * chapter, fragment within the paragraph) advanced explicitly against the text
 * it was created from. [`Fragments`] wraps it into a standard iterator.
 */

use crate::text::structured_text::{IndexedFragment, Paragraph, StructuredText};

/// Position of one fragment inside the chapter / paragraph / fragment hierarchy
#[derive(Debug, Clone, Copy)]
pub struct FragmentCursor {
    chapter: usize,
    paragraph: usize,
    fragment: usize,
    chapters_count: usize,
}

impl FragmentCursor {
    /// Cursor on the first fragment of `text`, terminal if the text has no chapters
    pub fn begin(text: &StructuredText) -> Self {
        Self {
            chapter: 0,
            paragraph: 0,
            fragment: 0,
            chapters_count: text.chapters_count(),
        }
    }

    /// Terminal cursor for `text`
    pub fn end(text: &StructuredText) -> Self {
        let chapters_count = text.chapters_count();
        Self {
            chapter: chapters_count,
            paragraph: 0,
            fragment: 0,
            chapters_count,
        }
    }

    pub fn chapter(&self) -> usize {
        self.chapter
    }

    pub fn paragraph(&self) -> usize {
        self.paragraph
    }

    pub fn fragment(&self) -> usize {
        self.fragment
    }

    /// True once the cursor moved past the last chapter
    pub fn is_terminal(&self) -> bool {
        self.chapter >= self.chapters_count
    }

    fn current_paragraph<'a>(&self, text: &'a StructuredText) -> Option<&'a Paragraph> {
        text.chapters()
            .get(self.chapter)?
            .paragraphs()
            .get(self.paragraph)
    }

    /// Fragment under the cursor.
    ///
    /// `None` for a terminal cursor, and for positions that point into an empty
    /// container (possible only for texts that were never normalised).
    pub fn get<'a>(&self, text: &'a StructuredText) -> Option<&'a IndexedFragment> {
        self.current_paragraph(text)?.fragments().get(self.fragment)
    }

    /// Step to the next fragment, crossing paragraph and chapter boundaries
    pub fn advance(&mut self, text: &StructuredText) {
        if self.is_terminal() {
            return;
        }

        self.fragment += 1;
        let paragraph_len = self.current_paragraph(text).map_or(0, Paragraph::len);
        if self.fragment < paragraph_len {
            return;
        }

        self.fragment = 0;
        self.paragraph += 1;
        let paragraphs_count = text
            .chapters()
            .get(self.chapter)
            .map_or(0, |chapter| chapter.paragraphs_count());
        if self.paragraph < paragraphs_count {
            return;
        }

        self.paragraph = 0;
        self.chapter += 1;
    }
}

impl PartialEq for FragmentCursor {
    /// Terminal cursors compare equal regardless of their lower positions
    fn eq(&self, other: &Self) -> bool {
        (self.is_terminal() && other.is_terminal() && self.chapter == other.chapter)
            || (self.chapter == other.chapter
                && self.paragraph == other.paragraph
                && self.fragment == other.fragment)
    }
}

impl Eq for FragmentCursor {}

/// Iterator over every fragment of a text in global index order
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    text: &'a StructuredText,
    cursor: FragmentCursor,
}

impl<'a> Fragments<'a> {
    pub fn new(text: &'a StructuredText) -> Self {
        Self {
            text,
            cursor: text.begin(),
        }
    }

    /// Position of the next fragment to be yielded
    pub fn cursor(&self) -> FragmentCursor {
        self.cursor
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a IndexedFragment;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.cursor.is_terminal() {
            let current = self.cursor.get(self.text);
            self.cursor.advance(self.text);
            if current.is_some() {
                return current;
            }
        }
        None
    }
}
