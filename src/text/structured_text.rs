/*!
 * Chapter / paragraph / fragment hierarchy with a global fragment index.
 *
 * Every fragment carries its position in the flattened text. Indices grow
 * strictly in chapter, then paragraph, then fragment order, which lets every
 * lookup run as a binary search on the last index of each container.
 *
 * The text is built through a [`StructuredTextBuilder`] and frozen with
 * [`StructuredTextBuilder::finalize`]; the resulting [`StructuredText`] is
 * read-only.
 */

use log::{debug, trace, warn};

use crate::errors::TextError;
use crate::text::cursor::{FragmentCursor, Fragments};
use crate::text::fragment::Fragment;

/// A fragment paired with its position in the whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFragment {
    pub fragment: Fragment,
    pub global_index: usize,
}

impl IndexedFragment {
    pub fn new(fragment: Fragment, global_index: usize) -> Self {
        Self {
            fragment,
            global_index,
        }
    }
}

/// A container spanning a contiguous range of global fragment indices
pub trait FragmentRange {
    /// Index of the first fragment, `None` when the container is empty
    fn first_fragment_number(&self) -> Option<usize>;

    /// Index of the last fragment, `None` when the container is empty
    fn last_fragment_number(&self) -> Option<usize>;
}

impl FragmentRange for IndexedFragment {
    fn first_fragment_number(&self) -> Option<usize> {
        Some(self.global_index)
    }

    fn last_fragment_number(&self) -> Option<usize> {
        Some(self.global_index)
    }
}

/// Position of the first container whose last index is `>= index`.
///
/// The slice must be sorted by global index. `None` when every container ends
/// before `index`.
pub fn find_containing<T: FragmentRange>(items: &[T], index: usize) -> Option<usize> {
    let position =
        items.partition_point(|item| item.last_fragment_number().is_some_and(|last| last < index));
    (position < items.len()).then_some(position)
}

/// Ordered run of fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    fragments: Vec<IndexedFragment>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fragments(fragments: Vec<IndexedFragment>) -> Self {
        Self { fragments }
    }

    pub fn push(&mut self, fragment: IndexedFragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[IndexedFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FragmentRange for Paragraph {
    fn first_fragment_number(&self) -> Option<usize> {
        self.fragments.first().map(|f| f.global_index)
    }

    fn last_fragment_number(&self) -> Option<usize> {
        self.fragments.last().map(|f| f.global_index)
    }
}

/// Named, ordered run of paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    name: String,
    paragraphs: Vec<Paragraph>,
}

impl Chapter {
    pub fn new(name: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            name: name.into(),
            paragraphs,
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Last paragraph, opening one if the chapter has none yet
    pub fn last_paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    pub fn paragraphs_count(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn fragments_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::len).sum()
    }

    fn remove_empty_paragraphs(&mut self) -> usize {
        let before = self.paragraphs.len();
        self.paragraphs.retain(|p| !p.is_empty());
        before - self.paragraphs.len()
    }
}

impl FragmentRange for Chapter {
    fn first_fragment_number(&self) -> Option<usize> {
        self.paragraphs.first()?.first_fragment_number()
    }

    fn last_fragment_number(&self) -> Option<usize> {
        self.paragraphs.last()?.last_fragment_number()
    }
}

// Scans backwards past empty trailing containers
fn total_fragments_count(chapters: &[Chapter]) -> usize {
    chapters
        .iter()
        .rev()
        .flat_map(|chapter| chapter.paragraphs.iter().rev())
        .find_map(Paragraph::last_fragment_number)
        .map_or(0, |last| last + 1)
}

/// Load-phase container; the only place chapters can be appended or removed
#[derive(Debug, Clone, Default)]
pub struct StructuredTextBuilder {
    chapters: Vec<Chapter>,
}

impl StructuredTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully formed chapter.
    ///
    /// The caller assigns the global indices of its fragments.
    pub fn add_chapter(&mut self, name: impl Into<String>, paragraphs: Vec<Paragraph>) {
        self.chapters.push(Chapter::new(name, paragraphs));
    }

    pub fn add_chapter_value(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Append an empty chapter and hand it back for incremental filling
    pub fn add_empty_chapter(&mut self, name: impl Into<String>) -> &mut Chapter {
        self.chapters.push(Chapter::empty(name));
        let last = self.chapters.len() - 1;
        &mut self.chapters[last]
    }

    /// Last chapter, opening an unnamed one if there is none yet
    pub fn current_chapter_mut(&mut self) -> &mut Chapter {
        if self.chapters.is_empty() {
            self.chapters.push(Chapter::empty(String::new()));
        }
        let last = self.chapters.len() - 1;
        &mut self.chapters[last]
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn total_fragments_count(&self) -> usize {
        total_fragments_count(&self.chapters)
    }

    pub fn clear(&mut self) {
        self.chapters.clear();
    }

    /// Drop paragraphs without fragments, then chapters left without paragraphs
    pub fn remove_empty_items(&mut self) {
        let removed_paragraphs: usize = self
            .chapters
            .iter_mut()
            .map(Chapter::remove_empty_paragraphs)
            .sum();

        let chapters_before = self.chapters.len();
        self.chapters.retain(|c| c.paragraphs_count() > 0);

        debug!(
            "Removed {} empty paragraph(s) and {} empty chapter(s)",
            removed_paragraphs,
            chapters_before - self.chapters.len()
        );
    }

    /// Normalise and freeze the text
    pub fn finalize(mut self) -> StructuredText {
        self.remove_empty_items();
        let text = StructuredText {
            chapters: self.chapters,
        };
        debug!(
            "Finalized text: {} chapter(s), {} fragment(s)",
            text.chapters_count(),
            text.total_fragments_count()
        );
        text
    }
}

/// Read-only chapter / paragraph / fragment hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredText {
    chapters: Vec<Chapter>,
}

impl StructuredText {
    pub fn builder() -> StructuredTextBuilder {
        StructuredTextBuilder::new()
    }

    #[cfg(test)]
    pub(crate) fn from_chapters_unchecked(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapters_count(&self) -> usize {
        self.chapters.len()
    }

    /// Number of fragments: one past the global index of the last fragment
    pub fn total_fragments_count(&self) -> usize {
        total_fragments_count(&self.chapters)
    }

    pub fn is_empty(&self) -> bool {
        self.total_fragments_count() == 0
    }

    fn locate_chapter(&self, index: usize) -> Option<usize> {
        find_containing(&self.chapters, index)
    }

    fn locate_paragraph(&self, chapter: usize, index: usize) -> Option<usize> {
        find_containing(&self.chapters[chapter].paragraphs, index)
    }

    /// Fragment at a global index together with that index
    pub fn indexed_fragment(&self, index: usize) -> Option<&IndexedFragment> {
        let located = self.locate_chapter(index).and_then(|chapter| {
            let paragraph = self.locate_paragraph(chapter, index)?;
            let fragments = &self.chapters[chapter].paragraphs[paragraph].fragments;
            fragments.get(find_containing(fragments, index)?)
        });

        if located.is_none() {
            warn!(
                "No fragment at index {} (total fragments: {})",
                index,
                self.total_fragments_count()
            );
        }
        located
    }

    /// Fragment at a global index, `None` outside of `[0, total_fragments_count())`
    pub fn fragment(&self, index: usize) -> Option<&Fragment> {
        self.indexed_fragment(index).map(|f| &f.fragment)
    }

    /// Checked variant of [`StructuredText::fragment`]
    pub fn try_fragment(&self, index: usize) -> Result<&Fragment, TextError> {
        self.fragment(index).ok_or(TextError::IndexOutOfRange {
            index,
            total: self.total_fragments_count(),
        })
    }

    /// Start of the chapter before the one containing `index`.
    ///
    /// Clamps to the start of the first chapter; returns `index` unchanged when
    /// it is outside the text.
    pub fn previous_chapter_start_index(&self, index: usize) -> usize {
        let Some(chapter) = self.locate_chapter(index) else {
            return index;
        };

        self.chapters[chapter.saturating_sub(1)]
            .first_fragment_number()
            .unwrap_or(index)
    }

    /// Start of the chapter after the one containing `index`, or `index` itself
    pub fn next_chapter_start_index(&self, index: usize) -> usize {
        self.locate_chapter(index)
            .and_then(|chapter| self.chapters.get(chapter + 1))
            .and_then(Chapter::first_fragment_number)
            .unwrap_or(index)
    }

    /// Start of the paragraph before the one containing `index`.
    ///
    /// Stays within the containing chapter: clamps to the start of its first
    /// paragraph.
    pub fn previous_paragraph_start_index(&self, index: usize) -> usize {
        let Some(chapter) = self.locate_chapter(index) else {
            return index;
        };
        let Some(paragraph) = self.locate_paragraph(chapter, index) else {
            return index;
        };

        self.chapters[chapter].paragraphs[paragraph.saturating_sub(1)]
            .first_fragment_number()
            .unwrap_or(index)
    }

    /// Start of the next paragraph in the same chapter, or `index` itself
    pub fn next_paragraph_start_index(&self, index: usize) -> usize {
        let Some(chapter) = self.locate_chapter(index) else {
            return index;
        };

        self.locate_paragraph(chapter, index)
            .and_then(|paragraph| self.chapters[chapter].paragraphs.get(paragraph + 1))
            .and_then(Paragraph::first_fragment_number)
            .unwrap_or(index)
    }

    /// First index of the sentence containing `index`
    fn sentence_start(&self, index: usize) -> usize {
        (0..index)
            .rev()
            .find(|&i| self.fragment(i).is_some_and(Fragment::is_end_of_sentence))
            .map_or(0, |end| end + 1)
    }

    /// Start of the sentence before the one containing `index`.
    ///
    /// Clamps to the start of the first sentence; returns `index` unchanged
    /// when it is outside the text.
    pub fn previous_sentence_start_index(&self, index: usize) -> usize {
        if index >= self.total_fragments_count() {
            return index;
        }

        let current = self.sentence_start(index);
        if current == 0 {
            0
        } else {
            self.sentence_start(current - 1)
        }
    }

    /// Start of the sentence after the one containing `index`, or `index` itself
    pub fn next_sentence_start_index(&self, index: usize) -> usize {
        let total = self.total_fragments_count();
        (index..total)
            .find(|&i| self.fragment(i).is_some_and(Fragment::is_end_of_sentence))
            .map(|end| end + 1)
            .filter(|&next| next < total)
            .unwrap_or(index)
    }

    /// Cursor on the first fragment
    pub fn begin(&self) -> FragmentCursor {
        FragmentCursor::begin(self)
    }

    /// Terminal cursor
    pub fn end(&self) -> FragmentCursor {
        FragmentCursor::end(self)
    }

    /// Every fragment in global index order
    pub fn iter(&self) -> Fragments<'_> {
        Fragments::new(self)
    }

    /// Check that indices run from 0 without gaps and no container is empty
    pub fn validate(&self) -> Result<(), TextError> {
        let mut expected = 0;
        for (chapter_position, chapter) in self.chapters.iter().enumerate() {
            if chapter.paragraphs.is_empty() {
                return Err(TextError::EmptyChapter {
                    chapter: chapter_position,
                    name: chapter.name.clone(),
                });
            }

            for (paragraph_position, paragraph) in chapter.paragraphs.iter().enumerate() {
                if paragraph.is_empty() {
                    return Err(TextError::EmptyParagraph {
                        chapter: chapter_position,
                        paragraph: paragraph_position,
                    });
                }

                for fragment in &paragraph.fragments {
                    if fragment.global_index != expected {
                        return Err(TextError::IndexGap {
                            expected,
                            found: fragment.global_index,
                        });
                    }
                    expected += 1;
                }
            }
        }

        trace!("Validated {} fragment(s)", expected);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StructuredText {
    type Item = &'a IndexedFragment;
    type IntoIter = Fragments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
