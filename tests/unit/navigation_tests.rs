/*!
 * Tests for chapter, paragraph and sentence navigation
 */

use fastread::text::{FragmentRange, StructuredText};
use crate::common;

#[test]
fn test_previousChapterStartIndex_insideSecondChapter_shouldReturnFirstChapterStart() {
    let text = common::two_chapter_text();
    assert_eq!(text.previous_chapter_start_index(7), 0);
    assert_eq!(text.previous_chapter_start_index(5), 0);
}

#[test]
fn test_previousChapterStartIndex_firstChapter_shouldClampToItsStart() {
    let text = common::two_chapter_text();
    assert_eq!(text.previous_chapter_start_index(0), 0);
    assert_eq!(text.previous_chapter_start_index(3), 0);
}

#[test]
fn test_nextChapterStartIndex_shouldJumpToFollowingChapter() {
    let text = common::two_chapter_text();
    assert_eq!(text.next_chapter_start_index(2), 5);
    assert_eq!(text.next_chapter_start_index(4), 5);
}

#[test]
fn test_nextChapterStartIndex_lastChapter_shouldReturnIndexUnchanged() {
    let text = common::two_chapter_text();
    assert_eq!(text.next_chapter_start_index(9), 9);
    assert_eq!(text.next_chapter_start_index(6), 6);
}

#[test]
fn test_chapterNavigation_outOfRange_shouldReturnIndexUnchanged() {
    let text = common::two_chapter_text();
    assert_eq!(text.previous_chapter_start_index(42), 42);
    assert_eq!(text.next_chapter_start_index(42), 42);

    let empty = StructuredText::builder().finalize();
    assert_eq!(empty.previous_chapter_start_index(0), 0);
    assert_eq!(empty.next_chapter_start_index(0), 0);
}

#[test]
fn test_chapterNavigation_threeChapters_shouldStepOneChapterAtATime() {
    // Ch1: 0-3, Ch2: 4-5, Ch3: 6-11
    let text = common::text_from_layout(&[&[2, 2], &[2], &[3, 3]]);

    assert_eq!(text.next_chapter_start_index(0), 4);
    assert_eq!(text.next_chapter_start_index(4), 6);
    assert_eq!(text.next_chapter_start_index(11), 11);
    assert_eq!(text.previous_chapter_start_index(10), 4);
    assert_eq!(text.previous_chapter_start_index(5), 0);
}

#[test]
fn test_nextParagraphStartIndex_shouldStayWithinChapter() {
    // Ch1: paragraphs 0-9, 10-14, 15-20; Ch2: 21-22
    let text = common::text_from_layout(&[&[10, 5, 6], &[2]]);
    let chapter = &text.chapters()[0];
    assert_eq!(chapter.first_fragment_number(), Some(0));
    assert_eq!(chapter.last_fragment_number(), Some(20));

    assert_eq!(text.next_paragraph_start_index(12), 15);
    assert_eq!(text.next_paragraph_start_index(3), 10);
    // Last paragraph of the chapter: no crossing into Ch2
    assert_eq!(text.next_paragraph_start_index(17), 17);
    assert_eq!(text.next_paragraph_start_index(22), 22);
}

#[test]
fn test_previousParagraphStartIndex_shouldStepBackWithinChapter() {
    let text = common::text_from_layout(&[&[10, 5, 6], &[2]]);

    assert_eq!(text.previous_paragraph_start_index(12), 0);
    assert_eq!(text.previous_paragraph_start_index(15), 10);
    assert_eq!(text.previous_paragraph_start_index(20), 10);
    // First paragraph of a chapter clamps to its own start
    assert_eq!(text.previous_paragraph_start_index(4), 0);
    assert_eq!(text.previous_paragraph_start_index(22), 21);
}

#[test]
fn test_paragraphNavigation_outOfRange_shouldReturnIndexUnchanged() {
    let text = common::text_from_layout(&[&[3]]);
    assert_eq!(text.previous_paragraph_start_index(3), 3);
    assert_eq!(text.next_paragraph_start_index(100), 100);
}

#[test]
fn test_navigation_shouldBeIdempotentAtEdges() {
    let text = common::text_from_layout(&[&[2, 3], &[4]]);
    let last = text.total_fragments_count() - 1;

    let start = text.previous_chapter_start_index(0);
    assert_eq!(text.previous_chapter_start_index(start), start);

    let end = text.next_chapter_start_index(last);
    assert_eq!(end, last);
    assert_eq!(text.next_chapter_start_index(end), end);
}

#[test]
fn test_nextSentenceStartIndex_shouldFollowSentenceDelimiters() {
    // One two. | Three four five! | Six?
    let text = common::sentences_text();

    assert_eq!(text.next_sentence_start_index(0), 2);
    assert_eq!(text.next_sentence_start_index(1), 2);
    assert_eq!(text.next_sentence_start_index(2), 5);
    // Last sentence: nothing follows
    assert_eq!(text.next_sentence_start_index(5), 5);
    assert_eq!(text.next_sentence_start_index(9), 9);
}

#[test]
fn test_previousSentenceStartIndex_shouldStepBackOneSentence() {
    let text = common::sentences_text();

    assert_eq!(text.previous_sentence_start_index(5), 2);
    assert_eq!(text.previous_sentence_start_index(4), 0);
    assert_eq!(text.previous_sentence_start_index(2), 0);
    // First sentence clamps to its start
    assert_eq!(text.previous_sentence_start_index(1), 0);
    assert_eq!(text.previous_sentence_start_index(9), 9);
}
