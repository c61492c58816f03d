/*!
 * Tests for structured text construction and indexed lookup
 */

use fastread::errors::TextError;
use fastread::text::{
    Chapter, Delimiter, Fragment, FragmentRange, IndexedFragment, Paragraph, StructuredText,
};
use crate::common;

#[test]
fn test_emptyText_shouldReportNoFragments() {
    let text = StructuredText::builder().finalize();

    assert!(text.is_empty());
    assert_eq!(text.total_fragments_count(), 0);
    assert_eq!(text.chapters_count(), 0);
    assert!(text.fragment(0).is_none());
    assert!(text.validate().is_ok());
}

#[test]
fn test_addChapter_shouldAppendInOrder() {
    let text = common::two_chapter_text();

    assert_eq!(text.chapters_count(), 2);
    assert_eq!(text.chapters()[0].name(), "Ch1");
    assert_eq!(text.chapters()[1].name(), "Ch2");
    assert_eq!(text.chapters()[1].first_fragment_number(), Some(5));
    assert_eq!(text.chapters()[1].last_fragment_number(), Some(9));
    assert_eq!(text.total_fragments_count(), 10);
    assert!(!text.is_empty());
}

#[test]
fn test_addEmptyChapter_shouldAllowIncrementalFilling() {
    let mut builder = StructuredText::builder();
    let chapter = builder.add_empty_chapter("Streaming");
    let mut paragraph = Paragraph::new();
    paragraph.push(IndexedFragment::new(Fragment::word_only("first"), 0));
    paragraph.push(IndexedFragment::new(Fragment::word_only("second"), 1));
    chapter.push_paragraph(paragraph);

    let text = builder.finalize();
    assert_eq!(text.total_fragments_count(), 2);
    assert_eq!(text.fragment(1).map(Fragment::word), Some("second"));
}

#[test]
fn test_clear_shouldRemoveAllChapters() {
    let mut builder = StructuredText::builder();
    builder.add_chapter("Ch1", vec![common::paragraph(0..3)]);
    builder.add_chapter("Ch2", vec![common::paragraph(3..4)]);
    builder.clear();

    assert!(builder.chapters().is_empty());
    assert!(builder.finalize().is_empty());
}

#[test]
fn test_removeEmptyItems_shouldDropEmptyContainersAndKeepCount() {
    let mut builder = StructuredText::builder();
    builder.add_empty_chapter("Preface");
    builder.add_chapter(
        "Ch1",
        vec![Paragraph::new(), common::paragraph(0..3), Paragraph::new()],
    );
    builder.add_chapter("Blank", vec![Paragraph::new(), Paragraph::new()]);
    builder.add_chapter("Ch2", vec![common::paragraph(3..6)]);
    builder.add_empty_chapter("Epilogue");

    let count_before = builder.total_fragments_count();
    builder.remove_empty_items();

    assert_eq!(builder.total_fragments_count(), count_before);
    let names: Vec<&str> = builder.chapters().iter().map(Chapter::name).collect();
    assert_eq!(names, vec!["Ch1", "Ch2"]);
    for chapter in builder.chapters() {
        assert!(chapter.paragraphs_count() > 0);
        assert!(chapter.paragraphs().iter().all(|p| !p.is_empty()));
    }

    let text = builder.finalize();
    assert_eq!(text.total_fragments_count(), 6);
    assert!(text.validate().is_ok());
}

#[test]
fn test_fragment_shouldFindEveryIndexAcrossLevels() {
    let text = common::text_from_layout(&[&[3, 1, 4], &[2], &[1, 5]]);
    assert_eq!(text.total_fragments_count(), 16);

    for index in 0..text.total_fragments_count() {
        let indexed = text.indexed_fragment(index).expect("index in range");
        assert_eq!(indexed.global_index, index);
        assert_eq!(indexed.fragment.word(), format!("word{}", index));
    }
}

#[test]
fn test_fragment_outOfRange_shouldReturnNone() {
    let text = common::two_chapter_text();

    assert!(text.fragment(10).is_none());
    assert!(text.fragment(usize::MAX).is_none());
    assert_eq!(
        text.try_fragment(10),
        Err(TextError::IndexOutOfRange { index: 10, total: 10 })
    );
    assert_eq!(text.try_fragment(9).map(Fragment::word), Ok("word9"));
}

#[test]
fn test_fragment_shouldMatchIteratorOrder() {
    let text = common::text_from_layout(&[&[2, 2], &[3], &[1, 1, 1]]);

    for (position, indexed) in text.iter().enumerate() {
        assert_eq!(text.fragment(position), Some(&indexed.fragment));
    }
}

#[test]
fn test_validate_indexGap_shouldReportExpectedIndex() {
    let mut builder = StructuredText::builder();
    builder.add_chapter("Ch1", vec![common::paragraph(0..3)]);
    builder.add_chapter("Ch2", vec![common::paragraph(4..6)]);

    let text = builder.finalize();
    assert_eq!(
        text.validate(),
        Err(TextError::IndexGap { expected: 3, found: 4 })
    );
}

#[test]
fn test_validate_notStartingAtZero_shouldFail() {
    let mut builder = StructuredText::builder();
    builder.add_chapter("Ch1", vec![common::paragraph(1..3)]);

    assert!(matches!(
        builder.finalize().validate(),
        Err(TextError::IndexGap { expected: 0, found: 1 })
    ));
}

#[test]
fn test_totalFragmentsCount_shouldUseLastIndex() {
    let mut builder = StructuredText::builder();
    builder.add_chapter(
        "Ch1",
        vec![Paragraph::from_fragments(vec![IndexedFragment::new(
            Fragment::new("Only", ".", Delimiter::Period),
            0,
        )])],
    );
    let text = builder.finalize();

    assert_eq!(text.total_fragments_count(), 1);
    assert_eq!(text.chapters()[0].fragments_count(), 1);
}

#[test]
fn test_intoIterator_shouldYieldAllFragments() {
    let text = common::two_chapter_text();
    let mut count = 0;
    for indexed in &text {
        assert_eq!(indexed.global_index, count);
        count += 1;
    }
    assert_eq!(count, 10);
}
