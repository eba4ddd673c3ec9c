//! Tests for the fence scanner

use codefence::{FenceKind, extract};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_nested_fence_of_other_family_is_absorbed() {
    let doc = "````markdown\nOuter\n~~~python\nprint(1)\n~~~\n````";
    let blocks = extract(doc);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].language.as_deref(), Some("markdown"));
    assert_eq!(blocks[0].fence_kind, FenceKind::Backtick);
    assert_eq!(blocks[0].fence_length, 4);
    assert!(blocks[0].is_closed);
    assert!(blocks[0].content.contains("~~~python"));
    assert_eq!(blocks[0].content, "Outer\n~~~python\nprint(1)\n~~~");
}

#[test]
fn test_sequential_blocks() {
    let doc = "```python\ncode\n```\n```python\ncode\n```";
    let blocks = extract(doc);

    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.nesting_level == 0));
    assert_eq!((blocks[0].start_line, blocks[0].end_line), (1, 3));
    assert_eq!((blocks[1].start_line, blocks[1].end_line), (4, 6));
    assert!(blocks[0].end_line < blocks[1].start_line);
}

#[test]
fn test_unclosed_block_runs_to_last_line() {
    let doc = "```python\nunfinished";
    let blocks = extract(doc);

    assert_eq!(blocks.len(), 1);
    assert!(!blocks[0].is_closed);
    assert_eq!(blocks[0].end_line, 2);
    assert_eq!(blocks[0].content, "unfinished");
    assert_eq!(blocks[0].raw_content, doc);
}

#[test]
fn test_same_family_inner_opener_is_content() {
    let doc = "````md\n```rust\nfn f() {}\n```\n````\n";
    let blocks = extract(doc);

    // The inner ``` closer is shorter than the ```` opener, so it is content.
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "```rust\nfn f() {}\n```");
    assert_eq!(blocks[0].end_line, 5);
}

#[test]
fn test_equal_length_inner_fence_closes_outer() {
    let doc = "```md\n```rust\nlet a = 1;\n```\n";
    let blocks = extract(doc);

    // "```rust" carries an info string so it cannot close; it becomes
    // content and the bare fence on line 4 closes the block.
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].content, "```rust\nlet a = 1;");
    assert_eq!(blocks[0].end_line, 4);
}

#[test]
fn test_longer_closer_is_accepted() {
    let blocks = extract("~~~\nx\n~~~~~~\n");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_closed);
    assert_eq!(blocks[0].language, None);
}

#[test]
fn test_indented_fence_tracks_indent() {
    let blocks = extract("- item\n\n    ```toml\n    a = 1\n    ```\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].indent, 4);
    assert_eq!(blocks[0].content, "    a = 1");
    assert_eq!(blocks[0].language.as_deref(), Some("toml"));
}

#[test]
fn test_info_string_attributes() {
    let blocks = extract("```Rust,ignore {.numberLines}\nx\n```");
    assert_eq!(blocks[0].language.as_deref(), Some("rust,ignore"));
    assert_eq!(blocks[0].info.as_deref(), Some("Rust,ignore {.numberLines}"));
}

#[test]
fn test_offsets_reproduce_raw_content() {
    let doc = "intro\n\n```js\nlet x;\n\nlet y;\n```\n\noutro\n~~~\nz\n~~~\n";
    for block in extract(doc) {
        assert_eq!(&doc[block.start_offset..block.end_offset], block.raw_content);
    }
}

#[rstest]
#[case("")]
#[case("plain text\nno fences here\n")]
#[case("``not a fence``\n~~ nor this")]
#[case("`inline` code only")]
#[case("text ``` in the middle")]
fn test_documents_without_fences(#[case] doc: &str) {
    assert!(extract(doc).is_empty());
}

#[rstest]
#[case("```\n```", 1, "")]
#[case("```a\n```\n```b\n```", 2, "")]
#[case("~~~\nline\n~~~", 1, "line")]
#[case("```\n\n\n```", 1, "\n")]
fn test_block_counts(#[case] doc: &str, #[case] count: usize, #[case] first_content: &str) {
    let blocks = extract(doc);
    assert_eq!(blocks.len(), count);
    assert_eq!(blocks[0].content, first_content);
}
