//! Integration tests for section editing.

use bffgen_blocks::{
    Error, Marker, find_sections, insert_section, remove_section, replace_section,
    summarize_markers, validate_markers,
};
use pretty_assertions::assert_eq;

#[test]
fn test_replace_preserves_surrounding_content() {
    let content = "A\n// bffgen:begin\nold\n// bffgen:end\nB";
    let section = &find_sections(content, &Marker::default()).unwrap()[0];

    let result = replace_section(content, section, "new").unwrap();

    assert_eq!(result, "A\n// bffgen:begin\nnew\n// bffgen:end\nB");
}

#[test]
fn test_replace_with_multiline_body_shifts_trailing_lines() {
    let content = "A\n// bffgen:begin\nold\n// bffgen:end\nB";
    let section = &find_sections(content, &Marker::default()).unwrap()[0];

    let result = replace_section(content, section, "one\ntwo\nthree").unwrap();

    let after = find_sections(&result, &Marker::default()).unwrap();
    assert_eq!(after[0].begin_line, 2);
    assert_eq!(after[0].end_line, 6);
    assert!(result.ends_with("// bffgen:end\nB"));
}

#[test]
fn test_replace_second_section_leaves_first_untouched() {
    let content = "// bffgen:begin\nkeep\n// bffgen:end\nmid\n// bffgen:begin\nold\n// bffgen:end";
    let sections = find_sections(content, &Marker::default()).unwrap();

    let result = replace_section(content, &sections[1], "new").unwrap();

    assert_eq!(
        result,
        "// bffgen:begin\nkeep\n// bffgen:end\nmid\n// bffgen:begin\nnew\n// bffgen:end"
    );
}

#[test]
fn test_replace_against_stale_snapshot_fails() {
    let content = "a\n// bffgen:begin\nx\n// bffgen:end\nb";
    let section = find_sections(content, &Marker::default()).unwrap().remove(0);

    let err = replace_section("a\nb", &section, "y").unwrap_err();
    assert!(matches!(err, Error::Bounds { .. }));
}

#[test]
fn test_insert_in_middle() {
    let result = insert_section("a\nb\nc", &Marker::scoped("mw"), "use(x)", 2).unwrap();

    assert_eq!(
        result,
        "a\nb\n// bffgen:begin:mw\nuse(x)\n// bffgen:end:mw\nc"
    );
}

#[test]
fn test_insert_at_end() {
    let result = insert_section("a\nb", &Marker::default(), "", 2).unwrap();

    assert_eq!(result, "a\nb\n// bffgen:begin\n// bffgen:end");
}

#[test]
fn test_remove_section_splices_content() {
    let content = "Header\n// bffgen:begin\ncontent to remove\n// bffgen:end\nFooter";
    let section = &find_sections(content, &Marker::default()).unwrap()[0];

    let result = remove_section(content, section).unwrap();

    assert_eq!(result, "Header\nFooter");
}

#[test]
fn test_remove_preserves_other_sections() {
    let content = "// bffgen:begin\nkeep\n// bffgen:end\n// bffgen:begin\ndrop\n// bffgen:end";
    let sections = find_sections(content, &Marker::default()).unwrap();

    let result = remove_section(content, &sections[1]).unwrap();

    assert_eq!(result, "// bffgen:begin\nkeep\n// bffgen:end");
}

#[test]
fn test_validate_markers() {
    assert!(validate_markers("a\n// bffgen:begin\n// bffgen:end", &Marker::default()).is_ok());
    assert!(validate_markers("no markers", &Marker::default()).is_ok());
    assert!(validate_markers("// bffgen:begin", &Marker::default()).is_err());
}

#[test]
fn test_summarize_markers() {
    let content = "x\n// bffgen:begin\na\nb\n// bffgen:end\n// bffgen:begin\n// bffgen:end";

    let summary = summarize_markers(content, &Marker::default()).unwrap();

    assert_eq!(
        summary,
        vec![
            "Section at lines 2-5 (2 lines)".to_string(),
            "Section at lines 6-7 (0 lines)".to_string(),
        ]
    );
}

#[test]
fn test_summarize_propagates_structural_error() {
    let err = summarize_markers("// bffgen:end", &Marker::default()).unwrap_err();
    assert!(matches!(err, Error::UnmatchedEnd { line: 1 }));
}
