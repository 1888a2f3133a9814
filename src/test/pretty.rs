use super::builder::Builder;
use crate::error::Result;
use crate::{from_bytes, pretty_print, pretty_print_indent, NbtString, Root, Tag, Value};

fn render(payload: &[u8]) -> String {
    let root = from_bytes(payload).unwrap();
    let mut out = String::new();
    pretty_print(&mut out, &root).unwrap();
    out
}

#[test]
fn worked_example_byte_in_compound() {
    let payload = [0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, 0x61, 0x05, 0x00];
    let expected = "TAG_Compound: 1 entries\n\
                    {\n    \
                        TAG_Byte(\"a\"): 5\n\
                    }\n";
    assert_eq!(render(&payload), expected);
}

#[test]
fn list_elements_are_unnamed() {
    let payload = Builder::new()
        .start_list("nums", Tag::Int, 3)
        .int_payload(1)
        .int_payload(2)
        .int_payload(3)
        .build();

    let expected = "TAG_List(\"nums\"):3 entries of type TAG_Int\n\
                    {\n    \
                        TAG_Int: 1\n    \
                        TAG_Int: 2\n    \
                        TAG_Int: 3\n\
                    }\n";
    assert_eq!(render(&payload), expected);
}

#[test]
fn named_root_scalar() {
    let payload = Builder::new().int("answer", 42).build();
    assert_eq!(render(&payload), "TAG_Int(\"answer\"): 42\n");
}

#[test]
fn compound_entries_keep_their_keys_even_when_empty() {
    let payload = Builder::new()
        .start_compound("")
        .byte("", 3)
        .end_compound()
        .build();

    let expected = "TAG_Compound: 1 entries\n\
                    {\n    \
                        TAG_Byte(\"\"): 3\n\
                    }\n";
    assert_eq!(render(&payload), expected);
}

#[test]
fn arrays_summarize_as_counts() {
    let payload = Builder::new()
        .start_compound("")
        .byte_array("ba", &[1, 2, 3, 4])
        .end_compound()
        .build();
    assert!(render(&payload).contains("TAG_Byte_Array(\"ba\"): [4 bytes]\n"));

    let payload = Builder::new()
        .start_compound("")
        .int_array("ia", &[1, 2])
        .end_compound()
        .build();
    assert!(render(&payload).contains("TAG_Int_Array(\"ia\"): [2 ints]\n"));
}

#[test]
fn string_renders_its_text() {
    let payload = Builder::new().string("s", "Bananrama").build();
    assert_eq!(render(&payload), "TAG_String(\"s\"): Bananrama\n");
}

#[test]
fn nesting_indents_one_unit_per_level() {
    let payload = Builder::new()
        .start_compound("top")
        .start_compound("inner")
        .byte("x", 1)
        .end_compound()
        .end_compound()
        .build();

    let expected = "TAG_Compound(\"top\"): 1 entries\n\
                    {\n    \
                        TAG_Compound(\"inner\"): 1 entries\n    \
                        {\n        \
                            TAG_Byte(\"x\"): 1\n    \
                        }\n\
                    }\n";
    assert_eq!(render(&payload), expected);
}

#[test]
fn custom_indent_unit() -> Result<()> {
    let payload = Builder::new()
        .start_compound("")
        .byte("a", 1)
        .end_compound()
        .build();
    let root = from_bytes(&payload)?;

    let mut out = String::new();
    pretty_print_indent(&mut out, &root, "\t").unwrap();
    assert_eq!(out, "TAG_Compound: 1 entries\n{\n\tTAG_Byte(\"a\"): 1\n}\n");
    Ok(())
}

#[test]
fn non_unicode_name_renders_lossily_without_panicking() -> Result<()> {
    let payload = Builder::new()
        .tag(Tag::String)
        .raw_name(&[0xFF, 0xFE])
        .string_payload("v")
        .build();
    let root = from_bytes(&payload)?;

    let mut out = String::new();
    pretty_print(&mut out, &root).unwrap();
    assert!(out.starts_with("TAG_String(\""));
    Ok(())
}

#[test]
fn printing_matches_decode_depth() {
    // The decoder accepts this depth, so the printer must survive it too.
    // An empty indent unit keeps the output linear in the depth.
    let mut value = Value::List(Tag::Byte, vec![]);
    for _ in 0..100_000 {
        value = Value::List(Tag::List, vec![value]);
    }
    let root = Root {
        name: NbtString::default(),
        value,
    };

    let mut out = String::new();
    pretty_print_indent(&mut out, &root, "").unwrap();
    assert_eq!(out.matches("{\n").count(), 100_001);
    assert_eq!(out.matches("}\n").count(), 100_001);
}
