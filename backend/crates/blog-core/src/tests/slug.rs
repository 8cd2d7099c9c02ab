use crate::slug::{slugify, with_suffix};

#[test]
fn test_slugify_lowercases_and_joins_words() {
    assert_eq!(slugify("Hello World"), "hello-world");
}

#[test]
fn test_slugify_collapses_punctuation_runs() {
    assert_eq!(slugify("Rust -- is   great!!"), "rust-is-great");
}

#[test]
fn test_slugify_trims_leading_and_trailing_separators() {
    assert_eq!(slugify("  ...Intro to SQL?  "), "intro-to-sql");
}

#[test]
fn test_slugify_drops_non_ascii() {
    assert_eq!(slugify("Café 2024"), "caf-2024");
}

#[test]
fn test_slugify_empty_falls_back() {
    assert_eq!(slugify(""), "post");
    assert_eq!(slugify("!!!"), "post");
}

#[test]
fn test_with_suffix() {
    assert_eq!(with_suffix("hello-world", 2), "hello-world-2");
}
