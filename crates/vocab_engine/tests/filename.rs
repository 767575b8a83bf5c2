use std::path::Path;

use pretty_assertions::assert_eq;
use vocab_engine::artifact_filename;

#[test]
fn filename_is_deterministic_and_safe() {
    let fname = artifact_filename(Path::new("texts/My: Bible?.txt"));
    assert!(fname.starts_with("My_ Bible--"));
    assert!(fname.ends_with(".words.mpk"));

    // Stable across calls.
    let fname2 = artifact_filename(Path::new("texts/My: Bible?.txt"));
    assert_eq!(fname, fname2);
}

#[test]
fn same_stem_different_directory_gets_a_different_name() {
    let a = artifact_filename(Path::new("kjv/bible.txt"));
    let b = artifact_filename(Path::new("vulgate/bible.txt"));
    assert_ne!(a, b);
}

#[test]
fn reserved_windows_name_is_patched() {
    let fname = artifact_filename(Path::new("CON.txt"));
    assert!(fname.starts_with("CON_--"));
}
