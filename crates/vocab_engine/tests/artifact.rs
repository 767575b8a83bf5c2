use pretty_assertions::assert_eq;
use vocab_engine::WordTable;

#[test]
fn encoded_table_decodes_to_the_same_words() {
    let table = WordTable::from_sorted_words(vec![
        "Hello".to_string(),
        "World".to_string(),
        "test".to_string(),
    ]);
    let bytes = table.to_bytes().unwrap();
    let restored = WordTable::from_bytes(&bytes).unwrap();
    assert_eq!(restored, table);
    assert_eq!(restored.len(), 3);
}

#[test]
fn empty_table_is_a_valid_artifact() {
    let table = WordTable::default();
    let bytes = table.to_bytes().unwrap();
    let restored = WordTable::from_bytes(&bytes).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(WordTable::from_bytes(&[0xc1, 0xff, 0x00]).is_err());
}
