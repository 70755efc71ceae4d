//! Tests for the published class index.

use arcade_games::{doc_reference, ClassIndex, IndexNode};

#[test]
fn test_framework_index_round_trips_through_js() {
    let index = ClassIndex::framework();
    index.validate().expect("Framework index is malformed");

    let parsed = ClassIndex::from_js(&index.to_js()).expect("Failed to read index back");
    assert_eq!(parsed, index);
}

#[test]
fn test_boards_are_leaves_linking_to_their_page() {
    let index = ClassIndex::framework();
    for board in [
        "XoBoard",
        "SusBoard",
        "WordBoard",
        "NumericalBoard",
        "UltimateBoard",
        "FourByFourBoard",
    ] {
        let node = index.find(board).unwrap_or_else(|| panic!("{board} missing"));
        assert_eq!(node.reference(), &doc_reference(board));
        assert!(node.children().is_none());
    }
}

#[test]
fn test_hand_written_index_is_validated() {
    let index = ClassIndex::new(vec![IndexNode::branch(
        "Board&lt; T &gt;".to_string(),
        "class_board.html".to_string(),
        vec![IndexNode::leaf(String::new(), "class_x.html".to_string())],
    )]);
    let err = index.validate().unwrap_err();
    assert!(err.to_string().contains("empty name"));
}

#[test]
fn test_garbage_is_a_parse_error() {
    assert!(ClassIndex::from_js("var other = [];").is_err());
    assert!(ClassIndex::from_json("{\"not\": \"a list\"}").is_err());
}
