use shotlog::core::natural_sort::{
    Chunk, compare_natural, natural_key, natural_sort, natural_sort_paths,
};
use std::cmp::Ordering;
use std::path::PathBuf;

#[test]
fn test_numbers_compare_by_value() {
    let mut v = vec!["shot2", "shot10", "shot1"];
    natural_sort(&mut v);
    assert_eq!(v, vec!["shot1", "shot2", "shot10"]);
}

#[test]
fn test_text_is_case_insensitive() {
    assert_eq!(compare_natural("Shot_bak1", "shot_bak1"), Ordering::Equal);
    assert_eq!(compare_natural("ALPHA", "beta"), Ordering::Less);
}

#[test]
fn test_ties_keep_input_order() {
    let mut v = vec!["B7", "b07", "b7"];
    natural_sort(&mut v);
    assert_eq!(v, vec!["B7", "b07", "b7"]);
}

#[test]
fn test_key_alternates_text_and_numbers() {
    assert_eq!(
        natural_key("shot3_12"),
        vec![
            Chunk::Text("shot".into()),
            Chunk::Number("3".into()),
            Chunk::Text("_".into()),
            Chunk::Number("12".into()),
            Chunk::Text("".into()),
        ]
    );
    assert_eq!(natural_key("42")[0], Chunk::Text("".into()));
}

#[test]
fn test_huge_numbers_do_not_overflow() {
    let big = "x123456789012345678901234567890";
    let bigger = "x1234567890123456789012345678901";
    assert_eq!(compare_natural(big, bigger), Ordering::Less);
    assert_eq!(compare_natural("x0009", "x10"), Ordering::Less);
}

#[test]
fn test_prefix_sorts_first() {
    assert_eq!(compare_natural("shot", "shot1"), Ordering::Less);
    assert_eq!(compare_natural("shot1", "shot1a"), Ordering::Less);
}

#[test]
fn test_mixed_kinds_are_deterministic() {
    // Number before Text at the same position
    assert_eq!(
        Chunk::Number("5".into()).cmp(&Chunk::Text("a".into())),
        Ordering::Less
    );
    assert_eq!(
        Chunk::Text("a".into()).cmp(&Chunk::Number("5".into())),
        Ordering::Greater
    );
}

#[test]
fn test_paths_sort_on_full_path() {
    let mut v = vec![
        PathBuf::from("proj/shot10/a_bak1.hip"),
        PathBuf::from("proj/shot9/a_bak2.hip"),
        PathBuf::from("proj/shot9/a_bak10.hip"),
    ];
    natural_sort_paths(&mut v);
    assert_eq!(
        v,
        vec![
            PathBuf::from("proj/shot9/a_bak2.hip"),
            PathBuf::from("proj/shot9/a_bak10.hip"),
            PathBuf::from("proj/shot10/a_bak1.hip"),
        ]
    );
}
