use field_rail::checks::{min_size_message, size_message};
use field_rail::{is_min_size, is_size, ErrorSet};
use smallvec::SmallVec;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[test]
fn equal_bounds_use_exact_message() {
    let mut errors = ErrorSet::new();
    is_size("pair", &mut errors, &[1, 2, 3], 2, 2);
    assert_eq!(errors["pair"], ["Must have exactly 2 entries, but had 3"]);
}

#[test]
fn distinct_bounds_use_range_message() {
    let mut errors = ErrorSet::new();
    is_size("choices", &mut errors, &vec!['a'], 2, 4);
    assert_eq!(
        errors["choices"],
        ["Must have between 2 and 4 entries, but had 1"]
    );
}

#[test]
fn sequences_and_maps_of_equal_cardinality_agree() {
    let list = vec![10, 20, 30];
    let tree: BTreeMap<u8, ()> = [(1, ()), (2, ()), (3, ())].into_iter().collect();

    for (min, max) in [(0, 2), (3, 3), (1, 5), (4, 9)] {
        let mut from_list = ErrorSet::new();
        let mut from_tree = ErrorSet::new();
        is_size("f", &mut from_list, &list, min, max);
        is_size("f", &mut from_tree, &tree, min, max);

        assert_eq!(from_list, from_tree, "bounds {min}..={max}");
    }
}

#[cfg(feature = "std")]
#[test]
fn hash_containers_agree_with_sequences() {
    let list = vec![10, 20, 30];
    let map: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    let set: HashSet<i32> = list.iter().copied().collect();

    for (min, max) in [(0, 2), (3, 3), (1, 5), (4, 9)] {
        let mut from_list = ErrorSet::new();
        let mut from_map = ErrorSet::new();
        let mut from_set = ErrorSet::new();
        is_size("f", &mut from_list, &list, min, max);
        is_size("f", &mut from_map, &map, min, max);
        is_size("f", &mut from_set, &set, min, max);

        assert_eq!(from_list, from_map, "bounds {min}..={max}");
        assert_eq!(from_list, from_set, "bounds {min}..={max}");
    }
}

#[test]
fn other_containers_are_measured() {
    let mut errors = ErrorSet::new();
    let deque: VecDeque<u8> = VecDeque::from(vec![1, 2]);
    let ordered: BTreeSet<u8> = [1, 2].into_iter().collect();
    let small: SmallVec<[u8; 4]> = SmallVec::from_slice(&[1, 2]);
    let slice: &[u8] = &[1, 2];

    is_size("deque", &mut errors, &deque, 2, 2);
    is_size("ordered", &mut errors, &ordered, 2, 2);
    is_size("small", &mut errors, &small, 2, 2);
    is_size("slice", &mut errors, slice, 2, 2);

    assert!(errors.is_empty());
}

#[test]
fn min_size_singular_for_one() {
    let mut errors = ErrorSet::new();
    is_min_size("f", &mut errors, &Vec::<i32>::new(), 1);
    assert_eq!(errors["f"], ["Must have a minimum of 1 entry, but had 0"]);
}

#[test]
fn min_size_plural_above_one() {
    let mut errors = ErrorSet::new();
    is_min_size("f", &mut errors, &[1], 2);
    assert_eq!(errors["f"], ["Must have a minimum of 2 entries, but had 1"]);
}

#[test]
fn min_size_zero_never_fails_and_reads_singular() {
    let mut errors = ErrorSet::new();
    is_min_size("f", &mut errors, &Vec::<i32>::new(), 0);
    assert!(errors.is_empty());

    assert_eq!(min_size_message(0, 0), "Must have a minimum of 0 entry, but had 0");
}

#[test]
fn min_size_applies_to_maps() {
    let mut errors = ErrorSet::new();
    let map: BTreeMap<&str, &str> = [("k", "v")].into_iter().collect();
    is_min_size("f", &mut errors, &map, 1);
    is_min_size("g", &mut errors, &map, 3);

    assert!(!errors.contains("f"));
    assert_eq!(errors["g"], ["Must have a minimum of 3 entries, but had 1"]);
}

#[test]
fn size_message_builder_matches_check() {
    assert_eq!(size_message(1, 1, 0), "Must have exactly 1 entries, but had 0");
}
