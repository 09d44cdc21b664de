use field_rail::traits::{Entries, ErrorSink};
#[cfg(feature = "regex")]
use field_rail::is_email;
use field_rail::{is_min_size, is_string_length, ErrorSet};
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[derive(Default)]
struct Recorder {
    calls: Vec<(String, String)>,
}

impl ErrorSink for Recorder {
    fn add_error(&mut self, field: &str, message: String) {
        self.calls.push((field.to_string(), message));
    }
}

#[test]
fn custom_sink_sees_one_call_per_failure() {
    let mut sink = Recorder::default();
    is_string_length("a", &mut sink, "ok", 1, 5);
    is_string_length("b", &mut sink, "", 1, 5);
    is_min_size("c", &mut sink, &[1, 2], 3);

    assert_eq!(
        sink.calls,
        vec![
            (
                "b".to_string(),
                "Must be between 1 and 5 characters long".to_string()
            ),
            (
                "c".to_string(),
                "Must have a minimum of 3 entries, but had 2".to_string()
            ),
        ]
    );
}

#[cfg(feature = "regex")]
#[test]
fn sink_behind_a_mutable_reference() {
    let mut errors = ErrorSet::new();
    {
        let mut borrowed: &mut ErrorSet = &mut errors;
        is_email("email", &mut borrowed, "nope");
    }
    assert_eq!(errors["email"], ["Email address is invalid"]);
}

#[test]
fn entries_counts_elements_and_keys() {
    let tree: BTreeMap<u8, Vec<u8>> = (0..4).map(|i| (i, vec![i; 10])).collect();

    assert_eq!([0u8; 4].entries(), 4);
    assert_eq!(vec![(); 4].entries(), 4);
    assert_eq!(tree.entries(), 4);
    assert_eq!((&&tree).entries(), 4);
}

#[cfg(feature = "std")]
#[test]
fn entries_counts_hash_map_keys() {
    let map: HashMap<u8, u8> = (0..4).map(|i| (i, i)).collect();

    assert_eq!(map.entries(), 4);
    assert_eq!((&&map).entries(), 4);
}
