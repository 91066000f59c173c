use std::collections::BTreeMap;

use locmerge::formats::strings::{self, Pair};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid key regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?]{1,30}").expect("valid value regex")
}

fn dataset_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 1..8)
}

fn pair_list_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 1..12)
}

fn render_document(values: &BTreeMap<String, String>) -> String {
    let mut text = String::new();
    for (key, value) in values {
        text.push_str(&format!("\"{key}\" = \"{value}\";\n"));
    }
    text
}

fn to_pairs(entries: &[(String, String)]) -> Vec<Pair> {
    entries
        .iter()
        .map(|(key, value)| Pair {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}

fn parsed_map(text: &str) -> BTreeMap<String, String> {
    strings::parse_pairs(text)
        .into_iter()
        .map(|pair| (pair.key, pair.value))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sorted_target_stays_sorted_after_merge(
        target in dataset_strategy(),
        source in dataset_strategy(),
    ) {
        let target_text = render_document(&target);
        let source_pairs: Vec<Pair> = source
            .iter()
            .map(|(key, value)| Pair { key: key.clone(), value: value.clone() })
            .collect();

        let merged = strings::merge(&source_pairs, &target_text);
        let keys: Vec<String> = strings::parse_pairs(&merged.text)
            .into_iter()
            .map(|pair| pair.key)
            .collect();

        prop_assert!(
            keys.windows(2).all(|window| window[0] <= window[1]),
            "merged keys out of order: {:?}",
            keys
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn merged_values_come_from_source_then_target(
        target in dataset_strategy(),
        entries in pair_list_strategy(),
    ) {
        let target_text = render_document(&target);
        let source_pairs = to_pairs(&entries);

        let merged = strings::merge(&source_pairs, &target_text);

        // Source wins on overlap, with the last duplicate taking precedence.
        let mut expected = target.clone();
        for (key, value) in &entries {
            expected.insert(key.clone(), value.clone());
        }
        prop_assert_eq!(parsed_map(&merged.text), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn every_key_appears_exactly_once_after_merge(
        target in dataset_strategy(),
        entries in pair_list_strategy(),
    ) {
        let target_text = render_document(&target);
        let source_pairs = to_pairs(&entries);

        let merged = strings::merge(&source_pairs, &target_text);
        let mut keys: Vec<String> = strings::parse_pairs(&merged.text)
            .into_iter()
            .map(|pair| pair.key)
            .collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();

        prop_assert_eq!(before, keys.len(), "a key was emitted more than once");

        let mut expected_keys: Vec<String> = target.keys().cloned().collect();
        expected_keys.extend(entries.iter().map(|(key, _)| key.clone()));
        expected_keys.sort_unstable();
        expected_keys.dedup();
        prop_assert_eq!(keys, expected_keys);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn merge_is_idempotent(
        target in dataset_strategy(),
        entries in pair_list_strategy(),
    ) {
        let target_text = render_document(&target);
        let source_pairs = to_pairs(&entries);

        let first = strings::merge(&source_pairs, &target_text);
        let second = strings::merge(&source_pairs, &first.text);

        prop_assert_eq!(&second.text, &first.text);
        prop_assert_eq!(second.summary.added, 0);
        prop_assert_eq!(
            second.summary.updated,
            strings::dedup_keys(&source_pairs).len()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn opaque_lines_survive_in_place(
        target in dataset_strategy(),
        source in dataset_strategy(),
    ) {
        let header = "/* Generated for the app target */";
        let footer = "// end of file";
        let target_text = format!("{header}\n\n{}{footer}\n", render_document(&target));
        let source_pairs: Vec<Pair> = source
            .iter()
            .map(|(key, value)| Pair { key: key.clone(), value: value.clone() })
            .collect();

        let merged = strings::merge(&source_pairs, &target_text);
        let lines: Vec<&str> = merged.text.lines().collect();

        prop_assert_eq!(lines.first().copied(), Some(header));
        prop_assert_eq!(lines.get(1).copied(), Some(""));
        prop_assert_eq!(lines.last().copied(), Some(footer));
    }
}
