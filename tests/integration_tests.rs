//! End-to-end tests of the dictionary, insertion, and fuzzy search
//! working together.

use fuzzydict::prelude::*;

fn animal_dict() -> TrieDict {
    ["cat", "cats", "car", "card", "fox", "wolf", "bear"]
        .into_iter()
        .collect()
}

#[test]
fn insert_then_exact_search_roundtrip() {
    let words = ["apple", "apply", "ape", "banana", "band", "b"];
    let mut dict = TrieDict::new();
    for word in words {
        dict.insert(word);
    }
    for word in words {
        assert_eq!(
            search(&dict, word, Tolerance::exact()),
            vec![word.to_string()],
            "exact search for '{}'",
            word
        );
    }
}

#[test]
fn reinsertion_does_not_duplicate_search_results() {
    let mut dict = TrieDict::new();
    dict.insert("apple");
    dict.insert("apple");
    assert_eq!(search(&dict, "apple", Tolerance::exact()), vec!["apple"]);
    assert_eq!(dict.word_count(), 1);
}

#[test]
fn spec_scenario_cat_family() {
    let dict = animal_dict();

    assert_eq!(search(&dict, "cat", Tolerance::exact()), vec!["cat"]);

    // One extra character reaches "cats": distance 1 <= 0 + 1.
    let extra = search(&dict, "cat", Tolerance::new(0, 0, 1));
    assert!(extra.contains(&"cats".to_string()));

    // One substitution reaches "car": distance 1 <= 1 + 0.
    let subst = search(&dict, "cat", Tolerance::new(1, 0, 0));
    assert!(subst.contains(&"car".to_string()));
}

#[test]
fn comma_list_loads_animals() {
    let mut dict = TrieDict::new();
    assert!(dict.insert_all("fox,wolf,,bear"));
    let words: Vec<String> = dict.words().collect();
    assert_eq!(words, vec!["fox", "wolf", "bear"]);
}

#[test]
fn shared_prefix_is_stored_once() {
    let mut dict = TrieDict::new();
    dict.insert("cat");
    dict.insert("car");
    // c, a, t, r
    assert_eq!(dict.node_count(), 4);
    // Both words hang off the single 'c' branch.
    assert_eq!(dict.nodes_at_depth(0).count(), 1);
    assert_eq!(dict.nodes_at_depth(1).count(), 1);
    assert_eq!(dict.nodes_at_depth(2).count(), 2);
}

#[test]
fn empty_dictionary_never_matches() {
    let dict = TrieDict::new();
    assert!(dict.is_empty());
    for query in ["", "a", "word"] {
        assert!(search(&dict, query, Tolerance::new(2, 1, 2)).is_empty());
    }
}

#[test]
fn missing_tolerance_covering_the_query_never_matches() {
    let dict = animal_dict();
    assert!(search(&dict, "fox", Tolerance::new(0, 3, 0)).is_empty());
    assert!(search(&dict, "fox", Tolerance::new(9, 7, 9)).is_empty());
}

#[test]
fn query_outrunning_the_tree_never_matches() {
    let dict = animal_dict();
    // Deepest word is 4 characters, so max_depth is 3.
    assert_eq!(dict.max_depth(), 3);
    assert!(search(&dict, "elephant", Tolerance::new(0, 0, 2)).is_empty());
}

#[test]
fn results_come_back_shortest_first() {
    let dict = animal_dict();
    let results = search(&dict, "cat", Tolerance::new(1, 1, 1));
    let lengths: Vec<usize> = results.iter().map(|w| w.len()).collect();
    let mut sorted = lengths.clone();
    sorted.sort_unstable();
    assert_eq!(lengths, sorted, "results not length-ordered: {:?}", results);
}

#[test]
fn stored_prefix_word_is_never_lost() {
    // Word completion is an explicit flag, so extending "cat" with
    // "cats" keeps both searchable.
    let mut dict = TrieDict::new();
    dict.insert("cat");
    dict.insert("cats");
    dict.insert("catsup");
    for word in ["cat", "cats", "catsup"] {
        assert!(dict.contains(word));
        assert_eq!(search(&dict, word, Tolerance::exact()), vec![word]);
    }
}

#[test]
fn one_level_tree_boundary() {
    let mut dict = TrieDict::new();
    dict.insert("a");
    dict.insert("b");
    assert_eq!(dict.max_depth(), 0);
    assert_eq!(search(&dict, "a", Tolerance::exact()), vec!["a"]);
    // One substitution tolerated matches every single-letter word.
    assert_eq!(search(&dict, "c", Tolerance::new(1, 0, 0)), vec!["a", "b"]);
}

#[test]
fn clear_then_reuse() {
    let mut dict = animal_dict();
    assert!(!dict.is_empty());
    dict.clear();
    assert!(dict.is_empty());
    assert!(search(&dict, "cat", Tolerance::new(1, 1, 1)).is_empty());

    dict.insert("raven");
    assert_eq!(search(&dict, "raven", Tolerance::exact()), vec!["raven"]);
}

#[test]
fn moderate_dictionary_stays_consistent() {
    // A few hundred generated words: every one must round-trip through
    // an exact search, and node sharing must keep the arena smaller
    // than the total character count.
    let mut dict = TrieDict::new();
    let mut words = Vec::new();
    for a in ["re", "un", "de", "pre"] {
        for b in ["cord", "form", "count", "place", "turn", "fine"] {
            for c in ["", "s", "ed", "ing"] {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    let total_chars: usize = words.iter().map(|w| w.len()).sum();
    for word in &words {
        dict.insert(word);
    }

    assert_eq!(dict.word_count(), words.len());
    assert!(dict.node_count() < total_chars);
    for word in &words {
        assert_eq!(search(&dict, word, Tolerance::exact()), vec![word.clone()]);
    }
}
