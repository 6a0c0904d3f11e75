//! Property tests over random small vocabularies.

use ladder_kernel::carrier::vocabulary::Vocabulary;
use ladder_search::search::find_word_ladder;
use lock_tests::oracle::{is_valid_ladder, shortest_steps};
use proptest::prelude::*;
use proptest::sample::Index;

fn vocabulary_words(pattern: &'static str) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(pattern, 1..24).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn ladder_is_valid_and_shortest(
        words in vocabulary_words("[abcç]{3}"),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let vocabulary: Vocabulary = words.iter().collect();
        let start = a.get(&words);
        let goal = b.get(&words);

        let ladder = find_word_ladder(start, goal, &vocabulary);
        match shortest_steps(&vocabulary, start, goal) {
            Some(steps) => {
                prop_assert_eq!(ladder.len(), steps + 1);
                prop_assert_eq!(&ladder[0], start);
                prop_assert_eq!(&ladder[ladder.len() - 1], goal);
                prop_assert!(is_valid_ladder(&vocabulary, &ladder));
            }
            None => prop_assert!(ladder.is_empty()),
        }
    }

    #[test]
    fn reverse_search_has_same_length(
        words in vocabulary_words("[abı]{4}"),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let vocabulary: Vocabulary = words.iter().collect();
        let start = a.get(&words);
        let goal = b.get(&words);

        let forward = find_word_ladder(start, goal, &vocabulary);
        let backward = find_word_ladder(goal, start, &vocabulary);
        prop_assert_eq!(forward.len(), backward.len());

        let mut reversed = forward;
        reversed.reverse();
        prop_assert!(is_valid_ladder(&vocabulary, &reversed));
    }

    #[test]
    fn mismatched_lengths_never_connect(
        words in vocabulary_words("[ab]{2,3}"),
        a in any::<Index>(),
        b in any::<Index>(),
    ) {
        let vocabulary: Vocabulary = words.iter().collect();
        let start = a.get(&words);
        let goal = b.get(&words);
        prop_assume!(start.chars().count() != goal.chars().count());

        prop_assert!(find_word_ladder(start, goal, &vocabulary).is_empty());
    }

    #[test]
    fn search_is_repeatable(words in vocabulary_words("[abc]{3}"), a in any::<Index>(), b in any::<Index>()) {
        let vocabulary: Vocabulary = words.iter().collect();
        let start = a.get(&words);
        let goal = b.get(&words);
        prop_assert_eq!(
            find_word_ladder(start, goal, &vocabulary),
            find_word_ladder(start, goal, &vocabulary)
        );
    }
}
