//! Property tests for list invariants

use forward_list::ForwardList;
use proptest::prelude::*;
use test_helpers::*;

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-20i32..20, 0..48)
}

proptest! {
    #[test]
    fn fill_gives_n_equal_values(n in 0usize..64, value in any::<i32>()) {
        let list = ForwardList::from_elem(n, value);
        prop_assert_eq!(list.len(), n);
        prop_assert!(list.iter().all(|&v| v == value));
    }

    #[test]
    fn front_insertion_of_reversed_sequence_rebuilds_it(values in small_values()) {
        let mut list = ForwardList::new();
        for &value in values.iter().rev() {
            list.insert(list.begin(), value);
        }
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn reverse_twice_is_identity(values in small_values()) {
        let mut list = ForwardList::from(values.clone());
        list.reverse();
        list.reverse();
        prop_assert_eq!(contents(&list), values);
    }

    #[test]
    fn unique_is_idempotent(values in proptest::collection::vec(0i32..4, 0..48)) {
        let mut once = ForwardList::from(values);
        once.unique();
        let mut twice = once.clone();
        prop_assert_eq!(twice.unique(), 0);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unique_matches_vec_dedup(values in proptest::collection::vec(0i32..4, 0..48)) {
        let mut list = ForwardList::from(values.clone());
        list.unique();
        let mut expected = values;
        expected.dedup();
        prop_assert_eq!(contents(&list), expected);
    }

    #[test]
    fn erase_range_shrinks_by_distance(
        values in small_values(),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let mut list = ForwardList::from(values.clone());
        let len = list.len();
        let (from, to) = (a.min(b).min(len), a.max(b).min(len));
        let first = list.cursor_at(from).unwrap();
        let last = list.cursor_at(to).unwrap();
        let distance = list.distance(first, last);
        prop_assert_eq!(distance, to - from);

        let returned = list.erase_range(first, last);
        prop_assert_eq!(returned, last);
        prop_assert_eq!(list.len(), len - distance);

        let mut expected = values;
        expected.drain(from..to);
        prop_assert_eq!(contents(&list), expected);
        assert_consistent(&list);
    }

    #[test]
    fn sort_then_reverse_equals_descending_sort(values in small_values()) {
        let mut ascending = ForwardList::from(values.clone());
        ascending.sort();
        ascending.reverse();

        let mut descending = ForwardList::from(values);
        descending.sort_by(|a, b| b.cmp(a));
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn sort_is_stable(keys in proptest::collection::vec(0u8..5, 0..48)) {
        // Tag each key with its original position
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let mut list = ForwardList::from(tagged.clone());
        list.sort_by_key(|&(key, _)| key);

        let mut expected = tagged;
        expected.sort_by_key(|&(key, _)| key);
        prop_assert_eq!(contents(&list), expected);
    }

    #[test]
    fn remove_if_matches_vec_retain(values in small_values(), bound in -20i32..20) {
        let mut list = ForwardList::from(values.clone());
        let removed = list.remove_if(|&v| v > bound);

        let mut expected = values.clone();
        expected.retain(|&v| v <= bound);
        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(contents(&list), expected);
        assert_consistent(&list);
    }

    #[test]
    fn interleaved_mutations_keep_arena_balanced(
        ops in proptest::collection::vec((0u8..6, -5i32..5), 0..64),
    ) {
        let mut list = ForwardList::new();
        let mut model: Vec<i32> = Vec::new();
        for (op, value) in ops {
            match op {
                0 => {
                    list.push_front(value);
                    model.insert(0, value);
                }
                1 => {
                    list.push_back(value);
                    model.push(value);
                }
                2 => {
                    prop_assert_eq!(list.pop_front(), (!model.is_empty()).then(|| model.remove(0)));
                }
                3 => {
                    prop_assert_eq!(list.pop_back(), model.pop());
                }
                4 => {
                    let index = value.unsigned_abs() as usize % (model.len() + 1);
                    list.insert(list.cursor_at(index).unwrap(), value);
                    model.insert(index, value);
                }
                _ => {
                    list.remove(&value);
                    model.retain(|&v| v != value);
                }
            }
            prop_assert_eq!(contents(&list), model.clone());
            assert_consistent(&list);
        }
    }
}
