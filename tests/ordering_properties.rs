use std::cmp::Ordering;

use keysort::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn equal_elements_keep_their_input_order() {
    let plan = SortPlan::by(key(|item: &(i64, usize)| item.0));
    let mut items = vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4), (1, 5)];

    plan.sort(&mut items).unwrap();

    // The second field records the input position; ties must preserve it.
    assert_eq!(items, [(1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (2, 4)]);
}

#[test]
fn sorted_leaves_the_input_untouched() {
    let plan = SortPlan::by(key(|item: &i64| *item).descending());
    let items = vec![3_i64, 1, 4, 1, 5];

    let sorted = plan.sorted(&items).unwrap();

    assert_eq!(sorted, [5, 4, 3, 1, 1]);
    assert_eq!(items, [3, 1, 4, 1, 5]);
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut items: Vec<(u8, u8)> = (0..200)
        .map(|_| (rng.random_range(0..5), rng.random()))
        .collect();
    let plan = SortPlan::by(key(|item: &(u8, u8)| item.0));

    plan.sort(&mut items).unwrap();
    let once = items.clone();
    plan.sort(&mut items).unwrap();

    assert_eq!(items, once);
}

#[test]
fn flipping_every_direction_reverses_tie_free_output() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut items: Vec<i64> = (0..100).collect();
    items.shuffle(&mut rng);

    // Both rules together identify each value uniquely, so there are no
    // ties and reversal is exact.
    let forward = SortPlan::by(key(|n: &i64| n / 10)).then(key(|n: &i64| n % 10).descending());
    let flipped = SortPlan::by(key(|n: &i64| n / 10).descending()).then(key(|n: &i64| n % 10));

    let mut up = forward.sorted(&items).unwrap();
    let down = flipped.sorted(&items).unwrap();

    up.reverse();
    assert_eq!(up, down);
}

#[test]
fn absent_keys_sort_first_ascending() {
    let plan = SortPlan::by(key_opt(|item: &(Option<i64>, &str)| item.0));
    let items = vec![
        (Some(3), "c"),
        (None, "x"),
        (Some(1), "a"),
        (None, "y"),
    ];

    let sorted = plan.sorted(&items).unwrap();

    // Absent keys lead, and the two absentees keep their input order.
    assert_eq!(sorted, [(None, "x"), (None, "y"), (Some(1), "a"), (Some(3), "c")]);
}

#[test]
fn absent_keys_sort_last_descending() {
    let plan = SortPlan::by(key_opt(|item: &(Option<i64>, &str)| item.0).descending());
    let items = vec![
        (Some(3), "c"),
        (None, "x"),
        (Some(1), "a"),
        (None, "y"),
    ];

    let sorted = plan.sorted(&items).unwrap();

    assert_eq!(sorted, [(Some(3), "c"), (Some(1), "a"), (None, "x"), (None, "y")]);
}

#[test]
fn absent_versus_present_is_direction_aware() {
    let ascending = SortPlan::by(key_opt(|item: &Option<i64>| *item));
    let descending = SortPlan::by(key_opt(|item: &Option<i64>| *item).descending());

    let present = Some(42);
    let absent: Option<i64> = None;

    assert_eq!(ascending.compare(&present, &absent), Ok(Ordering::Greater));
    assert_eq!(ascending.compare(&absent, &present), Ok(Ordering::Less));
    assert_eq!(descending.compare(&present, &absent), Ok(Ordering::Less));
    assert_eq!(descending.compare(&absent, &present), Ok(Ordering::Greater));
    assert_eq!(descending.compare(&absent, &absent), Ok(Ordering::Equal));
}

#[test]
fn two_absent_keys_fall_through_to_the_next_rule() {
    let plan = SortPlan::by(key_opt(|item: &(Option<i64>, i64)| item.0))
        .then(key(|item: &(Option<i64>, i64)| item.1).descending());

    // Pairwise: both keys absent, so the second rule decides.
    assert_eq!(plan.compare(&(None, 1), &(None, 9)), Ok(Ordering::Greater));

    let items = vec![(Some(0), 5), (None, 1), (None, 9)];
    let sorted = plan.sorted(&items).unwrap();
    assert_eq!(sorted, [(None, 9), (None, 1), (Some(0), 5)]);
}

#[test]
fn empty_collections_sort_to_empty() {
    let plan = SortPlan::by(key(|item: &i64| *item));

    let mut nothing: Vec<i64> = Vec::new();
    plan.sort(&mut nothing).unwrap();
    assert!(nothing.is_empty());

    assert_eq!(plan.sorted(&nothing), Ok(Vec::new()));
}

#[test]
fn randomized_plans_match_a_native_comparator() {
    let mut rng = StdRng::seed_from_u64(42);
    let plan = SortPlan::by(key(|row: &(u8, i32, bool)| row.0))
        .then(key(|row: &(u8, i32, bool)| row.1).descending())
        .then(key(|row: &(u8, i32, bool)| row.2));

    for _ in 0..200 {
        let len = rng.random_range(0..64);
        let rows: Vec<(u8, i32, bool)> = (0..len)
            .map(|_| {
                (
                    rng.random_range(0..4),
                    rng.random_range(-50..50),
                    rng.random(),
                )
            })
            .collect();

        let mut expected = rows.clone();
        expected.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.cmp(&a.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        let mut actual = rows;
        plan.sort(&mut actual).unwrap();
        assert_eq!(actual, expected);
    }
}

#[test]
fn absent_heavy_inputs_stay_consistent_with_the_oracle() {
    let mut rng = StdRng::seed_from_u64(1463);
    let plan = SortPlan::by(key_opt(|row: &(Option<u8>, u16)| row.0))
        .then(key(|row: &(Option<u8>, u16)| row.1));

    for _ in 0..100 {
        let len = rng.random_range(0..48);
        let rows: Vec<(Option<u8>, u16)> = (0..len)
            .map(|_| {
                let first = if rng.random_range(0..3) == 0 {
                    None
                } else {
                    Some(rng.random_range(0..3))
                };
                (first, rng.random_range(0..8))
            })
            .collect();

        let mut expected = rows.clone();
        expected.sort_by(|a, b| match (a.0, b.0) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.1.cmp(&b.1)),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => a.1.cmp(&b.1),
        });

        let mut actual = rows;
        plan.sort(&mut actual).unwrap();
        assert_eq!(actual, expected);
    }
}
