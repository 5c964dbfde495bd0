use outcome_rail::{all, all_iter, err, ok, Outcome};
use std::cell::Cell;

#[test]
fn empty_input_aggregates_to_empty_success() {
    let merged = all(Vec::<Outcome<i32, &str>>::new());
    assert!(merged.is_ok());
    assert!(merged.into_value().is_empty());

    let merged = all_iter(std::iter::empty::<Outcome<i32, &str>>());
    assert_eq!(merged, ok(Vec::new()));
}

#[test]
fn all_successes_preserve_positional_order() {
    let merged = all(vec![ok::<i32, &str>(1), ok(2), ok(3)]);
    assert_eq!(merged.into_value(), vec![1, 2, 3]);
}

#[test]
fn arrays_aggregate_like_vectors() {
    let merged = all([ok::<i32, &str>(1), ok(2), ok(3)]);
    assert_eq!(merged.into_value(), vec![1, 2, 3]);

    let merged = all([ok::<i32, &str>(1), err("bad"), ok(3)]);
    assert_eq!(merged, err("bad"));

    let merged = all([ok::<i32, &str>(1); 0]);
    assert_eq!(merged, ok(Vec::new()));
}

#[test]
fn first_failure_is_returned_unchanged() {
    let merged = all(vec![ok::<i32, &str>(1), err("bad"), ok(3)]);
    assert!(merged.is_err());
    assert_eq!(merged.into_error(), "bad");
}

#[test]
fn first_failure_wins_over_later_ones() {
    let merged = all(vec![err::<i32, &str>("a"), err("b")]);
    assert_eq!(merged.into_error(), "a");

    let merged = all((ok::<u8, &str>(1), err::<bool, &str>("first"), err::<char, &str>("second")));
    assert_eq!(merged.into_error(), "first");
}

#[test]
fn elements_after_the_first_failure_are_never_pulled() {
    let pulled = Cell::new(0);
    let inputs = [ok::<i32, &str>(1), err("bad"), ok(3)];

    let merged = all_iter(inputs.into_iter().inspect(|_| pulled.set(pulled.get() + 1)));

    assert_eq!(merged, err("bad"));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn heterogeneous_tuples_keep_their_types() {
    let merged = all((ok::<u8, &str>(1), ok::<&str, &str>("two"), ok::<[i32; 2], &str>([3, 3])));
    let (one, two, three) = merged.into_value();

    assert_eq!(one, 1u8);
    assert_eq!(two, "two");
    assert_eq!(three, [3, 3]);
}

#[test]
fn single_element_and_twelve_element_tuples_aggregate() {
    let single = all((ok::<i32, ()>(1),));
    assert_eq!(single.into_value(), (1,));

    let wide = all((
        ok::<u8, ()>(0),
        ok::<u16, ()>(1),
        ok::<u32, ()>(2),
        ok::<u64, ()>(3),
        ok::<i8, ()>(4),
        ok::<i16, ()>(5),
        ok::<i32, ()>(6),
        ok::<i64, ()>(7),
        ok::<usize, ()>(8),
        ok::<isize, ()>(9),
        ok::<char, ()>('a'),
        ok::<bool, ()>(true),
    ));
    let values = wide.into_value();
    assert_eq!(values.0, 0);
    assert_eq!(values.10, 'a');
    assert!(values.11);
}

#[test]
fn failure_in_last_tuple_slot_is_found() {
    let merged = all((ok::<i32, &str>(1), ok::<i32, &str>(2), err::<i32, &str>("last")));
    assert_eq!(merged, err("last"));
}

#[test]
fn collecting_outcomes_into_vec() {
    let inputs = vec![ok::<i32, &str>(1), ok(2)];
    let collected: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();
    assert_eq!(collected.into_value(), vec![1, 2]);
}

#[test]
fn collecting_into_custom_collection_type() {
    use smallvec::SmallVec;

    let inputs = vec![ok::<i32, &str>(1), ok(2), ok(3)];
    let collected: Outcome<SmallVec<[i32; 4]>, &str> = inputs.into_iter().collect();
    assert_eq!(collected.into_value().as_slice(), &[1, 2, 3]);

    let inputs = vec![ok::<i32, &str>(1), err("err1"), ok(2)];
    let collected: Outcome<SmallVec<[i32; 4]>, &str> = inputs.into_iter().collect();
    assert_eq!(collected.into_error(), "err1");
}

#[test]
fn collecting_into_string_stops_at_failure() {
    let parts = ["a", "b", "!", "c"].into_iter().map(|part| {
        if part == "!" {
            err::<&str, String>(format!("bad part {part}"))
        } else {
            ok(part)
        }
    });

    let joined: Outcome<String, String> = parts.collect();
    assert_eq!(joined.into_error(), "bad part !");
}
