use outcome_rail::{err, ok, Outcome};

#[test]
fn iterating_yields_the_success_payload_once() {
    let success: Outcome<i32, &str> = ok(3);
    assert_eq!(success.iter().collect::<Vec<_>>(), vec![&3]);
    assert_eq!(success.iter_errors().count(), 0);
    assert_eq!(success.into_iter().collect::<Vec<_>>(), vec![3]);
}

#[test]
fn iterating_a_failure_yields_only_the_error() {
    let failure: Outcome<i32, &str> = err("bad");
    assert_eq!(failure.iter().count(), 0);
    assert_eq!(failure.iter_errors().collect::<Vec<_>>(), vec![&"bad"]);

    let mut total = 0;
    for value in &failure {
        total += value;
    }
    assert_eq!(total, 0);
}

#[test]
fn outcomes_flatten_inside_iterator_chains() {
    let outcomes = vec![ok::<i32, &str>(1), err("skip"), ok(3)];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(values, vec![1, 3]);
}
