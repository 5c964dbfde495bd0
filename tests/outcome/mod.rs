use outcome_rail::{err, ok, Failure, Outcome, Success};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod aggregate;
mod iter;

#[test]
fn smart_constructors_flatten_existing_variants() {
    let plain: Outcome<i32, &str> = ok(5);
    let nested: Outcome<i32, &str> = ok(Success::new(5));
    assert_eq!(plain, nested);
    assert_eq!(nested.into_value(), 5);

    let plain: Outcome<i32, &str> = err("bad");
    let nested: Outcome<i32, &str> = err(Failure::new("bad"));
    assert_eq!(plain, nested);
    assert_eq!(nested.into_error(), "bad");
}

#[test]
fn flattening_holds_when_the_payload_type_is_pinned() {
    let by_turbofish = ok::<i32, &str>(Success::new(5));
    let by_method = Outcome::<i32, &str>::ok(Success::new(5));
    assert_eq!(by_turbofish, ok(5));
    assert_eq!(by_method, ok(5));
    assert_eq!(by_turbofish.as_success().map(Success::value), Some(&5));

    let by_turbofish = err::<i32, &str>(Failure::new("bad"));
    let by_method = Outcome::<i32, &str>::err(Failure::new("bad"));
    assert_eq!(by_turbofish, err("bad"));
    assert_eq!(by_method, err("bad"));
    assert_eq!(by_turbofish.as_failure().map(Failure::error), Some(&"bad"));
}

#[test]
fn rewrapping_is_idempotent() {
    let once: Outcome<&str, ()> = ok(Success::new("x"));
    let twice: Outcome<&str, ()> = ok(Success::new(Success::new("x").into_value()));
    assert_eq!(once, twice);
}

#[test]
fn ok_wrapping_an_err_outcome_keeps_it_as_payload() {
    let inner: Outcome<i32, &str> = err("inner");
    let outer: Outcome<Outcome<i32, &str>, &str> = ok(inner);

    assert!(outer.is_ok());
    assert_eq!(outer.value(), &Outcome::err("inner"));
    assert_eq!(outer.flatten(), Outcome::err("inner"));
}

#[test]
fn flatten_collapses_one_level() {
    let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(9));
    assert_eq!(nested.flatten().into_value(), 9);

    let outer_err: Outcome<Outcome<i32, &str>, &str> = err("outer");
    assert_eq!(outer_err.flatten().into_error(), "outer");
}

#[test]
fn variants_convert_into_outcome() {
    let from_success: Outcome<i32, &str> = Success::new(1).into();
    assert!(from_success.is_ok());

    let from_failure: Outcome<i32, &str> = Failure::new("no").into();
    assert!(from_failure.is_err());
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Profile {
    id: u32,
}

#[test]
#[cfg(feature = "serde")]
fn outcome_serde_round_trip() {
    let success: Outcome<Profile, String> = ok(Profile { id: 1 });
    let serialized = serde_json::to_string(&success).unwrap();
    assert_eq!(serialized, r#"{"Ok":{"id":1}}"#);
    let deserialized: Outcome<Profile, String> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(success, deserialized);

    let failure: Outcome<Profile, String> = err("denied".to_string());
    let serialized = serde_json::to_string(&failure).unwrap();
    assert_eq!(serialized, r#"{"Err":"denied"}"#);
    let deserialized: Outcome<Profile, String> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(failure, deserialized);
}
