use outcome_rail::traits::{IntoOutcome, WithError};
use outcome_rail::{err, ok, Outcome};

#[test]
fn with_error_maps_outcome_error_type() {
    let outcome: Outcome<i32, &str> = err("oops");
    let mapped: Outcome<i32, String> = outcome.fmap_error(|e| format!("ERR:{e}"));

    assert_eq!(mapped.into_error(), "ERR:oops");
}

#[test]
fn with_error_leaves_success_untouched() {
    let outcome: Outcome<i32, &str> = ok(5);
    let mapped = outcome.fmap_error(str::len);
    assert_eq!(mapped, ok(5));
}

#[test]
fn with_error_maps_result_error_type() {
    let result: Result<i32, &str> = Err("oops");
    let mapped: Result<i32, String> = result.fmap_error(|e| format!("ERR:{e}"));

    assert_eq!(mapped.unwrap_err(), "ERR:oops");
}

#[test]
fn with_error_is_usable_generically() {
    fn describe<C>(container: C) -> Result<C::Success, String>
    where
        C: WithError<u16>,
    {
        WithError::to_result(container).map_err(|code| format!("HTTP {code}"))
    }

    assert_eq!(describe(err::<(), u16>(404)), Err("HTTP 404".to_string()));
    assert_eq!(describe(Ok::<_, u16>("body")), Ok("body"));
}

#[test]
fn into_outcome_lifts_std_results() {
    let parsed = "12".parse::<u8>().into_outcome();
    assert_eq!(parsed.into_value(), 12);

    let failed = "x".parse::<u8>().into_outcome();
    assert!(failed.is_err());

    let already: Outcome<u8, ()> = ok(1);
    assert_eq!(already.into_outcome(), ok(1));
}
