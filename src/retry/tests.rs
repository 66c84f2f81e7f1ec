//! Behavioral tests for bounded retry.

use super::*;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    Timeout(u32),
    Refused,
}

#[test]
fn test_retry_succeeds_on_third_attempt() {
    let mut calls = 0;
    let failures = RefCell::new(Vec::new());

    let result = retry_with(
        || {
            calls += 1;
            if calls < 3 {
                Err(FetchError::Timeout(calls))
            } else {
                Ok(calls * 10)
            }
        },
        4,
        |e: &FetchError| failures.borrow_mut().push(e.clone()),
    );

    assert_eq!(result, Ok(30));
    assert_eq!(calls, 3);
    assert_eq!(
        failures.into_inner(),
        vec![FetchError::Timeout(1), FetchError::Timeout(2)]
    );
}

#[test]
fn test_retry_exhausted_returns_last_error() {
    let mut calls = 0;
    let mut handled = Vec::new();

    let result: Result<(), _> = retry_with(
        || {
            calls += 1;
            Err(FetchError::Timeout(calls))
        },
        4,
        |e: &FetchError| handled.push(e.clone()),
    );

    assert_eq!(result, Err(FetchError::Timeout(4)));
    assert_eq!(calls, 4);
    assert_eq!(handled.len(), 4);
    assert_eq!(handled.last(), Some(&FetchError::Timeout(4)));
}

#[test]
fn test_immediate_success_skips_handler() {
    let mut handled = 0;

    let result = retry_with(|| Ok::<_, FetchError>("ready"), 5, |_: &FetchError| {
        handled += 1
    });

    assert_eq!(result, Ok("ready"));
    assert_eq!(handled, 0);
}

#[test]
fn test_single_attempt_still_notifies_handler() {
    let mut handled = Vec::new();

    let result: Result<(), _> = retry_with(
        || Err(FetchError::Refused),
        1,
        |e: &FetchError| handled.push(e.clone()),
    );

    assert_eq!(result, Err(FetchError::Refused));
    assert_eq!(handled, vec![FetchError::Refused]);
}

#[test]
fn test_retry_without_handler() {
    let mut calls = 0;
    let result: Result<u32, &str> = retry(
        || {
            calls += 1;
            if calls == 2 {
                Ok(calls)
            } else {
                Err("flaky")
            }
        },
        3,
    );

    assert_eq!(result, Ok(2));
}

#[test]
fn test_handler_runs_before_next_attempt() {
    let events = RefCell::new(Vec::new());

    let _: Result<(), u32> = retry_with(
        || {
            let attempt = events.borrow().len() as u32 / 2 + 1;
            events.borrow_mut().push(format!("attempt {}", attempt));
            Err(attempt)
        },
        3,
        |e: &u32| events.borrow_mut().push(format!("handled {}", e)),
    );

    assert_eq!(
        events.into_inner(),
        vec![
            "attempt 1",
            "handled 1",
            "attempt 2",
            "handled 2",
            "attempt 3",
            "handled 3",
        ]
    );
}

#[test]
#[should_panic(expected = "at least one attempt")]
fn test_zero_attempts_panics() {
    let _ = retry(|| Ok::<_, ()>(()), 0);
}

#[test]
fn test_try_new_rejects_zero() {
    assert_eq!(Retry::try_new(0), Err(RetryError::ZeroAttempts));
    assert_eq!(Retry::try_new(1).map(|r| r.max_attempts()), Ok(1));
}

#[test]
fn test_apply_passes_same_input_each_attempt() {
    let mut inputs = Vec::new();
    let mut retry = Retry::new(3);

    let result: Result<usize, String> = retry.apply(String::from("payload"), |input| {
        inputs.push(input.clone());
        if inputs.len() < 3 {
            Err(format!("failed on {}", input))
        } else {
            Ok(input.len())
        }
    });

    assert_eq!(result, Ok(7));
    assert_eq!(inputs, vec!["payload", "payload", "payload"]);
}

#[test]
fn test_policy_is_reusable() {
    let mut retry = Retry::new(2).with_handler(Recorder::default());

    let first: Result<(), String> = retry.call(|| Err("a".to_string()));
    let second: Result<(), String> = retry.call(|| Err("b".to_string()));

    assert_eq!(first, Err("a".to_string()));
    assert_eq!(second, Err("b".to_string()));
    assert_eq!(retry.into_handler().0, vec!["a", "a", "b", "b"]);
}

#[test]
fn test_chained_handlers_both_observe() {
    let first = RefCell::new(0);
    let second = RefCell::new(Vec::new());

    let handler = chain(
        |_: &FetchError| *first.borrow_mut() += 1,
        |e: &FetchError| second.borrow_mut().push(e.clone()),
    );
    let _: Result<(), _> = retry_with(|| Err(FetchError::Refused), 2, handler);

    assert_eq!(*first.borrow(), 2);
    assert_eq!(second.into_inner(), vec![FetchError::Refused; 2]);
}

#[test]
fn test_ignore_is_default_handler() {
    let retry = Retry::new(5);
    assert_eq!(retry.handler(), &Ignore);
    assert_eq!(retry.max_attempts(), 5);
}

#[derive(Debug, Default)]
struct Recorder(Vec<String>);

impl FailureHandler<String> for Recorder {
    fn on_failure(&mut self, error: &String) {
        self.0.push(error.clone());
    }
}

#[cfg(feature = "tracing")]
mod logging {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_exhaustion_is_logged() {
        let _: Result<(), &str> = retry(|| Err("boom"), 2);

        assert!(logs_contain("retry attempt failed"));
        assert!(logs_contain("retry attempts exhausted"));
    }

    #[test]
    #[traced_test]
    fn test_logging_handler_reports_each_failure() {
        let mut calls = 0;
        let mut retry = Retry::new(3).with_handler(Logging::new("sync_index"));

        let result = retry.call(|| {
            calls += 1;
            if calls < 3 {
                Err(FetchError::Timeout(calls))
            } else {
                Ok(())
            }
        });

        assert_eq!(result, Ok(()));
        assert_eq!(retry.handler().failures(), 2);
        assert!(logs_contain("sync_index"));
        assert!(logs_contain("Timeout(2)"));
        assert!(!logs_contain("retry attempts exhausted"));
    }
}
