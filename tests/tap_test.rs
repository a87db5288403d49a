//! Tests for passthrough taps

use fnkit::util::testing::init_test_setup;
use fnkit::{breakpoint, debug, log, print_newline, timer, trace, traced};

#[test]
fn given_any_value_when_logged_then_it_comes_back_unchanged() {
    init_test_setup();

    assert_eq!(log(42), 42);
    assert_eq!(log("hello"), "hello");
    assert_eq!(log(vec![1, 2, 3]), vec![1, 2, 3]);
}

#[test]
fn given_label_when_traced_then_value_comes_back_unchanged() {
    init_test_setup();

    assert_eq!(trace("answer", 42), 42);

    let stamped: Vec<&str> = ["a", "b"].into_iter().map(traced("item")).collect();
    assert_eq!(stamped, vec!["a", "b"]);
}

#[test]
fn given_debug_and_breakpoint_when_called_then_both_pass_through() {
    init_test_setup();

    assert_eq!(debug(7), 7);
    assert_eq!(breakpoint(7), 7);
}

#[test]
fn given_callback_when_timed_then_its_result_is_returned() {
    init_test_setup();

    let result = timer("fold", || (1..=100).fold(0u32, |acc, n| acc + n));
    assert_eq!(result, 5050);
}

#[test]
fn given_print_newline_when_called_then_it_does_not_panic() {
    print_newline();
}
