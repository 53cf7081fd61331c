//! Interactive controller scenarios over in-memory input and output
//!
//! Each test scripts the keyboard as a string and inspects the full console
//! transcript afterwards.

use dsc_cli::{Renderer, SessionController};
use dsc_engine::ValueStore;
use std::io::Cursor;

type Controller = SessionController<Cursor<Vec<u8>>, Vec<u8>>;

fn controller(values: &[f64], input: &str) -> Controller {
    SessionController::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        ValueStore::from_values(values.to_vec()),
        Renderer::default(),
    )
}

/// Run to completion and return the store contents and the transcript
fn run(values: &[f64], input: &str) -> (Vec<f64>, String) {
    let mut c = controller(values, input);
    c.run().unwrap();
    let store = c.store().snapshot();
    (store, String::from_utf8(c.into_output()).unwrap())
}

#[test]
fn test_welcome_and_exit() {
    let (_, text) = run(&[1.0], "5\n");
    assert!(text.starts_with("Welcome to the Data Structure Calculator!"));
    assert!(text.contains("Initial numbers loaded: [1.0]"));
    assert!(text.trim_end().ends_with("Exiting Data Structure Calculator. Goodbye!"));
}

#[test]
fn test_collects_initial_numbers_when_store_is_empty() {
    let (store, text) = run(&[], "2\n4\n-1.5\n5\n");
    assert_eq!(store, vec![4.0, -1.5]);
    assert!(text.contains("Please enter 2 numbers:"));
    assert!(text.contains("Initial numbers collected: [4.0, -1.5]"));
}

#[test]
fn test_array_sort_leaves_store_untouched() {
    let (store, text) = run(&[3.0, 1.0, 2.0], "1\n6\n8\n5\n");
    assert!(text.contains("--- Array Operations ---"));
    assert!(text.contains("Current Array: [3.0, 1.0, 2.0]"));
    assert!(text.contains("Array sorted: [1.0, 2.0, 3.0]"));
    assert_eq!(store, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_array_search_and_stats() {
    let (_, text) = run(&[5.0, 5.0, 2.0], "1\n7\n5\n7\n9\n3\n8\n5\n");
    assert!(text.contains("5.0 found at index: 0"));
    assert!(text.contains("9.0 not found in the array."));
    assert!(text.contains("Average of elements: 4.00"));
}

#[test]
fn test_queue_rotation_is_discarded_on_back() {
    let (_, text) = run(&[1.0, 2.0, 3.0, 4.0], "3\n6\n-1\n1\n7\n3\n7\n5\n");
    assert!(text.contains("Queue rotated by -1 positions. New Queue: [4.0, 1.0, 2.0, 3.0]"));
    assert!(text.contains("Queue: [4.0, 1.0, 2.0, 3.0]"));
    // Re-entering starts again from the store
    assert_eq!(text.matches("Current Queue: [1.0, 2.0, 3.0, 4.0]").count(), 2);
}

#[test]
fn test_overflowing_sum_reports_infinity() {
    let (_, text) = run(&[1e308, 1e308], "1\n2\n3\n8\n5\n");
    assert!(text.contains("Sum of elements: inf"));
    assert!(text.contains("Average of elements: inf"));
    assert!(!text.contains("NaN"));
}

#[test]
fn test_queue_too_small_to_rotate_skips_prompt() {
    let (_, text) = run(&[1.0], "3\n6\n7\n5\n");
    assert!(text.contains("Queue is too small to rotate effectively."));
    assert!(!text.contains("How many positions to rotate"));
}

#[test]
fn test_queue_shrink_past_end() {
    let (_, text) = run(&[1.0, 2.0], "3\n5\n3\n4\n7\n5\n");
    assert!(text.contains("Removed: 1.0\nRemoved: 2.0\nQueue became empty."));
    assert!(text.contains("2 element(s) removed."));
    assert!(text.contains("Queue is empty."));
}

#[test]
fn test_list_insert_and_remove() {
    let (_, text) = run(&[1.0, 2.0, 3.0], "2\n4\n9\n1\n7\n1\n7\n10\n9\n5\n");
    assert!(text.contains("Element added. Current List: [1.0, 9.0, 2.0, 3.0]"));
    assert!(text.contains("Removed from position 1: 9.0\nCurrent List: [1.0, 2.0, 3.0]"));
    assert!(text.contains("Invalid position: 10 (List has 3 element(s))."));
}

#[test]
fn test_list_remove_from_either_end() {
    let (_, text) = run(&[1.0, 2.0, 3.0], "2\n6\n5\n9\n5\n");
    assert!(text.contains("Removed from end: 3.0\nCurrent List: [1.0, 2.0]"));
    assert!(text.contains("Removed from start: 1.0\nCurrent List: [2.0]"));
}

#[test]
fn test_list_remove_at_on_empty_list() {
    let (_, text) = run(&[5.0], "2\n5\n7\n9\n5\n");
    assert!(text.contains("Removed from start: 5.0\nCurrent List: []"));
    assert!(text.contains("List is empty."));
    assert!(!text.contains("Enter position to remove"));
}

#[test]
fn test_empty_store_prompts_for_session_numbers() {
    let (store, text) = run(&[], "0\n1\n2\n8\n4\n2\n8\n5\n");
    assert!(text.contains("How many numbers do you want to use for this Array? "));
    assert!(text.contains("Sum of elements: 12.0"));
    // Session numbers are not added to the store
    assert!(store.is_empty());
}

#[test]
fn test_empty_store_and_no_session_numbers_returns_to_menu() {
    let (_, text) = run(&[], "0\n1\n0\n5\n");
    assert!(text.contains("No numbers will be used for this Array operation."));
    assert!(!text.contains("--- Array Operations ---"));
}

#[test]
fn test_calculator_keeps_result() {
    let (store, text) = run(&[6.0, 0.0], "4\n1\n0\n1\n4\n2\n1.5\n4\n3\ny\n3\n5\n");
    assert!(text.contains("Error: Division by zero is not allowed."));
    assert!(text.contains("1.5 * 4.0 = 6.0"));
    assert!(text.contains("Add result (6.0) to initial inputs? (y/n): "));
    assert_eq!(store, vec![6.0, 0.0, 6.0]);
}

#[test]
fn test_calculator_result_declined() {
    let (store, text) = run(&[2.0, 3.0], "4\n1\n1\n0\n2\nn\n3\n5\n");
    assert!(text.contains("3.0 - 2.0 = 1.0"));
    assert_eq!(store, vec![2.0, 3.0]);
}

#[test]
fn test_calculator_needs_two_stored_numbers() {
    let (_, text) = run(&[1.0], "4\n1\n3\n5\n");
    assert!(text.contains("Not enough initial numbers (1) to select from."));
}

#[test]
fn test_calculator_bad_indices() {
    let (_, text) = run(&[1.0, 2.0], "4\n1\n0\n5\n3\n5\n");
    assert!(text.contains("Invalid indices. Please try again."));
}

#[test]
fn test_invalid_choices() {
    let (_, text) = run(&[1.0], "9\nabc\n1\n0\n8\n5\n");
    assert!(text.contains("Invalid choice. Please try again."));
    assert!(text.contains("Invalid input. Please enter an integer: "));
    // Array menu choice 0 is invalid too
    assert!(text.matches("Invalid choice. Please try again.").count() >= 2);
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut c = controller(&[1.0], "1\n2\n");
    assert!(c.run().is_ok());
    let text = String::from_utf8(c.into_output()).unwrap();
    assert!(text.contains("Sum of elements: 1.0"));
    assert!(!text.contains("Goodbye"));
}
