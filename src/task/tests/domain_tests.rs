//! Domain type tests for task identifiers and the completion flag.

use crate::task::domain::{DoneFlag, Task, TaskId};
use rstest::rstest;

#[rstest]
#[case(Some("yes"), true)]
#[case(Some("YES"), true)]
#[case(Some("Yes"), true)]
#[case(Some("on"), true)]
#[case(Some("ON"), true)]
#[case(Some("  on  "), true)]
#[case(Some("no"), false)]
#[case(Some("off"), false)]
#[case(Some("true"), false)]
#[case(Some("1"), false)]
#[case(Some(""), false)]
#[case(None, false)]
fn done_flag_parses_leniently(#[case] input: Option<&str>, #[case] expected: bool) {
    assert_eq!(DoneFlag::parse(input).as_bool(), expected);
}

#[rstest]
fn done_flag_variants_map_to_booleans() {
    assert!(DoneFlag::Done.as_bool());
    assert!(!DoneFlag::NotDone.as_bool());
}

#[rstest]
fn task_id_displays_raw_value() {
    assert_eq!(TaskId::new(42).to_string(), "42");
    assert_eq!(TaskId::from(7).into_inner(), 7);
}

#[rstest]
fn task_exposes_row_values() {
    let task = Task::new(TaskId::new(3), "Buy milk", false);
    assert_eq!(task.id(), TaskId::new(3));
    assert_eq!(task.description(), "Buy milk");
    assert!(!task.done());
}
