//! Rendering tests for the compiled template set.

use crate::task::domain::{Task, TaskId};
use crate::web::templates::{self, TemplateEngine};
use minijinja::context;
use rstest::{fixture, rstest};

#[fixture]
fn engine() -> TemplateEngine {
    TemplateEngine::new().expect("template set should compile")
}

#[rstest]
fn home_renders_full_page(engine: TemplateEngine) {
    let html = engine
        .render(templates::HOME, context! {})
        .expect("home should render");
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("hx-get=\"/tasks\""));
    assert!(html.contains("hx-get=\"/getnewtaskform\""));
}

#[rstest]
fn task_list_renders_rows_with_controls(engine: TemplateEngine) {
    let tasks = vec![
        Task::new(TaskId::new(1), "Buy milk", false),
        Task::new(TaskId::new(2), "Walk dog", true),
    ];

    let html = engine
        .render(templates::TASK_LIST, context! { tasks })
        .expect("list should render");
    assert!(html.contains("Buy milk"));
    assert!(html.contains("<s>Walk dog</s>"));
    assert!(html.contains("hx-get=\"/gettaskupdateform/1\""));
    assert!(html.contains("hx-delete=\"/tasks/2\""));
}

#[rstest]
fn task_list_renders_empty_without_rows(engine: TemplateEngine) {
    let html = engine
        .render(templates::TASK_LIST, context! { tasks => Vec::<Task>::new() })
        .expect("list should render");
    assert!(!html.contains("<li>"));
}

#[rstest]
fn task_list_escapes_markup_in_descriptions(engine: TemplateEngine) {
    let tasks = vec![Task::new(TaskId::new(1), "<script>alert(1)</script>", false)];

    let html = engine
        .render(templates::TASK_LIST, context! { tasks })
        .expect("list should render");
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[rstest]
fn new_task_form_posts_to_tasks(engine: TemplateEngine) {
    let html = engine
        .render(templates::NEW_TASK_FORM, context! {})
        .expect("form should render");
    assert!(html.contains("hx-post=\"/tasks\""));
    assert!(html.contains("name=\"task\""));
}

#[rstest]
fn edit_task_form_is_prefilled(engine: TemplateEngine) {
    let task = Task::new(TaskId::new(9), "Buy milk", true);

    let html = engine
        .render(templates::EDIT_TASK_FORM, context! { task })
        .expect("form should render");
    assert!(html.contains("hx-put=\"/tasks/9\""));
    assert!(html.contains("value=\"Buy milk\""));
    assert!(html.contains("checked"));
}

#[rstest]
fn unknown_template_name_fails(engine: TemplateEngine) {
    let result = engine.render("missing.html", context! {});
    assert!(result.is_err());
}
