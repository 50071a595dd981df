//! Service orchestration tests for the task board.

use std::io;
use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskId,
    ports::{MockTaskRepository, TaskRepositoryError},
    services::{TaskBoardError, TaskBoardService},
};
use rstest::{fixture, rstest};

type TestService = TaskBoardService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskBoardService::new(Arc::new(InMemoryTaskRepository::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_is_listed_with_done_false(service: TestService) {
    service
        .create_task("Buy milk")
        .await
        .expect("creation should succeed");

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().expect("one task listed");
    assert_eq!(task.description(), "Buy milk");
    assert!(!task.done());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_edit_round_trips_created_task(service: TestService) {
    service
        .create_task("Buy milk")
        .await
        .expect("creation should succeed");
    let tasks = service.list_tasks().await.expect("listing should succeed");
    let created = tasks.first().expect("one task listed");

    let fetched = service
        .task_for_edit(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(&fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_edit_distinguishes_missing_rows(service: TestService) {
    let result = service.task_for_edit(TaskId::new(404)).await;

    let Err(TaskBoardError::TaskNotFound(id)) = result else {
        panic!("expected TaskNotFound, got {result:?}");
    };
    assert_eq!(id, TaskId::new(404));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_overwrites_description_and_done(service: TestService) {
    service
        .create_task("Buy milk")
        .await
        .expect("creation should succeed");
    let tasks = service.list_tasks().await.expect("listing should succeed");
    let id = tasks.first().expect("one task listed").id();

    service
        .update_task(id, "Buy oat milk", true)
        .await
        .expect("update should succeed");

    let updated = service
        .task_for_edit(id)
        .await
        .expect("lookup should succeed");
    assert_eq!(updated.description(), "Buy oat milk");
    assert!(updated.done());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_on_missing_row_is_not_an_error(service: TestService) {
    service
        .update_task(TaskId::new(404), "ghost", true)
        .await
        .expect("zero-row update should be logged, not surfaced");

    assert!(service.list_tasks().await.expect("listing should succeed").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_is_idempotent(service: TestService) {
    service
        .create_task("remove me")
        .await
        .expect("creation should succeed");
    let tasks = service.list_tasks().await.expect("listing should succeed");
    let id = tasks.first().expect("one task listed").id();

    service.delete_task(id).await.expect("delete should succeed");
    service
        .delete_task(id)
        .await
        .expect("repeated delete should succeed");

    assert!(service.list_tasks().await.expect("listing should succeed").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_propagates_repository_failure() {
    let mut repository = MockTaskRepository::new();
    repository.expect_insert().returning(|_| {
        Err(TaskRepositoryError::persistence(io::Error::other(
            "connection refused",
        )))
    });
    let failing = TaskBoardService::new(Arc::new(repository));

    let result = failing.create_task("Buy milk").await;
    assert!(matches!(
        result,
        Err(TaskBoardError::Repository(TaskRepositoryError::Persistence(_)))
    ));
}
