//! Service orchestration tests for task creation, mutation, and state
//! transitions.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Page, Task, TaskDraft, TaskId, TaskSearchCriteria, TaskState},
    forms::{TaskCreateForm, TaskUpdateForm},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{TaskService, TaskServiceError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn create_form(title: &str) -> TaskCreateForm {
    TaskCreateForm {
        title: title.to_owned(),
        description: format!("{title} details"),
    }
}

mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn search(&self, criteria: &TaskSearchCriteria) -> TaskRepositoryResult<Page<Task>>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_ids_and_new_state(service: TestService) {
    let first = service
        .create(create_form("Buy milk"))
        .await
        .expect("first creation should succeed");
    let second = service
        .create(create_form("Call plumber"))
        .await
        .expect("second creation should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    assert_eq!(first.state(), TaskState::New);
    assert_eq!(second.state(), TaskState::New);

    let fetched = service
        .get_by_id(first.id())
        .await
        .expect("created task should be retrievable");
    assert_eq!(fetched, first);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_by_id_missing_returns_not_found(service: TestService) {
    let result = service.get_by_id(TaskId::new(42)).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::NotFound(id)) if id == TaskId::new(42)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_details_and_preserves_state(service: TestService) {
    let created = service
        .create(create_form("Buy milk"))
        .await
        .expect("creation should succeed");
    service
        .update_state(created.id(), TaskState::Done)
        .await
        .expect("completion should succeed");

    let updated = service
        .update(TaskUpdateForm {
            id: created.id().value(),
            title: "Buy oat milk".to_owned(),
            description: "One carton".to_owned(),
        })
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Buy oat milk");
    assert_eq!(updated.description(), "One carton");
    assert_eq!(updated.state(), TaskState::Done);

    let fetched = service
        .get_by_id(created.id())
        .await
        .expect("updated task should be retrievable");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_returns_not_found(service: TestService) {
    let result = service
        .update(TaskUpdateForm {
            id: 9,
            title: "Ghost".to_owned(),
            description: "No such task".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[case(TaskState::Done)]
#[case(TaskState::New)]
#[tokio::test(flavor = "multi_thread")]
async fn update_state_is_idempotent(service: TestService, #[case] target: TaskState) {
    let created = service
        .create(create_form("Buy milk"))
        .await
        .expect("creation should succeed");

    let first = service
        .update_state(created.id(), target)
        .await
        .expect("first transition should succeed");
    let second = service
        .update_state(created.id(), target)
        .await
        .expect("repeated transition should succeed");

    assert_eq!(first.state(), target);
    assert_eq!(second.state(), target);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_state_missing_returns_not_found(service: TestService) {
    let result = service.update_state(TaskId::new(5), TaskState::Done).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::NotFound(id)) if id == TaskId::new(5)
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_service_errors() {
    let mut repository = MockRepo::new();
    repository.expect_find_by_id().returning(|_| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });
    let failing = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));

    let result = failing.get_by_id(TaskId::new(1)).await;
    assert!(matches!(result, Err(TaskServiceError::Repository(_))));
}
