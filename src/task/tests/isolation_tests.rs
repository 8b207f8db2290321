//! Cross-owner isolation tests.
//!
//! A task owned by one user must be invisible to every other user, and an
//! attempt to touch it must be indistinguishable from the task not
//! existing.

use std::sync::Arc;

use super::helpers::{AdjustableClock, StubVerifier, base_instant};
use crate::identity::domain::UserId;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskPatch, TaskStatus},
    services::{CreateTaskRequest, TaskAccessError, TaskAccessService},
};
use rstest::{fixture, rstest};

const TOKEN_A: &str = "token-a";
const TOKEN_B: &str = "token-b";

type TestService = TaskAccessService<InMemoryTaskRepository, StubVerifier, AdjustableClock>;

#[fixture]
fn service() -> TestService {
    let verifier = StubVerifier::new()
        .with_identity(TOKEN_A, UserId::new())
        .with_identity(TOKEN_B, UserId::new());
    TaskAccessService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(verifier),
        Arc::new(AdjustableClock::starting_at(base_instant())),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_never_includes_another_owners_tasks(service: TestService) {
    service
        .create_task(TOKEN_A, CreateTaskRequest::new("alice's task"))
        .await
        .expect("creation should succeed");

    let b_tasks = service
        .list_tasks(TOKEN_B)
        .await
        .expect("listing should succeed");
    assert!(b_tasks.is_empty());

    let a_tasks = service
        .list_tasks(TOKEN_A)
        .await
        .expect("listing should succeed");
    assert_eq!(a_tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_another_owners_task_looks_like_absence(service: TestService) {
    let created = service
        .create_task(TOKEN_A, CreateTaskRequest::new("alice's task"))
        .await
        .expect("creation should succeed");

    let result = service
        .update_task(
            TOKEN_B,
            created.id(),
            &TaskPatch::new().with_status(TaskStatus::Done),
        )
        .await;
    assert!(matches!(result, Err(TaskAccessError::NotFound(_))));

    // The task is untouched for its real owner.
    let a_tasks = service
        .list_tasks(TOKEN_A)
        .await
        .expect("listing should succeed");
    let [snapshot] = a_tasks.as_slice() else {
        panic!("expected exactly one task");
    };
    assert_eq!(snapshot.status, TaskStatus::Todo);
    assert!(!snapshot.is_finished);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_another_owners_task_looks_like_absence(service: TestService) {
    let created = service
        .create_task(TOKEN_A, CreateTaskRequest::new("alice's task"))
        .await
        .expect("creation should succeed");

    let result = service.delete_task(TOKEN_B, created.id()).await;
    assert!(matches!(result, Err(TaskAccessError::NotFound(_))));

    let a_tasks = service
        .list_tasks(TOKEN_A)
        .await
        .expect("listing should succeed");
    assert_eq!(a_tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cross_owner_miss_matches_a_genuine_miss(service: TestService) {
    let created = service
        .create_task(TOKEN_A, CreateTaskRequest::new("alice's task"))
        .await
        .expect("creation should succeed");

    let cross_owner = service
        .delete_task(TOKEN_B, created.id())
        .await
        .expect_err("cross-owner delete should fail");
    let genuine_miss = service
        .delete_task(TOKEN_B, crate::task::domain::TaskId::new())
        .await
        .expect_err("missing-task delete should fail");

    // Both failures look the same to the caller.
    assert_eq!(
        std::mem::discriminant(&cross_owner),
        std::mem::discriminant(&genuine_miss)
    );
}
