//! Task repository behavior through the port contract.

use super::helpers::{base_instant, task_created_at};
use chrono::Duration;
use taskledger::identity::domain::UserId;
use taskledger::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[tokio::test(flavor = "multi_thread")]
async fn listing_is_scoped_to_the_owner_and_newest_first() {
    let repository = InMemoryTaskRepository::new();
    let alice = UserId::new();
    let bob = UserId::new();

    let t0 = base_instant();
    repository
        .insert(&task_created_at(alice, "oldest", t0))
        .await
        .expect("insert should succeed");
    repository
        .insert(&task_created_at(bob, "bob's task", t0 + Duration::seconds(1)))
        .await
        .expect("insert should succeed");
    repository
        .insert(&task_created_at(alice, "newest", t0 + Duration::seconds(2)))
        .await
        .expect("insert should succeed");

    let listed = repository
        .list_for_owner(alice)
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["newest", "oldest"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn equal_creation_instants_order_latest_insertion_first() {
    let repository = InMemoryTaskRepository::new();
    let owner = UserId::new();
    let instant = base_instant();

    for title in ["older", "newer"] {
        repository
            .insert(&task_created_at(owner, title, instant))
            .await
            .expect("insert should succeed");
    }

    let listed = repository
        .list_for_owner(owner)
        .await
        .expect("listing should succeed");
    let titles: Vec<&str> = listed.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["newer", "older"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_task_id_is_rejected() {
    let repository = InMemoryTaskRepository::new();
    let task = task_created_at(UserId::new(), "buy milk", base_instant());

    repository.insert(&task).await.expect("insert should succeed");
    let result = repository.insert(&task).await;
    assert!(matches!(result, Err(TaskRepositoryError::DuplicateTask(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_with_an_owner_mismatch_reports_absence() {
    let repository = InMemoryTaskRepository::new();
    let owner = UserId::new();
    let stranger = UserId::new();
    let task = task_created_at(owner, "buy milk", base_instant());
    repository.insert(&task).await.expect("insert should succeed");

    let patch = TaskPatch::new().with_status(TaskStatus::Done);
    let updated = repository
        .update_for_owner(stranger, task.id(), &patch, base_instant())
        .await
        .expect("update call should succeed");
    assert!(updated.is_none());

    // Same outcome as a genuinely missing task id.
    let missing = repository
        .update_for_owner(owner, TaskId::new(), &patch, base_instant())
        .await
        .expect("update call should succeed");
    assert!(missing.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_applies_the_patch_and_stamps_completion() {
    let repository = InMemoryTaskRepository::new();
    let owner = UserId::new();
    let task = task_created_at(owner, "buy milk", base_instant());
    repository.insert(&task).await.expect("insert should succeed");

    let mutation_time = base_instant() + Duration::minutes(15);
    let deadline = base_instant() + Duration::days(1);
    let patch = TaskPatch::new()
        .with_status(TaskStatus::Done)
        .with_deadline(Some(deadline));

    let updated = repository
        .update_for_owner(owner, task.id(), &patch, mutation_time)
        .await
        .expect("update call should succeed")
        .expect("task should match");

    assert!(updated.is_finished());
    assert_eq!(updated.finished_at(), Some(mutation_time));
    assert_eq!(updated.deadline(), Some(deadline));
    // Untouched fields survive.
    assert_eq!(updated.title().as_str(), "buy milk");
    assert_eq!(updated.created_at(), base_instant());

    // The mutation is visible to subsequent reads.
    let listed = repository
        .list_for_owner(owner)
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![updated]);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_scoped_to_the_owner() {
    let repository = InMemoryTaskRepository::new();
    let owner = UserId::new();
    let stranger = UserId::new();
    let task = task_created_at(owner, "buy milk", base_instant());
    repository.insert(&task).await.expect("insert should succeed");

    let cross_owner = repository
        .delete_for_owner(stranger, task.id())
        .await
        .expect("delete call should succeed");
    assert!(!cross_owner);

    let deleted = repository
        .delete_for_owner(owner, task.id())
        .await
        .expect("delete call should succeed");
    assert!(deleted);

    let again = repository
        .delete_for_owner(owner, task.id())
        .await
        .expect("delete call should succeed");
    assert!(!again);
}
