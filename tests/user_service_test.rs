//! User service unit tests.
//!
//! The repository is mocked so these tests exercise only the
//! service-level mapping (Option -> NotFound, passthrough of the
//! repository results).

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;

use usuarios_api::domain::User;
use usuarios_api::errors::{AppError, AppResult};
use usuarios_api::infra::UserRepository;
use usuarios_api::services::{UserDirectory, UserService};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn find_by_id(&self, id: u32) -> AppResult<Option<User>>;
        async fn insert(&self, name: String) -> AppResult<User>;
        async fn update_name(&self, id: u32, name: String) -> AppResult<Option<User>>;
        async fn remove(&self, id: u32) -> AppResult<Option<User>>;
    }
}

fn service_with(repo: MockUserRepo) -> UserDirectory {
    UserDirectory::new(Arc::new(repo))
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .with(eq(4))
        .returning(|id| Ok(Some(User::new(id, "Javier"))));

    let result = service_with(repo).get_user(4).await;

    assert_eq!(result.unwrap(), User::new(4, "Javier"));
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service_with(repo).get_user(42).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_passes_through() {
    let mut repo = MockUserRepo::new();
    repo.expect_list()
        .returning(|| Ok(vec![User::new(1, "Fernando"), User::new(2, "Maria")]));

    let result = service_with(repo).list_users().await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_returns_assigned_record() {
    let mut repo = MockUserRepo::new();
    repo.expect_insert()
        .with(eq("Ana".to_string()))
        .returning(|name| Ok(User::new(7, name)));

    let result = service_with(repo).create_user("Ana".to_string()).await;

    assert_eq!(result.unwrap(), User::new(7, "Ana"));
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_update_name().returning(|_, _| Ok(None));

    let result = service_with(repo)
        .update_user(42, "Mar".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_update_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_update_name()
        .with(eq(2), eq("Mar".to_string()))
        .returning(|id, name| Ok(Some(User::new(id, name))));

    let result = service_with(repo).update_user(2, "Mar".to_string()).await;

    assert_eq!(result.unwrap(), User::new(2, "Mar"));
}

#[tokio::test]
async fn test_delete_user_returns_removed_record() {
    let mut repo = MockUserRepo::new();
    repo.expect_remove()
        .with(eq(1))
        .returning(|id| Ok(Some(User::new(id, "Fernando"))));

    let result = service_with(repo).delete_user(1).await;

    assert_eq!(result.unwrap(), User::new(1, "Fernando"));
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_remove().returning(|_| Ok(None));

    let result = service_with(repo).delete_user(42).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_repository_operation_error_propagates() {
    let mut repo = MockUserRepo::new();
    repo.expect_update_name()
        .returning(|_, _| Err(AppError::operation("store unavailable")));

    let result = service_with(repo).update_user(2, "Mar".to_string()).await;

    assert!(matches!(result.unwrap_err(), AppError::Operation(_)));
}
