mod common;

use starwars_api::domain::entities::NewUser;
use starwars_api::domain::repositories::UserRepository;
use starwars_api::error::AppError;
use starwars_api::infrastructure::persistence::SqlUserRepository;
use std::sync::Arc;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    let repo = SqlUserRepository::new(Arc::new(common::test_pool().await));

    let created = repo.create(new_user("lando")).await.unwrap();
    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_find_missing_user() {
    let repo = SqlUserRepository::new(Arc::new(common::test_pool().await));

    assert!(repo.find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let repo = SqlUserRepository::new(Arc::new(common::test_pool().await));

    repo.create(new_user("lando")).await.unwrap();
    let result = repo.create(new_user("lando")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[tokio::test]
async fn test_list_orders_by_id_and_count() {
    let repo = SqlUserRepository::new(Arc::new(common::test_pool().await));

    let first = repo.create(new_user("wedge")).await.unwrap();
    let second = repo.create(new_user("biggs")).await.unwrap();

    let users = repo.list().await.unwrap();
    assert_eq!(users, vec![first, second]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_returns_removed_row() {
    let repo = SqlUserRepository::new(Arc::new(common::test_pool().await));

    let created = repo.create(new_user("greedo")).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(created.clone()));

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(repo.delete(created.id).await.unwrap().is_none());
}
