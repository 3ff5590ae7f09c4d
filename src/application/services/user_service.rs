//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading and deleting users.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = self.repository.create(new_user).await?;
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Deletes a user and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<User, AppError> {
        let user = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(user)
    }

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn create_test_user(id: i64, username: &str) -> User {
        User::new(id, username.to_string(), "secret".to_string())
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_user| new_user.username == "leia")
            .times(1)
            .returning(|new_user| Ok(User::new(1, new_user.username, new_user.password)));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .create_user(NewUser {
                username: "leia".to_string(),
                password: "alderaan".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "leia");
        assert_eq!(user.password, "alderaan");
    }

    #[tokio::test]
    async fn test_create_user_conflict_is_propagated() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service
            .create_user(NewUser {
                username: "leia".to_string(),
                password: "alderaan".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(7, "han");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(7).await.unwrap();
        assert_eq!(result.username, "han");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(42).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![create_test_user(1, "luke"), create_test_user(2, "leia")];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.list_users().await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].username, "leia");
    }

    #[tokio::test]
    async fn test_delete_user_returns_removed_record() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(3, "chewie");
        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let deleted = service.delete_user(3).await.unwrap();
        assert_eq!(deleted.username, "chewie");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.delete_user(99).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
