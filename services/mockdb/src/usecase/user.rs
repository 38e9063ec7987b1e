use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::MockDbError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, MockDbError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    /// `None` stands for an id that could not be parsed and never matches.
    pub async fn execute(&self, user_id: Option<i64>) -> Result<User, MockDbError> {
        let Some(user_id) = user_id else {
            tracing::info!(table = "users", "database query with unparsable id");
            return Err(MockDbError::UserNotFound);
        };
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(MockDbError::UserNotFound)
    }
}
