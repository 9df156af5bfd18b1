use super::*;

const USER_COLUMNS: &str = r#"
    id, login, display_name, first_name, last_name, nickname, slug, url, email,
    description, registered_at, roles, capabilities, extra_capabilities
"#;

impl PostgresUserRepository {
    pub(super) async fn find_by_login_impl(&self, login: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE login = $1 LIMIT 1"
        ))
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by login: {error}")))?;

        row.map(User::try_from).transpose()
    }

    pub(super) async fn find_by_email_impl(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1) LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by email: {error}")))?;

        row.map(User::try_from).transpose()
    }

    pub(super) async fn has_capability_impl(
        &self,
        user_id: UserId,
        capability: &str,
    ) -> AppResult<bool> {
        let granted = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT COALESCE(capabilities -> $2 = 'true'::jsonb, FALSE)
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id_param(user_id)?)
        .bind(capability)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to check user capability: {error}"))
        })?;

        Ok(granted.unwrap_or(false))
    }
}
