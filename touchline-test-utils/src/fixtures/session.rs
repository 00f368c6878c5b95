use crate::{constant::SESSION_USER_ID_KEY, error::TestError, TestContext};

impl TestContext {
    /// Write a user ID into the session the same way the auth system does.
    pub async fn insert_session_user(&self, user_id: i32) -> Result<(), TestError> {
        self.session
            .insert(SESSION_USER_ID_KEY, user_id.to_string())
            .await?;

        Ok(())
    }
}
