use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUserId,
};

/// Retrieves the authenticated user's ID from session
///
/// # Returns
/// - `Ok(i32)`: ID of the user logged in through the authentication system
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID present in session
/// - `Err(Error)`: Session store failure or malformed user ID
pub async fn get_user_id_from_session(session: &Session) -> Result<i32, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user_id)
}
