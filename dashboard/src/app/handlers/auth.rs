//! # Authentication Handlers
//!
//! Login, session resume and logout.

use shared::normalize_username;

use crate::app::controller::TradeController;
use crate::app::state::StatusMessage;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::session::SessionStore;
use crate::utils::validation::{validate_password, validate_username};

/// Handle login
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) async fn login(
    api: &dyn ApiService,
    controller: &TradeController,
    session: &SessionStore,
    username: &str,
    password: &str,
) -> Result<String> {
    let store = controller.store();

    let checked = validate_username(username)
        .into_result()
        .and_then(|_| validate_password(password).into_result());
    if let Err(e) = checked {
        store.set_status_message(Some(StatusMessage::error(e.user_message())));
        return Err(e);
    }

    let response = match api.login(username.trim(), password).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            store.set_status_message(Some(StatusMessage::error(format!("Login failed: {}", e.message))));
            return Err(e.into());
        }
    };

    let username = match normalize_username(&response.username) {
        name if name.is_empty() => normalize_username(username),
        name => name,
    };

    controller.stop();
    if let Err(e) = session.save(&username) {
        // The session still works for this run
        tracing::warn!(error = %e, "Could not persist session");
    }

    store.login(&username);
    store.set_status_message(Some(StatusMessage::success(format!("Logged in as {}", username))));
    tracing::info!(username = %username, "Logged in");

    controller.refresh().await;
    Ok(username)
}

/// Restore a saved session. Returns the username, or `None` when there is none.
pub(crate) async fn resume(
    controller: &TradeController,
    session: &SessionStore,
) -> Result<Option<String>> {
    let username = match session.load()? {
        Some(username) => username,
        None => return Ok(None),
    };

    controller.store().login(&username);
    tracing::info!(username = %username, "Session resumed");
    controller.refresh().await;
    Ok(Some(username))
}

/// Stop polling, forget the session and discard all state.
pub(crate) fn logout(controller: &TradeController, session: &SessionStore) -> Result<()> {
    let was_logged_in = controller.store().read(|state| state.is_authenticated());
    if !was_logged_in {
        return Err(AppError::State("Not logged in".to_string()));
    }

    controller.stop();
    let cleared = session.clear();
    controller.store().reset();
    tracing::info!("Logged out");

    cleared.map_err(AppError::from)
}
