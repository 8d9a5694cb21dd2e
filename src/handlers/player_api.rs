use axum::{response::IntoResponse, Extension, Json};

use crate::middleware::credentials::AuthenticatedUser;
use crate::models::player_api::AccountStatusResponse;

/// GET /player_api.php — account status for an authenticated caller.
/// The payload is the same for every account.
pub async fn player_api(
    Extension(AuthenticatedUser(username)): Extension<AuthenticatedUser>,
) -> impl IntoResponse {
    tracing::info!(
        handler = "player_api",
        username = %username,
        status = 200,
        "Responding: account active"
    );

    Json(AccountStatusResponse::active())
}
