use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::models::player_api::Credentials;
use crate::AppState;

/// Check the `username` / `password` query parameters against the
/// credential store.
///
/// A repeated parameter resolves to its first value. Missing parameters, or a
/// query string that does not decode, count as empty credentials and fall
/// through to the normal 401 path.
pub async fn require_credentials(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let uri = req.uri().path().to_string();

    let pairs = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();
    let Credentials { username, password } = Credentials::from_pairs(pairs);

    if !state.authenticator.verify(&username, &password) {
        tracing::warn!(
            username = %username,
            uri = %uri,
            "Credentials middleware: rejected"
        );
        return AppError::Unauthorized.into_response();
    }

    tracing::debug!(
        username = %username,
        uri = %uri,
        "Credentials middleware: verified, forwarding to handler"
    );
    req.extensions_mut().insert(AuthenticatedUser(username));
    next.run(req).await
}

/// Username that passed the credential check for this request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);
