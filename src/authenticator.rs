/// Read-only credential check used by the HTTP layer.
///
/// Implementations must be safe to share across request tasks; lookups
/// never fail, an unknown user is simply not authenticated.
pub trait Authenticator: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}
