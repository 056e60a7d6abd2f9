//! Confirm a recovered password with a real login

use crate::http::{HttpRequest, Transport};
use url::Url;

/// Marker the login page greets a successful admin login with
pub const DEFAULT_SUCCESS_MARKER: &str = "Hello, admin!";

/// Log in with `username` / `password` and report whether the greeting appears.
///
/// A rejected login is `Ok(false)`; only transport failures are errors.
pub async fn verify_login<T: Transport>(
    transport: &T,
    target: &Url,
    username: &str,
    password: &str,
    success_marker: &str,
) -> anyhow::Result<bool> {
    let req = HttpRequest::post_form(
        target.clone(),
        &[("username", username), ("password", password)],
    );
    let resp = transport.execute(req).await?;
    let verified = resp.body_contains(success_marker);

    if verified {
        tracing::info!(username, "login verified");
    } else {
        tracing::warn!(username, status = resp.status, "login with recovered password rejected");
    }

    Ok(verified)
}
