use reqwest::StatusCode;

/// Anything outside 2xx is a transport failure.
pub(super) fn validate_status(status_code: StatusCode) -> Result<(), String> {
    if status_code.is_success() {
        return Ok(());
    }
    let code = status_code.as_u16();
    let label = match status_code {
        StatusCode::TOO_MANY_REQUESTS => return Err(format!("rate limited ({code})")),
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not found",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::BAD_REQUEST => "bad request",
        s if s.is_server_error() => "server error",
        s if s.is_redirection() => "unfollowed redirect",
        _ => "unknown error",
    };
    Err(format!("Fetch failed {code} ({label})"))
}
