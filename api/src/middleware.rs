//! Request-scoped middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path, peer IP and user agent for every request.
///
/// CORS preflights are passed through without logging.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    info!(
        method = ?req.method(),
        path = %req.uri().path(),
        ip = %addr.ip(),
        user_agent = %user_agent,
        "Incoming request"
    );

    Ok(next.run(req).await)
}
