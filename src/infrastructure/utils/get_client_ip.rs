use actix_web::HttpRequest;

/// Resolves the client identifier the rate limiter keys on.
///
/// Behind a trusted reverse proxy the first `X-Forwarded-For` entry is the
/// real client; otherwise that header is attacker-controlled and only the
/// peer address counts.
pub fn get_client_ip(req: &HttpRequest, trust_x_forwarded_for: bool) -> String {
    if trust_x_forwarded_for {
        if let Some(forwarded) = req.headers().get("x-forwarded-for") {
            if let Ok(value) = forwarded.to_str() {
                let first = value.split(',').next().unwrap_or("").trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
