use actix_web::{HttpRequest, HttpResponse, web};

use crate::{
    AppState,
    entities::contact::ContactSubmission,
    errors::ApiError,
    infrastructure::{email::Mailer, utils::get_client_ip::get_client_ip},
};

/// `POST /contact` — the submission endpoint.
///
/// The rate limiter runs first: a rate-limited client gets the generic 429
/// and nothing else, before any gate that could yield a more informative
/// answer. Suspected bots receive the same body as accepted submissions.
pub async fn submit_contact<M: Mailer + 'static>(
    state: web::Data<AppState<M>>,
    req: HttpRequest,
    form: web::Json<ContactSubmission>,
) -> Result<HttpResponse, ApiError> {
    let client_ip = get_client_ip(&req, state.config.trust_x_forwarded_for);

    if !state.rate_limiter.check(&client_ip) {
        tracing::warn!(%client_ip, "contact submission rate limited");
        return Err(ApiError::RateLimited);
    }
    let info = state.rate_limiter.info(&client_ip);

    state.contact_handler.submit_contact(form.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .insert_header(("X-RateLimit-Remaining", info.remaining.to_string()))
        .insert_header(("X-RateLimit-Reset", info.reset_time.to_string()))
        .json(serde_json::json!({ "success": true })))
}
