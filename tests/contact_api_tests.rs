use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use mockall::mock;
use serde_json::json;

use portfolio_contact::{
    AppState,
    email::{MailError, Mailer},
    entities::contact::ContactMessage,
    errors::json_payload_error_handler,
    handlers::contact::submit_contact,
    settings::AppConfig,
    utils::clock::now_ms,
};

mock! {
    ContactMailer {}

    #[async_trait]
    impl Mailer for ContactMailer {
        async fn send_contact_email(&self, message: &ContactMessage) -> Result<(), MailError>;
    }
}

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "message": "0123456789",
        "honeypot": "",
        "formLoadTime": now_ms() - 5_000,
    })
}

macro_rules! test_app {
    ($mailer:expr) => {
        test_app!($mailer, AppConfig::default())
    };
    ($mailer:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_mailer($config, $mailer)))
                .app_data(web::JsonConfig::default().error_handler(json_payload_error_handler))
                .route(
                    "/contact",
                    web::post().to(submit_contact::<MockContactMailer>),
                ),
        )
        .await
    };
}

macro_rules! post {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/contact")
            .set_json($body)
            .to_request();
        test::call_service(&$app, req).await
    }};
}

#[actix_web::test]
async fn valid_submission_is_accepted() {
    let mut mailer = MockContactMailer::new();
    mailer
        .expect_send_contact_email()
        .times(1)
        .withf(|message| message.email == "jo@x.com")
        .returning(|_| Ok(()));

    let app = test_app!(mailer);
    let resp = post!(app, valid_body());

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("X-RateLimit-Remaining").unwrap().to_str().unwrap(),
        "4"
    );
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn invalid_fields_get_a_field_tagged_400() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(0);

    let mut body = valid_body();
    body["name"] = "A".into();

    let app = test_app!(mailer);
    let resp = post!(app, body);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details.iter().any(|d| d["field"] == "name"));
}

#[actix_web::test]
async fn honeypot_submission_is_indistinguishable_from_success() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(0);

    let mut body = valid_body();
    body["honeypot"] = "bot@spam.com".into();

    let app = test_app!(mailer);
    let resp = post!(app, body);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn instant_submission_is_indistinguishable_from_success() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(0);

    let mut body = valid_body();
    body["formLoadTime"] = now_ms().into();

    let app = test_app!(mailer);
    let resp = post!(app, body);

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
}

#[actix_web::test]
async fn sixth_submission_in_a_window_is_rate_limited() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(5).returning(|_| Ok(()));

    let app = test_app!(mailer);
    for i in 0..5 {
        let resp = post!(app, valid_body());
        assert_eq!(resp.status(), StatusCode::OK, "submission {i}");
    }

    let resp = post!(app, valid_body());
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RATE_LIMITED");
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn rate_limiting_wins_over_validation() {
    // Once the quota is spent, even an invalid payload gets the generic 429
    // rather than a more informative validation answer.
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(5).returning(|_| Ok(()));

    let app = test_app!(mailer);
    for _ in 0..5 {
        post!(app, valid_body());
    }

    let mut invalid = valid_body();
    invalid["name"] = "A".into();
    let resp = post!(app, invalid);

    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RATE_LIMITED");
}

#[actix_web::test]
async fn clients_are_rate_limited_independently() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(6).returning(|_| Ok(()));

    let config = AppConfig {
        trust_x_forwarded_for: true,
        ..Default::default()
    };
    let app = test_app!(mailer, config);

    let from_ip = |ip: &str| {
        test::TestRequest::post()
            .uri("/contact")
            .insert_header(("x-forwarded-for", ip.to_string()))
            .set_json(valid_body())
            .to_request()
    };

    for _ in 0..5 {
        let resp = test::call_service(&app, from_ip("203.0.113.7")).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let resp = test::call_service(&app, from_ip("203.0.113.7")).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    // A different client still has its full quota.
    let resp = test::call_service(&app, from_ip("198.51.100.9")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("X-RateLimit-Remaining").unwrap().to_str().unwrap(), "4");
}

#[actix_web::test]
async fn mailer_failure_surfaces_as_generic_internal_error() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(1).returning(|_| {
        Err(MailError::Provider {
            status: 502,
            detail: "upstream exploded with credentials".to_string(),
        })
    });

    let app = test_app!(mailer);
    let resp = post!(app, valid_body());

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "error": "An unexpected error occurred",
            "code": "INTERNAL_SERVER_ERROR",
        })
    );
}

#[actix_web::test]
async fn malformed_json_maps_onto_the_validation_contract() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(0);

    let app = test_app!(mailer);
    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn unexpected_fields_are_rejected() {
    let mut mailer = MockContactMailer::new();
    mailer.expect_send_contact_email().times(0);

    let mut body = valid_body();
    body["smuggled"] = "payload".into();

    let app = test_app!(mailer);
    let resp = post!(app, body);

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
