use crate::helpers::{advance, alert_html, spawn_login_app};
use std::time::Duration;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_successful_login_leads_to_the_dashboard() {
    let app = spawn_login_app().await;
    Mock::given(path("/login"))
        .and(method("POST"))
        .and(body_string_contains(app.test_user.phone.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "Login successful."
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    app.submit().await;
    tokio::time::pause();
    advance(Duration::from_millis(2_100)).await;

    assert_eq!(app.current_message(), alert_html("success", "Login successful."));
    assert_eq!(app.navigator.visits(), vec!["/dashboard"]);
}

#[tokio::test]
async fn invalid_credentials_stay_on_the_page() {
    let app = spawn_login_app().await;
    app.reply_with(
        "/login",
        400,
        serde_json::json!({"status": "danger", "message": "Invalid phone number or password."}),
    )
    .await;

    app.submit().await;

    assert_eq!(
        app.current_message(),
        alert_html("danger", "Invalid phone number or password.")
    );
    assert!(!app.handler.redirect_pending());
}
