use crate::helpers::{advance, spawn, spawn_app, FormKind, TestApp};
use std::time::Duration;
use wiremock::matchers::path;
use wiremock::{Mock, ResponseTemplate};

async fn reply_success(app: &TestApp) {
    app.reply_with(
        "/register",
        200,
        serde_json::json!({"status": "success", "message": "Welcome!"}),
    )
    .await;
}

#[tokio::test]
async fn success_navigates_to_login_once_after_two_seconds() {
    let app = spawn_app().await;
    reply_success(&app).await;

    app.submit().await;
    tokio::time::pause();

    advance(Duration::from_millis(1_900)).await;
    assert!(app.navigator.visits().is_empty());
    assert!(app.handler.redirect_pending());

    advance(Duration::from_millis(200)).await;
    assert_eq!(app.navigator.visits(), vec!["/login"]);

    advance(Duration::from_secs(10)).await;
    assert_eq!(app.navigator.visits(), vec!["/login"]);
    assert!(!app.handler.redirect_pending());
}

#[tokio::test]
async fn the_redirect_delay_is_configurable() {
    let app = spawn(FormKind::Registration, |configuration| {
        configuration.registration.redirect_delay_milliseconds = 500;
    })
    .await;
    reply_success(&app).await;

    app.submit().await;
    tokio::time::pause();

    advance(Duration::from_millis(400)).await;
    assert!(app.navigator.visits().is_empty());

    advance(Duration::from_millis(200)).await;
    assert_eq!(app.navigator.visits(), vec!["/login"]);
}

#[tokio::test]
async fn a_new_submission_cancels_the_pending_redirect() {
    let app = spawn_app().await;
    Mock::given(path("/register"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "success", "message": "Welcome!"})),
        )
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    app.reply_with(
        "/register",
        200,
        serde_json::json!({"status": "warning", "message": "Check email"}),
    )
    .await;

    app.submit().await;
    assert!(app.handler.redirect_pending());
    app.submit().await;
    assert!(!app.handler.redirect_pending());
    tokio::time::pause();

    advance(Duration::from_secs(5)).await;

    assert!(app.navigator.visits().is_empty());
}

#[tokio::test]
async fn two_successes_in_a_row_navigate_once() {
    let app = spawn_app().await;
    reply_success(&app).await;

    app.submit().await;
    app.submit().await;
    tokio::time::pause();

    advance(Duration::from_secs(5)).await;

    assert_eq!(app.navigator.visits(), vec!["/login"]);
}

#[tokio::test]
async fn dropping_the_handler_cancels_the_pending_redirect() {
    let app = spawn_app().await;
    reply_success(&app).await;
    app.submit().await;

    let TestApp {
        handler, navigator, ..
    } = app;
    drop(handler);
    tokio::time::pause();

    advance(Duration::from_secs(5)).await;

    assert!(navigator.visits().is_empty());
}
