//! Session Store Tests
//!
//! Browser tests for the localStorage-backed session lifecycle:
//! login persists, logout clears, reloads pick the record back up.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use refundable_frontend::components::dashboard::shell::{
    schedule_logout, LOGOUT_REDIRECT_DELAY_MS,
};
use refundable_frontend::services::session::{
    authenticate, load_session, SessionState, SESSION_KEY,
};
use refundable_frontend::services::toast::ToastState;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn wipe_storage() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("test browser exposes localStorage");
    let _ = storage.remove_item(SESSION_KEY);
}

#[wasm_bindgen_test]
fn test_login_persists_session_record() {
    wipe_storage();

    let state = SessionState::new();
    assert!(!state.is_authenticated());

    let user = authenticate("jane@example.com", "password123").unwrap();
    state.log_in(user);

    assert!(state.is_authenticated());
    assert_eq!(
        state.current_user().unwrap().email,
        "jane@example.com"
    );

    // A fresh state (as after a page reload) sees the stored record.
    let reloaded = SessionState::new();
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.current_user().unwrap().first_name, "John");

    wipe_storage();
}

#[wasm_bindgen_test]
fn test_logout_deletes_stored_record() {
    wipe_storage();

    let state = SessionState::new();
    state.log_in(authenticate("jane@example.com", "password123").unwrap());
    assert!(load_session().is_some());

    state.log_out();
    assert!(!state.is_authenticated());
    assert!(load_session().is_none());

    // The next visitor starts signed out.
    let reloaded = SessionState::new();
    assert!(!reloaded.is_authenticated());
}

#[wasm_bindgen_test]
async fn test_logout_clears_session_after_farewell_pause() {
    wipe_storage();

    let session = SessionState::new();
    session.log_in(authenticate("jane@example.com", "password123").unwrap());
    let toasts = ToastState::new();

    schedule_logout(session, toasts);

    // The toast is up immediately, but the session survives the pause so
    // the dashboard stays rendered behind it.
    assert!(session.is_authenticated());
    assert_eq!(
        toasts.current.get_untracked().unwrap().message,
        "Logged out successfully"
    );

    TimeoutFuture::new(LOGOUT_REDIRECT_DELAY_MS + 200).await;
    assert!(!session.is_authenticated());
    assert!(load_session().is_none());
}

#[wasm_bindgen_test]
fn test_corrupt_record_degrades_to_signed_out() {
    wipe_storage();

    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .unwrap();
    storage.set_item(SESSION_KEY, "{not json").unwrap();

    assert!(load_session().is_none());
    let state = SessionState::new();
    assert!(!state.is_authenticated());

    wipe_storage();
}
