use axum::{body::Body, http::StatusCode, response::Response};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

/// Assert that the response triggers the client-side `event`.
#[track_caller]
pub(crate) fn assert_hx_trigger(response: &Response<Body>, event: &str) {
    let trigger = get_header(response, "hx-trigger");

    assert!(
        trigger.split(',').any(|name| name.trim() == event),
        "want HX-Trigger to contain {event:?}, got {trigger:?}"
    );
}
