#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod stub_api;

pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_input_with_value,
    assert_form_submit_button_with_text, assert_hx_endpoint, assert_no_submit_button,
    assert_select_value, must_get_form,
};
pub(crate) use html::{
    alert_message, assert_valid_html, must_select, parse_html_document, parse_html_fragment,
    select_texts,
};
pub(crate) use http::{assert_hx_trigger, assert_status_ok, get_header};
pub(crate) use stub_api::{StubApi, unreachable_url};
