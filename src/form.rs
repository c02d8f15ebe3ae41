//! Public contact form markup.
//!
//! The form itself carries no per-request data, so [`render`] returns the
//! same markup on every call. The anti-forgery nonce travels separately in
//! the footer script produced by [`render_script`].

use askama::Template;

use crate::routes::SEND_EMAIL_PATH;

#[derive(Template)]
#[template(path = "contact/form.html")]
struct ContactFormTemplate;

#[derive(Template)]
#[template(path = "contact/script.html")]
struct ContactScriptTemplate<'a> {
    nonce: &'a str,
    endpoint: &'a str,
}

/// The embeddable form: text, email, tel and message inputs plus a submit
/// button, with the success/error placeholders the script fills in.
pub fn render() -> askama::Result<String> {
    ContactFormTemplate.render()
}

/// The footer script that posts the form with the nonce header.
pub fn render_script(nonce: &str) -> askama::Result<String> {
    ContactScriptTemplate {
        nonce,
        endpoint: SEND_EMAIL_PATH,
    }
    .render()
}
