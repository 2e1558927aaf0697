//! HTML views rendered with minijinja.
//!
//! Templates live in `templates/` and are embedded at compile time, so the
//! binary does not depend on its working directory.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::error::{AppResult, Failure};

const TEMPLATES: [(&str, &str); 9] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("_form_fields.html", include_str!("../templates/_form_fields.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("new-book.html", include_str!("../templates/new-book.html")),
    ("update-book.html", include_str!("../templates/update-book.html")),
    ("search-results.html", include_str!("../templates/search-results.html")),
    ("search-fail.html", include_str!("../templates/search-fail.html")),
    ("page-not-found.html", include_str!("../templates/page-not-found.html")),
    ("error.html", include_str!("../templates/error.html")),
];

const DEFAULT_ERROR_MESSAGE: &str = "There was a server error.";

/// Compiled template set
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render a template into an HTML body
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AppResult<Html<String>> {
        let html = self.env.get_template(name)?.render(ctx)?;
        Ok(Html(html))
    }

    /// Render the page for a failed request.
    ///
    /// 404 gets the not-found page; anything else the generic error page,
    /// with the status defaulting to 500. This never fails: if the page
    /// itself cannot be rendered a plain-text body is sent instead.
    pub fn render_failure(&self, failure: &Failure, expose_details: bool) -> Response {
        let status = failure.status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let page = if status == StatusCode::NOT_FOUND {
            self.render("page-not-found.html", context! { title => "Page Not Found" })
        } else {
            let message = failure
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            let detail = expose_details.then(|| failure.detail.clone());
            self.render(
                "error.html",
                context! {
                    title => "Server Error",
                    status => status.as_u16(),
                    message => message,
                    detail => detail,
                },
            )
        };

        match page {
            Ok(html) => (status, html).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                let reason = status.canonical_reason().unwrap_or("Error");
                (status, reason).into_response()
            }
        }
    }
}
