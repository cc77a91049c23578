//! Error page shown for routes the site does not serve.
//!
//! On the server the first `AppError` also decides the HTTP status of the
//! response.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p, section},
    prelude::*,
};
use thiserror::Error;

/// Application-level errors that end up on the error page.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Página no encontrada")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of a Leptos `Errors` map.
///
/// Errors of any other type are skipped.
///
/// # Arguments
///
/// * `errors` - The map filled by an error boundary or by the router fallback.
///
/// # Returns
///
/// The `AppError`s in the map, in iteration order.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page.
///
/// On the server the first `AppError` also sets the status of the HTTP
/// response through `ResponseOptions`.
///
/// # Arguments
///
/// * `outside_errors` - Errors passed in from outside the router, as the SSR
///   fallback does for unknown paths. Takes precedence when present.
/// * `errors` - An error boundary's signal, read without subscribing.
///
/// # Returns
///
/// An `impl IntoView` listing every `AppError` with its status code and a
/// link back to the landing page.
pub fn component(outside_errors: Option<Errors>, errors: Option<RwSignal<Errors>>) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .map(app_errors)
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(first) = errors.first() {
            tracing::debug!(status = %first.status_code(), "rendering error page");
            if let Some(response) = use_context::<ResponseOptions>() {
                response.set_status(first.status_code());
            }
        }
    }

    section().class("error-page").child((
        h1().child(if errors.len() > 1 { "Errores" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| p().class("error-page-detail").child(format!("{}| {error}", error.status_code())))
            .collect::<Vec<_>>(),
        div().class("error-page-back").child(a().href("/").child("Volver al inicio")),
    ))
}
