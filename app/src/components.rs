//! Reusable UI pieces: the site header and the error page.

pub mod error_template;
pub mod navbar;
