pub mod axum;

#[cfg(feature = "axum")]
pub use self::axum::{into_axum_error, into_axum_response};
