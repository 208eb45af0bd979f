//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! site's page logic.

pub mod cache;
pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_400_response, build_404_response, build_405_response,
    build_413_response, build_favicon_response, build_health_response, build_options_response,
    build_page_response, build_redirect_response_with_code,
};
