pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use error::ApiError;
pub use openapi::openapi_document;
pub use routes::register_routes;
