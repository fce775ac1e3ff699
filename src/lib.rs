//! CORS policy for the FileScout backend.
//!
//! A [`CorsPolicy`] is loaded once at startup (see [`CorsConfig`]), validated into a
//! [`Cors`] engine and attached to the HTTP pipeline with [`register`] or
//! [`CorsLayer`].

mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod layer;
mod origin;
mod path_pattern;
mod policy;
mod registrar;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use layer::{CorsLayer, CorsService};
pub use origin::{AllowedOrigins, OriginDecision};
pub use path_pattern::{PathPattern, PatternError};
pub use policy::{CorsPolicy, ValidationError};
pub use registrar::register;
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
