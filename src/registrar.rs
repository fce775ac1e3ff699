use crate::cors::Cors;
use crate::layer::CorsLayer;
use crate::origin::AllowedOrigins;
use crate::policy::{CorsPolicy, ValidationError};
use axum::Router;
use tracing::info;

/// Validates `policy` and attaches it to every route of `router`.
///
/// Call once while building the application. An error means the configuration
/// is unusable and the process should not start serving.
pub fn register<S>(router: Router<S>, policy: CorsPolicy) -> Result<Router<S>, ValidationError>
where
    S: Clone + Send + Sync + 'static,
{
    let cors = Cors::new(policy)?;
    log_installed(&cors);
    Ok(router.layer(CorsLayer::new(cors)))
}

fn log_installed(cors: &Cors) {
    let policy = cors.policy();
    let origins = match &policy.allowed_origins {
        AllowedOrigins::Any => "*".to_string(),
        AllowedOrigins::List(values) => values.join(", "),
    };
    info!(
        path_pattern = cors.path_pattern().as_str(),
        origins = %origins,
        credentials = policy.allow_credentials,
        max_age = ?policy.max_age,
        "CORS policy registered"
    );
}

#[cfg(test)]
#[path = "registrar_test.rs"]
mod registrar_test;
