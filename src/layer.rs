use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::policy::{CorsPolicy, ValidationError};
use crate::result::CorsDecision;
use http::{HeaderMap, HeaderName, HeaderValue, Request, Response, StatusCode};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::warn;

/// [`tower::Layer`] that runs every request through a shared [`Cors`] engine.
#[derive(Clone, Debug)]
pub struct CorsLayer {
    cors: Arc<Cors>,
}

impl CorsLayer {
    pub fn new(cors: impl Into<Arc<Cors>>) -> Self {
        Self { cors: cors.into() }
    }

    pub fn from_policy(policy: CorsPolicy) -> Result<Self, ValidationError> {
        Ok(Self::new(Cors::new(policy)?))
    }

    pub fn cors(&self) -> &Arc<Cors> {
        &self.cors
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService {
            inner,
            cors: Arc::clone(&self.cors),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CorsService<S> {
    inner: S,
    cors: Arc<Cors>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let decision = {
            let headers = request.headers();
            let ctx = RequestContext {
                method: request.method().as_str(),
                path: request.uri().path(),
                origin: header_str(headers, header::ORIGIN),
                access_control_request_method: header_str(
                    headers,
                    header::ACCESS_CONTROL_REQUEST_METHOD,
                ),
                access_control_request_headers: header_str(
                    headers,
                    header::ACCESS_CONTROL_REQUEST_HEADERS,
                ),
            };
            self.cors.check(&ctx)
        };

        match decision {
            CorsDecision::PreflightAccepted { headers } => {
                let response = preflight_response(StatusCode::OK, &headers);
                Box::pin(async move { Ok(response) })
            }
            CorsDecision::PreflightRejected(rejection) => {
                let response = preflight_response(StatusCode::FORBIDDEN, &rejection.headers);
                Box::pin(async move { Ok(response) })
            }
            CorsDecision::SimpleAccepted { headers } => {
                with_headers(self.inner.call(request), headers)
            }
            CorsDecision::SimpleRejected(rejection) => {
                with_headers(self.inner.call(request), rejection.headers)
            }
            CorsDecision::NotApplicable => Box::pin(self.inner.call(request)),
        }
    }
}

type BoxResponseFuture<B, E> = Pin<Box<dyn Future<Output = Result<Response<B>, E>> + Send>>;

fn with_headers<F, B, E>(future: F, headers: Headers) -> BoxResponseFuture<B, E>
where
    F: Future<Output = Result<Response<B>, E>> + Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
{
    Box::pin(async move {
        let mut response = future.await?;
        apply_headers(response.headers_mut(), &headers);
        Ok(response)
    })
}

fn preflight_response<B: Default>(status: StatusCode, headers: &Headers) -> Response<B> {
    let mut response = Response::new(B::default());
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

/// `Vary` is appended so values set by the inner service survive.
pub(crate) fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            warn!(header = %name, "dropping CORS header that is not valid HTTP");
            continue;
        };

        if header_name == http::header::VARY {
            map.append(header_name, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
