//! The request handler.

use http::header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW};
use http::{Method, Request, Response, StatusCode};
use rand::Rng;
use tower_service::Service;

use std::future::{ready, Ready};
use std::ops::RangeInclusive;
use std::task::{Context, Poll};

use crate::Error;

/// Fixed prefix of every successful response body.
pub const GREETING: &str = "Hello, world! ";

/// Range the embedded number is drawn from.
pub const RANGE: RangeInclusive<u8> = 0..=100;

/// Draws one number uniformly from [`RANGE`] using the thread-local generator.
pub fn random_number() -> u8 {
    rand::thread_rng().gen_range(RANGE)
}

/// The response body for `n`: [`GREETING`] followed by `n` in decimal.
pub fn body_for(n: u8) -> String {
    format!("{}{}", GREETING, n)
}

/// Answers a single request.
///
/// `GET` gets `200` with the CORS headers and a greeting carrying a fresh
/// random number. Every other method gets `405` with `Allow: GET`.
/// Nothing else about the request is inspected.
pub fn handle<B>(request: &Request<B>) -> Result<Response<hyper::Body>, http::Error> {
    if request.method() != Method::GET {
        tracing::warn!(method = %request.method(), "method not allowed");
        return Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(ALLOW, "GET")
            .body(hyper::Body::empty());
    }

    let n = random_number();
    tracing::debug!(number = n, "greeting");

    Response::builder()
        .status(StatusCode::OK)
        .header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(ACCESS_CONTROL_ALLOW_METHODS, "GET")
        .body(hyper::Body::from(body_for(n)))
}

/// [`handle`] as a tower service. Stateless; clones are free.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greeter;

impl Greeter {
    pub fn new() -> Self {
        Greeter
    }
}

impl<B> Service<Request<B>> for Greeter {
    type Response = Response<hyper::Body>;
    type Error = Error;
    type Future = Ready<Result<Self::Response, Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        ready(handle(&request).map_err(Into::into))
    }
}
