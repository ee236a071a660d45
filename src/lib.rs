//! A serverless endpoint answering `GET` with `Hello, world! <N>`, where `N`
//! is drawn fresh from `0..=100` on every request.
//!
//! The handler is the [`Greeter`] tower service. [`run`] hosts any such
//! service on AWS Lambda; [`local`] serves it over plain HTTP for development.

use bytes::buf::Buf;
use http::{Request, Response};
use tower_service::Service;

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

pub mod greeting;
pub mod local;
pub mod telemetry;

pub use greeting::Greeter;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Runs `service` as the Lambda function's HTTP handler until the runtime
/// shuts the process down.
pub async fn run<S, B>(service: S) -> Result<(), Error>
where
    S: Service<Request<hyper::Body>, Response = Response<B>> + Send + Clone + 'static,
    S::Error: Into<Error>,
    S::Future: Send + 'static,
    B: hyper::body::HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<Error>,
{
    let handler = lambda_http::handler(LambdaService(service, PhantomData));
    lambda_runtime::run(handler).await
}

struct LambdaService<S, B>(S, PhantomData<B>);

impl<S, B> lambda_http::Handler<'static> for LambdaService<S, B>
where
    S: Service<Request<hyper::Body>, Response = Response<B>> + Send + Clone + 'static,
    S::Error: Into<Error>,
    S::Future: Send + 'static,
    B: hyper::body::HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<Error>,
{
    type Error = Error;
    type Response = Response<Vec<u8>>;
    type Fut = Pin<Box<dyn Future<Output = Result<Self::Response, Error>> + Send>>;

    fn call(&self, request: lambda_http::Request, context: lambda_http::Context) -> Self::Fut {
        let mut service = self.0.clone();

        Box::pin(async move {
            tracing::debug!(
                request_id = %context.request_id,
                method = %request.method(),
                uri = %request.uri(),
                "invocation"
            );

            let request = request.map(|body| hyper::Body::from(body.as_ref().to_vec()));
            let response = service.call(request).await.map_err(Into::into)?;

            let (head, body) = response.into_parts();
            let mut body = hyper::body::aggregate(body).await.map_err(Into::into)?;
            let body = body.copy_to_bytes(body.remaining());

            Ok(Response::from_parts(head, body.to_vec()))
        })
    }
}
