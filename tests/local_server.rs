use greeting_lambda::{local, Greeter};
use hyper::{Body, Client, Method, Request, StatusCode};
use tokio::sync::oneshot;

async fn serve() -> std::net::SocketAddr {
    let (addr, server) = local::bind(
        ([127, 0, 0, 1], 0).into(),
        Greeter::new(),
        std::future::pending(),
    )
    .unwrap();
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn get_over_http() {
    let addr = serve().await;
    let uri = format!("http://{}/", addr).parse().unwrap();

    let response = Client::new().get(uri).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["access-control-allow-methods"], "GET");

    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = std::str::from_utf8(&body).unwrap();
    let n: u8 = body
        .strip_prefix("Hello, world! ")
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(|| panic!("unexpected body: {:?}", body));
    assert!(n <= 100);
}

#[tokio::test]
async fn post_over_http_is_not_allowed() {
    let addr = serve().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("http://{}/", addr))
        .body(Body::from("{}"))
        .unwrap();

    let response = Client::new().request(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["allow"], "GET");
}

#[tokio::test]
async fn shutdown_signal_stops_server() {
    let (tx, rx) = oneshot::channel::<()>();
    let (addr, server) = local::bind(([127, 0, 0, 1], 0).into(), Greeter::new(), async {
        let _ = rx.await;
    })
    .unwrap();
    let server = tokio::spawn(server);

    let uri = format!("http://{}/", addr).parse().unwrap();
    let response = Client::new().get(uri).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    hyper::body::to_bytes(response.into_body()).await.unwrap();

    tx.send(()).unwrap();
    let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
        .await
        .expect("server did not stop after shutdown signal")
        .unwrap();
    assert!(result.is_ok());
}
