use greeting_lambda::local::{self, Config};
use greeting_lambda::{telemetry, Error, Greeter};

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init(false);

    let config = Config::from_env()?;
    let (addr, server) = local::bind(config.addr, Greeter::new(), ctrl_c())?;
    tracing::info!(%addr, "listening");

    server.await?;
    Ok(())
}
