use greeting_lambda::{telemetry, Error, Greeter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init(true);

    greeting_lambda::run(Greeter::new()).await
}
