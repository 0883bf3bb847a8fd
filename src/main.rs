use lambda_http::{run, service_fn, Error};
use tracing::info;

use lead_capture::config::Config;
use lead_capture::handler::capture_lead;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();

    // CloudWatch supplies timestamps and does not render ANSI escapes.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(false)
        .without_time()
        .init();

    info!(environment = %config.environment, "lead capture function starting");

    let config = &config;
    run(service_fn(move |event| capture_lead(event, config))).await
}
