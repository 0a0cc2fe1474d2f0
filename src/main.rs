use anyhow::Context;
use healthz::configuration::get_configuration;
use healthz::startup::Application;
use healthz::telemetry::{init_subscriber, shutdown_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    init_subscriber("healthz".into(), std::io::stdout, &configuration.telemetry)?;

    let application = Application::build(configuration)
        .await
        .context("Failed to bind application listener.")?;
    let outcome = application.run_until_stopped().await;

    shutdown_telemetry();
    outcome.context("Server terminated with an error.")
}
