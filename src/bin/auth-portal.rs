use anyhow::Result;
use auth_portal::cli::{self, telemetry};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    let action = cli::start()?;

    let accepted = action.execute().await;

    telemetry::shutdown_tracer();

    if !accepted? {
        std::process::exit(1);
    }

    Ok(())
}
