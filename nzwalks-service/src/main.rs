use anyhow::Context;
use nzwalks_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config).context("failed to initialize tracing")?;

    let app = app(AppState::new(config.clone()));

    Server::new(config)
        .serve(app)
        .await
        .context("server terminated with an error")?;

    Ok(())
}
