mod application;
mod auth;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

#[cfg(test)]
mod fixtures;

use application::ApplicationEnv;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (state, state_to_close) = application::create_state(&env).await?;
    let middleware = application::create_middleware(&env);
    let app = application::create_application(state, middleware);

    tracing::info!(bind_address = %env.bind_address, "starting server");
    let listener = TcpListener::bind(env.bind_address).await?;
    let serve_result = axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await;

    application::close(state_to_close).await;
    serve_result?;

    Ok(())
}
