pub mod handlers;
pub mod router;
pub mod state;

#[cfg(test)]
pub mod testing;

use crate::{conf::Settings, prelude::Result};
use router::build_routes;
use state::AppState;

pub async fn listen(settings: Settings) -> Result<()> {
    let addr = format!("0.0.0.0:{}", settings.listen_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} listening at port {}", &settings.service_name, settings.listen_port);
    let state = AppState::new(settings)?;
    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
