use std::sync::Arc;

use anyhow::Context;
use log::info;
use piece_moves::Registry;

use crate::handlers_tide::{self, ServerState};
use crate::server_config::ServerConfig;


pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let registry = Arc::new(Registry::new(&config.placements));
    let mut app = tide::with_state::<ServerState>(registry);
    handlers_tide::register_handlers(&mut app);

    info!("Starting server on {}", config.bind_address);
    app.listen(config.bind_address.clone())
        .await
        .with_context(|| format!("Failed to serve on {}.", config.bind_address))
}
