use piece_moves::reply::{self, Reply};
use piece_moves::{Registry, default_placements};
use serde::Serialize;

use crate::server_config::read_config_file;


pub struct QueryConfig {
    pub figure: String,
    pub current_field: String,
    pub dest_field: Option<String>,
    pub config_file: Option<String>,
}

fn format_reply<T: Serialize>(reply: &Reply<T>) -> serde_json::Result<String> {
    Ok(format!("{} {}", reply.status.code(), serde_json::to_string_pretty(&reply.body)?))
}

fn answer(registry: &Registry, config: &QueryConfig) -> serde_json::Result<String> {
    match &config.dest_field {
        None => format_reply(&reply::moves_reply(registry, &config.figure, &config.current_field)),
        Some(dest_field) => format_reply(&reply::move_reply(
            registry,
            &config.figure,
            &config.current_field,
            dest_field,
        )),
    }
}

pub fn run(config: QueryConfig) -> anyhow::Result<()> {
    let placements = match &config.config_file {
        Some(filename) => read_config_file(filename)?.placements,
        None => default_placements(),
    };
    let registry = Registry::new(&placements);
    println!("{}", answer(&registry, &config)?);
    Ok(())
}
