#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod handlers_tide;
mod query_main;
mod server_config;
mod server_main;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Piece moves")
        .version(clap::crate_version!())
        .about("Reachable squares and move legality for single chess pieces")
        .subcommand_required(true)
        .subcommand(Command::new("server").about("Run as HTTP server").arg(
            arg!(<config_file> "Path to the configuration file: yaml-serialized ServerConfig."),
        ))
        .subcommand(
            Command::new("query")
                .about("Answer one lookup and print the reply")
                .arg(arg!(<figure> "Piece name: king, queen, rook, bishop, knight or pawn"))
                .arg(arg!(<current_field> "Field the piece is expected to stand on, e.g. D5"))
                .arg(arg!([dest_field] "Destination field; when given, the move is validated"))
                .arg(arg!(--config <config_file> "Read piece placement from this config file")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("server", sub_matches)) => {
            let config = server_config::read_config_file(
                sub_matches.get_one::<String>("config_file").unwrap(),
            )?;
            async_std::task::block_on(server_main::run(config))
        }
        Some(("query", sub_matches)) => query_main::run(query_main::QueryConfig {
            figure: sub_matches.get_one::<String>("figure").unwrap().clone(),
            current_field: sub_matches.get_one::<String>("current_field").unwrap().clone(),
            dest_field: sub_matches.get_one::<String>("dest_field").cloned(),
            config_file: sub_matches.get_one::<String>("config").cloned(),
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
