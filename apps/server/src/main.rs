use anyhow::Context;
use sledger::domain::config::{ApiConfig, LoggingConfig};
use sledger::kernel::config::load_config;
use sledger_logger::{FileSink, Logger, parse_level, parse_rotation};
use sledger_server::Server;
use std::path::PathBuf;

#[sledger_runtime::main(server)]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let cfg: ApiConfig = load_config(path).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}

fn init_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(logging.console)
        .level(parse_level(&logging.level)?);

    if let Some(directives) = &logging.env_filter {
        builder = builder.env_filter(directives.as_str());
    }
    if let Some(directory) = &logging.directory {
        let sink = FileSink::new(directory)
            .rotation(parse_rotation(&logging.rotation)?)
            .max_files(logging.max_files)
            .json(logging.json);
        builder = builder.file(sink);
    }

    Ok(builder.init()?)
}
