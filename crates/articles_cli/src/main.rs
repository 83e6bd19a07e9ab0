//! CLI entry point.
//!
//! # Responsibility
//! - Wire config loading, store bootstrap and article generation end to end.
//! - Map core failures to a message on stderr and exit code 1.
//!
//! Usage: `articles_cli [CONFIG_JSON] [SCRIPTS_DIR]`. Without a config the
//! store runs in memory; without a scripts directory the bundled scripts seed it.

use articles_core::{
    default_log_level, init_logging, Article, ArticleService, BootstrapScripts,
    JoinArticleGenerator, ServiceResult, StoreConfig, StoreResult, WordStore,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(default_log_level(), None) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(std::env::args().skip(1)) {
        Ok(content) => {
            println!("{content}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: impl Iterator<Item = String>) -> Result<String, Box<dyn Error>> {
    let config = match args.next() {
        Some(path) => StoreConfig::load(path)?,
        None => StoreConfig::in_memory(),
    };
    let scripts = match args.next() {
        Some(dir) => BootstrapScripts::load_dir(dir)?,
        None => BootstrapScripts::bundled(),
    };

    let service = ArticleService::new(
        WordStore::open(&config, &scripts)?,
        JoinArticleGenerator::default(),
    );
    let generated = service.generate_article();
    let closed = service.into_repo().close();

    finish(generated, closed)
}

/// Picks the outcome to report; a generation failure wins over a close failure.
fn finish(
    generated: ServiceResult<Article>,
    closed: StoreResult<()>,
) -> Result<String, Box<dyn Error>> {
    match (generated, closed) {
        (Ok(article), Ok(())) => Ok(article.content),
        (Ok(_), Err(close_err)) => Err(close_err.into()),
        (Err(err), Ok(())) => Err(err.into()),
        (Err(err), Err(close_err)) => {
            error!(
                "event=store_close module=cli status=error error={}",
                close_err
            );
            Err(err.into())
        }
    }
}
