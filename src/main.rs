//! Runs the explore page headlessly against a live endpoint and prints the
//! rendered results.
//!
//! Usage: `dataset-explore [FILTERS]`, where FILTERS is a query string such as
//! `query=genomics&publication_type=Journal+Article&sorting=oldest`.

use std::env;
use std::path::Path;

use dotenvy::dotenv;

use dataset_explore::dto::explore::SearchOutcome;
use dataset_explore::forms::filters::FilterArgs;
use dataset_explore::models::config::ClientConfig;
use dataset_explore::page::memory::MemoryDom;
use dataset_explore::page::{DomReader, ids};
use dataset_explore::render::CardRenderer;
use dataset_explore::services::session::ExploreSession;
use dataset_explore::transport::http::HttpSearchClient;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let client_config = match ClientConfig::load(Path::new("config"), &app_env) {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let filters = env::args().nth(1).unwrap_or_default();
    let filter_args = match FilterArgs::parse(&filters) {
        Ok(filter_args) => filter_args,
        Err(err) => {
            log::error!("Invalid filters {filters:?}: {err}");
            std::process::exit(2);
        }
    };

    let mut dom = MemoryDom::explore_page();
    if let Some(token) = &client_config.csrf_token {
        dom = dom.with_input(ids::CSRF_TOKEN, token);
    }
    if let Err(err) = filter_args.apply(&mut dom) {
        log::error!("Invalid filters {filters:?}: {err}");
        std::process::exit(2);
    }

    let transport = match HttpSearchClient::new(&client_config) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let renderer = match CardRenderer::with_offset(client_config.display_offset()) {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("Failed to load templates: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Searching {}", transport.endpoint());
    let (session, outcome) =
        match ExploreSession::start(dom, renderer, transport, &filter_args.location()) {
            Ok(started) => started,
            Err(err) => {
                log::error!("Search failed: {err}");
                std::process::exit(1);
            }
        };

    let dom = session.dom();
    println!("{}", dom.text(ids::RESULTS_NUMBER).unwrap_or_default());
    for card in dom.children(ids::RESULTS) {
        println!("{card}");
    }

    if outcome == SearchOutcome::Failed {
        std::process::exit(1);
    }
}
