use clap::Parser;

use entity_resolver::app;
use entity_resolver::config::{Args, ResolutionConfiguration};
use entity_resolver::http::{self, AppState};

fn main() -> std::io::Result<()> {
    app::init();

    let args = Args::parse();
    let config = ResolutionConfiguration::individual();
    log::info!("starting entity-resolver on {} with config {}", args.bind, config.entity_type);

    let app_state = actix_web::web::Data::new(AppState::new(config));
    http::run(args.bind, app_state)
}
