use clap::Parser;

mod achievements;
mod app_context;
mod cli;
mod health;
mod http;
mod imagery;
mod logging;
mod map;
mod players;
mod quests;
mod scoring;
mod sessions;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init();
    let imagery = imagery::street_view::StreetViewImagery::new(&args);
    let app_context = app_context::init(imagery);
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the HTTP server.");
}
