use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::Parser;
use axum::{routing::get, Router};
use axum::http::{Response, StatusCode};
use axum::body::{boxed, Body};
use tower::{ServiceBuilder, ServiceExt};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use reqwest::Client;

use global_trend_viewer::app::App;
use global_trend_viewer::controllers::{actions, forms, index, AppState};
use global_trend_viewer::services::api_client::HttpApiClient;


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="global-trend-viewer", about="Browse GitHub users, posts and users from the Global Trend API!")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "3000")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "api_base", default_value = "http://localhost:8080")]
    api_base: String,

    #[clap(long = "sections", value_delimiter = ',', default_values_t = ["github".to_string(), "posts".to_string(), "users".to_string()])]
    sections: Vec<String>,
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt::init();

    // Create API client
    let client = HttpApiClient::new(Client::new(), &opt.api_base).unwrap_or_else(|err| {
        log::error!("Cannot use API base {}: {}", opt.api_base, err);
        std::process::exit(2);
    });

    // Register templates and navigation
    let app = App::bootstrap(Arc::new(client), &opt.sections).unwrap_or_else(|err| {
        log::error!("Failed to set up the application: {}", err);
        std::process::exit(2);
    });

    // Setup controller routes and inject app state
    let app_state = Arc::new(AppState::new(app));
    let static_dir = opt.static_dir.clone();
    let router = Router::new()
        .route("/", get(index::get_index))
        .route("/actions/:binding", get(actions::get_action))
        .route("/forms/github", get(forms::get_github))
        .route("/forms/posts", get(forms::get_posts))
        .fallback_service(get(|req| async move {
            match ServeDir::new(static_dir).oneshot(req).await {
                Ok(res) => res.map(boxed),
                Err(err) => Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(boxed(Body::from(format!("error: {err}"))))
                    .expect("error response"),
            }
        }))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);
    log::info!("Reading data from {}", opt.api_base);

    if let Err(err) = axum::Server::bind(&sock_addr)
        .serve(router.into_make_service())
        .await
    {
        log::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
