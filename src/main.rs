use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server};
use log::{error, info};

use std::convert::Infallible;
use std::net::SocketAddr;

mod api;
mod logger;
mod scanner;

const DEFAULT_PORT: u16 = 8080;

async fn req_handler(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    match (req.method(), req.uri().path()) {
        (&Method::GET, "/healthcheck") => api::healthcheck::healthcheck(req),
        (&Method::GET, "/get-desc") => api::get_desc::get_desc(req).await,
        (&Method::GET, "/get-profile") => api::get_profile::get_profile(req).await,
        (&Method::POST, "/rescan") => api::rescan::rescan(req).await,
        (&Method::GET, "/get-games") => api::get_games::get_games(req),
        (&Method::POST, "/check-game") => api::check_game::check_game(req).await,
        (&Method::POST, "/get-tips") => api::get_tips::get_tips(req).await,
        (&Method::POST, "/rank-games") => api::rank_games::rank_games(req).await,
        (_, _) => api::_404::_404(req),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    logger::init_logger();

    let port = dotenv::var("RIGSCAN_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    info!("listening on {}", addr);

    let server = Server::bind(&addr).serve(make_service_fn(|_conn| async {
        Ok::<_, Infallible>(service_fn(req_handler))
    }));

    if let Err(e) = server.await {
        error!("server error: {}", e);
    }
}
