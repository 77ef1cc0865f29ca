use hyper::{Body, Request, Response};
use serde::Deserialize;
use std::convert::Infallible;

use crate::scanner::{self, compat, requirements};

use super::response_body::ResponseBody;

#[derive(Debug, Deserialize)]
pub struct RankGamesRequest {
    pub game_ids: Option<Vec<String>>,
}

pub async fn rank_games(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let body_bytes = hyper::body::to_bytes(req.into_body()).await.unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    // empty body means "rank the whole catalog"
    let game_ids = if body_str.trim().is_empty() {
        requirements::all_game_ids()
    } else {
        match serde_json::from_str::<RankGamesRequest>(&body_str) {
            Ok(req_json) => req_json
                .game_ids
                .unwrap_or_else(requirements::all_game_ids),
            Err(_) => {
                let response = Response::builder()
                    .status(hyper::StatusCode::BAD_REQUEST)
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        serde_json::to_string(&ResponseBody::Error("Invalid JSON.".to_string()))
                            .unwrap(),
                    ))
                    .unwrap();
                return Ok(response);
            }
        }
    };

    let profile = scanner::current_profile().await;
    let ranked = compat::rank_compatible(&profile, &game_ids);

    let response = Response::builder()
        .status(hyper::StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&ranked).unwrap()))
        .unwrap();
    Ok(response)
}
