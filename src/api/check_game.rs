use hyper::{Body, Request, Response};
use serde::Deserialize;
use std::convert::Infallible;

use crate::scanner::{self, compat};

use super::response_body::ResponseBody;

#[derive(Debug, Deserialize)]
pub struct CheckGameRequest {
    pub game_id: String,
}

pub async fn check_game(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let body_bytes = hyper::body::to_bytes(req.into_body()).await.unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    let check = match serde_json::from_str::<CheckGameRequest>(&body_str) {
        Ok(req_json) => req_json,
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
    };

    let profile = scanner::current_profile().await;

    match compat::check_compatibility(&profile, &check.game_id) {
        Some(result) => {
            let response = Response::builder()
                .status(hyper::StatusCode::OK)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&result).unwrap()))
                .unwrap();
            Ok(response)
        }
        // not in the catalog: no opinion, not a scored zero
        None => {
            let response = Response::builder()
                .status(hyper::StatusCode::NOT_FOUND)
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&ResponseBody::Error("Unknown game id.".to_string()))
                        .unwrap(),
                ))
                .unwrap();
            Ok(response)
        }
    }
}
