use hyper::{Body, Request, Response};
use serde::Deserialize;
use std::convert::Infallible;

use crate::scanner::{self, compat};

use super::response_body::ResponseBody;

#[derive(Debug, Deserialize)]
pub struct GetTipsRequest {
    pub game_id: String,
}

pub async fn get_tips(req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let body_bytes = hyper::body::to_bytes(req.into_body()).await.unwrap();
    let body_str = String::from_utf8(body_bytes.to_vec()).unwrap();

    let tips_req = match serde_json::from_str::<GetTipsRequest>(&body_str) {
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

    match compat::check_compatibility(&profile, &tips_req.game_id) {
        Some(result) => {
            let tips = compat::optimization_tips(&result);

            let response = Response::builder()
                .status(hyper::StatusCode::OK)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&tips).unwrap()))
                .unwrap();
            Ok(response)
        }
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
