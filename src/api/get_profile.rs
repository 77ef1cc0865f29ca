use hyper::{Body, Request, Response};
use std::convert::Infallible;

use crate::scanner;

pub async fn get_profile(_req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let profile = scanner::current_profile().await;

    let response = Response::builder()
        .status(hyper::StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&profile).unwrap()))
        .unwrap();
    Ok(response)
}
