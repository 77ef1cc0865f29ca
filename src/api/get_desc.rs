use hyper::{Body, Request, Response};
use std::convert::Infallible;

use crate::scanner;

pub async fn get_desc(_req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let desc = scanner::get_default_scanner_desc().await;

    let response = Response::builder()
        .status(hyper::StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&desc).unwrap()))
        .unwrap();
    Ok(response)
}
