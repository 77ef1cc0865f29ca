use hyper::{Body, Request, Response};
use std::convert::Infallible;

use super::response_body::ResponseBody;

pub fn _404(_req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let response = Response::builder()
        .status(hyper::StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_string(&ResponseBody::Error(
                "No such endpoint on this scanner.".to_string(),
            ))
            .unwrap(),
        ))
        .unwrap();

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn not_found_envelope_test() {
        let req = Request::builder()
            .uri("/does-not-exist")
            .body(Body::empty())
            .unwrap();

        let res = _404(req).unwrap();
        assert_eq!(res.status(), hyper::StatusCode::NOT_FOUND);

        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"Error":"No such endpoint on this scanner."}"#);
    }
}
