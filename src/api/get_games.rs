use hyper::{Body, Request, Response};
use serde::Serialize;
use std::convert::Infallible;

use crate::scanner::requirements::{self, GameRequirements, GAME_IDS};

#[derive(Serialize)]
struct GameListing {
    game_id: &'static str,
    display_name: &'static str,
    requirements: &'static GameRequirements,
}

pub fn get_games(_req: Request<Body>) -> Result<Response<Body>, Infallible> {
    let listings: Vec<GameListing> = GAME_IDS
        .iter()
        .copied()
        .filter_map(|game_id| {
            requirements::get_entry(game_id).map(|entry| GameListing {
                game_id,
                display_name: entry.display_name,
                requirements: &entry.requirements,
            })
        })
        .collect();

    let response = Response::builder()
        .status(hyper::StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&listings).unwrap()))
        .unwrap();
    Ok(response)
}
