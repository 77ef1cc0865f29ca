pub mod _404;
pub mod check_game;
pub mod get_desc;
pub mod get_games;
pub mod get_profile;
pub mod get_tips;
pub mod healthcheck;
pub mod rank_games;
pub mod rescan;
pub mod response_body;
