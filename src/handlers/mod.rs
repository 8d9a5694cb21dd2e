pub mod player_api;
