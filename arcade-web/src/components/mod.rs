pub mod footer;
pub mod game_card;
pub mod menu;
pub mod modal;
pub mod player;
pub mod privacy_policy;
