pub mod config;
pub mod http_client;
pub mod http_fetch;
pub mod incidents;
pub mod logging;
pub mod model;
pub mod player_match;
pub mod report;
pub mod sport365_fetch;
pub mod tally;
