pub mod answer;
pub mod api;
pub mod config;
pub mod search;
