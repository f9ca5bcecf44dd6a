pub mod api;
pub mod board;
pub mod config;
pub mod normalize;
pub mod observability;
pub mod submission;
