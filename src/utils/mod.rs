pub mod category_routes;
pub mod config;
pub mod controller;
pub mod filter;
pub mod github_client;
pub mod state;
pub mod theme_store;
