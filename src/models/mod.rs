pub mod cache;
pub mod error;
pub mod github;
pub mod news;
pub mod tag;
pub mod theme;
pub mod tool;
