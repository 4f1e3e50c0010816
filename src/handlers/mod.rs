pub mod feed;
pub mod news;
pub mod theme;
