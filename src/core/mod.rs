pub mod article;
pub mod qualified;
pub mod truncate;
