pub mod health;
pub mod movies;
