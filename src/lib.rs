pub mod auction;
pub mod auction_store;
pub mod config;
pub mod database;
pub mod handlers;
pub mod scheduler;
