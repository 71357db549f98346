//! Infrastructure layer - embedded database.

mod db;
mod migrations;

pub use db::Database;
