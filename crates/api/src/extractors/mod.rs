//! Request extractors for the user resource.

mod user_body;
mod user_path;

pub use user_body::{decode_user_body, UserBody};
pub use user_path::UserPath;
