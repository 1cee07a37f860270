pub mod split;
pub mod token;

pub use split::split_body;
pub use token::{validate_token, Token};
