pub mod claims;
pub mod email;
pub mod password;
pub mod refresh_token;
pub mod user;
