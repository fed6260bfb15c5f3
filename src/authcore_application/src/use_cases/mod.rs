pub mod issue_tokens;
pub mod login;
pub mod refresh;
pub mod register;
