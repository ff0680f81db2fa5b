pub mod register;
pub mod session;
pub mod token;
pub mod username;
