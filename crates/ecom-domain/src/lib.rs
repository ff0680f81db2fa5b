//! Domain rules shared by the auth and admin services.
//!
//! This crate contains only pure types and checks with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod account;
pub mod catalog;
pub mod money;
pub mod validation;
