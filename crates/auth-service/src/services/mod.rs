//! Business logic layer: registration and token issuance/validation.

pub mod registration_service;
pub mod token_service;
