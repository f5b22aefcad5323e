//! Entity Module

pub mod session_token;
