//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, HMAC, Base64, constant-time compare)
//! - Admin credential digest and verification
//! - Cookie building and extraction
//! - Client address extraction for request logging

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
