//! # breeze-remote
//!
//! HTTP implementation of the [`RemoteDrive`](breeze_core::traits::RemoteDrive)
//! trait, speaking the drive store's REST surface.

pub mod http;

pub use http::HttpRemoteDrive;
