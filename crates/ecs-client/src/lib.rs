#![doc = include_str!("../README.md")]

mod client;
mod error;
mod transport;
mod types;

pub use client::EcsClient;
pub use error::ClientError;
pub use transport::{ServiceCall, ServiceResponse, Transport, CONTENT_TYPE};
pub use types::*;
