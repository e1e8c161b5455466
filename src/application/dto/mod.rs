//! # Data Transfer Objects

pub mod upload_request;
