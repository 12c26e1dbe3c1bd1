//! CropAlert Core - Backend Service
//!
//! This crate provides the backend for CropAlert: farmers register
//! georeferenced zones, agronomists annotate them with alert metadata,
//! and clients read zones with a reduced owner projection.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod migration;
pub mod policy;
pub mod repository;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
