//! Pulse Relay — ingestion and retrieval backend for heart-rate/SpO2
//! readings posted by embedded devices and displayed on a dashboard.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod store;
