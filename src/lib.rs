//! Medihelp - find hospitals and clinics near a location
//!
//! Takes a coordinate (or derives one from the caller's IP), queries the
//! Overpass API for hospitals and clinics within a radius, ranks them by
//! great-circle distance and renders both structured records and a text
//! block.
//!
//! # Architecture
//! - `services`: location resolution, facility search, ranking, formatting
//! - `api`: HTTP services and middleware
//! - `interfaces`: command-line interface
//! - `config`: startup configuration
//! - `runtime`: execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
