//! Configuration and data types shared by the store and the worker

pub mod config;
pub mod models;
