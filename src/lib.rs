// Library for tests to access modules

pub mod config;
pub mod error;
pub mod exporter;
pub mod kea_repo;
pub mod models;
pub mod routes;
pub mod stats;
pub mod subnet_names;
pub mod version;
