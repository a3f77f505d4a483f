pub mod configuration;
pub mod domain;
pub mod page;
pub mod registration_client;
pub mod startup;
pub mod submission_handler;
pub mod telemetry;
pub mod utils;
