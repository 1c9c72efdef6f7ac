/// Application configuration module
pub mod config;
/// Snapshot pipeline and trigger entry point
pub mod job;
/// Interval trigger with shutdown
pub mod scheduler;
/// Fetcher and normalizer services
pub mod services;
