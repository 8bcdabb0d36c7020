pub mod core;
pub mod rules;
pub mod oracle;
pub mod whitelist;
pub mod gate;

// Process configuration and logging
pub mod config;
pub mod logging;
