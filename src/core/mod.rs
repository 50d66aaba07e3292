pub mod migration;
pub mod services;
pub mod time;
