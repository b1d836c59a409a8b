//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::DashPaths;
pub use settings::Settings;
