//! Constants used throughout the application
//!
//! This module centralizes magic strings and other constant values to
//! improve maintainability and consistency.

// Remote service defaults
/// Base URL of the food service when no configuration overrides it
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

// Configuration
/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "menulist.toml";

// Logging
/// Log file written under the XDG data directory when file logging is on
pub const LOG_FILE_NAME: &str = "menulist.log";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_SERVICE_UNREACHABLE: &str = "❌ Error: could not reach the food service";
