//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 9090;

// =============================================================================
// Environment
// =============================================================================

pub const ENV_SERVER_HOST: &str = "SERVER_HOST";

pub const ENV_SERVER_PORT: &str = "SERVER_PORT";

/// Selects `monotonic` (default) or `entry-count` id allocation
pub const ENV_USER_ID_ALLOCATION: &str = "USER_ID_ALLOCATION";

// =============================================================================
// Responses
// =============================================================================

/// Body returned by the root endpoint
pub const ROOT_GREETING: &str = "Hello World";

/// Path prefix for user resources
pub const USERS_PATH: &str = "/users";
