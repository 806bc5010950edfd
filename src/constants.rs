//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum request body size in bytes (1 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Store backend identifiers
pub mod store_backends {
    pub const POSTGRES: &str = "postgres";
    pub const MEMORY: &str = "memory";
}

// =============================================================================
// API
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Collection names, also used as the list wrapper key and URL segment
pub mod collections {
    pub const USERS: &str = "users";
    pub const CONTENTS: &str = "contents";
    pub const REWARDS: &str = "rewards";
    pub const TICKETS: &str = "tickets";
}

// =============================================================================
// RECORD DEFAULTS
// =============================================================================

/// Status given to newly created content items
pub const DEFAULT_CONTENT_STATUS: &str = "draft";

/// Status of published content items
pub const LIVE_CONTENT_STATUS: &str = "live";

/// Known support agents a ticket can be assigned to
pub mod agents {
    pub const NONE: &str = "none";
    pub const MRCHARM: &str = "mrcharm";
    pub const FUNGEEY: &str = "fungeey";
    pub const DEELULU: &str = "deelulu";
    pub const FINCHRINCH: &str = "finchrinch";
    pub const BANGLADESH: &str = "bangladesh";
    pub const TANIM: &str = "tanim";
}
