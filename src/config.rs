/// Configuration constants for the ZIA API
pub mod api {
    /// Base path for ZIA API v1
    pub const BASE_PATH: &str = "/api/v1";

    /// Page size used when listing locations (endpoint maximum)
    pub const LOCATION_PAGE_SIZE: u32 = 1000;

    /// Page size used when syncing the full user list for group assignment
    pub const USER_SYNC_PAGE_SIZE: u32 = 1000;

    /// Maximum ids accepted by POST /users/bulkDelete
    pub const MAX_BULK_DELETE_USERS: usize = 500;

    /// Maximum ids accepted by POST /locations/bulkDelete
    pub const MAX_BULK_DELETE_LOCATIONS: usize = 100;

    /// Maximum ids accepted by POST /vpnCredentials/bulkDelete
    pub const MAX_BULK_DELETE_VPN_CREDENTIALS: usize = 100;
}

/// Configuration constants for profiles and credentials
pub mod credentials {
    /// Profile file name (relative to the platform config directory)
    pub const FILE_NAME: &str = "ziactl/config.json";

    /// Environment variable pointing at an alternate profile file
    pub const CONFIG_ENV_VAR: &str = "ZIACTL_CONFIG";

    /// Environment variable names checked for each credential field
    pub const USERNAME_ENV_VAR: &str = "ZIA_USERNAME";
    pub const PASSWORD_ENV_VAR: &str = "ZIA_PASSWORD";
    pub const API_KEY_ENV_VAR: &str = "ZIA_API_KEY";
    pub const HOST_ENV_VAR: &str = "ZIA_HOST";
}

/// Default values for the CLI
pub mod defaults {
    /// Default ZIA API host (the zscaler.net cloud)
    pub const HOST: &str = "zsapi.zscaler.net";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default retry budget for rate-limited requests
    pub const RETRIES: u32 = 4;

    /// Default backoff between rate-limited attempts, in seconds
    pub const BACKOFF_SECONDS: u64 = 2;

    /// Default page size for full retrievals
    pub const PAGE_SIZE: u32 = 500;

    /// Zscaler cloud names accepted by --cloud
    pub const CLOUDS: &[&str] = &[
        "zscaler",
        "zscalerone",
        "zscalertwo",
        "zscalerthree",
        "zscloud",
        "zscalerbeta",
    ];
}
