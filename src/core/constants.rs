/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values shared by the parser, the
/// reachability checker and the console output.
/// Default configuration values
pub mod defaults {
    /// Timeout in seconds for each probe request
    pub const TIMEOUT_SECONDS: u64 = 5;
    /// Number of stream checks in flight at once
    pub const CONCURRENCY: usize = 10;
    /// User-Agent sent with every probe
    pub const USER_AGENT: &str = "Mozilla/5.0";
    /// Stream list processed when no file is given
    pub const INPUT_FILE: &str = "live_streams.sii";
    /// Name of the optional configuration file
    pub const CONFIG_FILE: &str = ".streamsup.toml";
    /// How many parent directories are searched for the configuration file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
    /// Maximum redirects followed by a probe
    pub const MAX_REDIRECTS: usize = 10;
}

/// Bounds enforced when validating configuration
pub mod limits {
    /// Largest accepted timeout (24 hours)
    pub const MAX_TIMEOUT_SECONDS: u64 = 86_400;
    /// Largest accepted concurrency
    pub const MAX_CONCURRENCY: usize = 1000;
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK
    pub const OK: u16 = 200;
    /// HTTP 206 Partial Content - answer to a ranged GET
    pub const PARTIAL_CONTENT: u16 = 206;
    /// HTTP 301 Moved Permanently
    pub const MOVED_PERMANENTLY: u16 = 301;
    /// HTTP 302 Found
    pub const FOUND: u16 = 302;
}

/// Two-tier probe parameters
pub mod probe {
    use super::http_status;

    /// Statuses that make a HEAD probe count as reachable
    pub const HEAD_ACCEPTED: [u16; 3] = [
        http_status::OK,
        http_status::MOVED_PERMANENTLY,
        http_status::FOUND,
    ];
    /// Statuses that make the ranged GET fallback count as reachable
    pub const RANGED_GET_ACCEPTED: [u16; 2] = [http_status::OK, http_status::PARTIAL_CONTENT];
    /// Byte range requested by the fallback GET
    pub const RANGE: &str = "bytes=0-100";
}

/// `.sii` stream list format
pub mod sii {
    /// Footer emitted when the input has none
    pub const DEFAULT_FOOTER: &str = "}\n\n}";
    /// Separator between the fields of a stream payload
    pub const FIELD_SEPARATOR: char = '|';
    /// Number of fields a payload must have to become a record
    pub const FIELD_COUNT: usize = 6;
}

/// Display and formatting constants
pub mod display {
    /// Marker for a reachable stream
    pub const SUCCESS_MARK: &str = "✓";
    /// Marker for an unreachable stream
    pub const FAILURE_MARK: &str = "✗";
    /// Width of the rule framing the results block
    pub const RULE_WIDTH: usize = 60;
}
