/// User agent string sent with every request to identify this client to the LifePlus API
pub const USER_AGENT: &str = "lifeplus-client-rs/3.1.0";
/// Default page number for paginated API requests
pub const DEFAULT_PAGE: u32 = 1;
/// Default number of items per page for paginated API requests
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Default request timeout in seconds when not configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Default base URL for the LifePlus API v2
pub const DEFAULT_BASE_URL: &str = "https://api.lifeplusbd.com/api/v2";
/// Bangladesh country calling code, stripped during phone normalization
pub const BD_COUNTRY_CODE: &str = "880";
/// Header carrying the partner API key for server-to-server requests
pub const HEADER_API_KEY: &str = "X-API-Key";
/// Header carrying the partner identifier for server-to-server requests
pub const HEADER_PARTNER_ID: &str = "X-Partner-ID";
/// Header carrying the per-request correlation identifier
pub const HEADER_REQUEST_ID: &str = "X-Request-ID";
