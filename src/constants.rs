//! Fixed endpoints and header names of the marketplace API.

/// Production API base URL.
pub const MAINNET_API_URL: &str = "https://api.opensea.io";

/// Test network (Rinkeby) API base URL.
pub const TESTNET_API_URL: &str = "https://rinkeby-api.opensea.io";

/// Asset listing path. The query string follows directly.
pub const ASSETS_PATH: &str = "/api/v1/assets/";

/// Single asset path prefix, followed by `{contract}/{token_id}`.
pub const ASSET_PATH: &str = "/api/v1/asset";

pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Environment variable the CLI reads the API key from.
pub const API_KEY_ENV: &str = "OPENSEA_API_KEY";
