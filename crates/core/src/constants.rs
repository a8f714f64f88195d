//! Shared constants for case-tracker.

/// Status assigned to every freshly created case.
pub const STATUS_PENDING: &str = "Pending";

/// Status set by the mark-complete operation.
pub const STATUS_COMPLETE: &str = "complete";

/// Default page size for case listings when the caller omits `limit`.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Upper bound on `limit` for any listing (DoS protection).
pub const MAX_LIST_LIMIT: usize = 1000;

/// Maximum accepted request body, which bounds image uploads.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Number of characters of extraction input echoed into logs.
pub const LOG_PREVIEW_CHARS: usize = 100;

/// SQLite connection pool: maximum connections.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection pool: acquire timeout in seconds.
pub const DB_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Default database location when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://cases.db";

/// Default generative model used for extraction.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the generative-language REST API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
