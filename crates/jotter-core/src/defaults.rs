//! Centralized default constants for jotter.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic numbers.

// =============================================================================
// NOTE VALIDATION
// =============================================================================

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 3;

/// Maximum title length in characters (matches the `VARCHAR(255)` column).
pub const TITLE_MAX_CHARS: usize = 255;

/// Minimum content length in characters.
pub const CONTENT_MIN_CHARS: usize = 10;

// =============================================================================
// SUMMARIZATION
// =============================================================================

/// Word limit for summarization input; also the output token bound.
pub const MAX_TOKENS: usize = 1000;

/// Per-provider request timeout in seconds.
pub const SUMMARY_TIMEOUT_SECS: u64 = 30;

/// Generation calls slower than this are logged as slow.
pub const SLOW_GENERATION_MS: u64 = 10_000;

/// Default OpenAI-compatible endpoint (primary provider).
pub const OPENAI_URL: &str = "https://api.openai.com/v1";

/// Default primary generation model.
pub const OPENAI_GEN_MODEL: &str = "gpt-4o-mini";

/// Default Gemini endpoint (secondary provider).
pub const GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default secondary generation model.
pub const GEMINI_GEN_MODEL: &str = "gemini-2.0-flash";

// =============================================================================
// SERVER
// =============================================================================

/// Default listen host.
pub const HOST: &str = "0.0.0.0";

/// Default listen port.
pub const PORT: u16 = 8000;

/// Default database URL when `DATABASE_URL` is not set.
pub const DATABASE_URL: &str = "postgres://localhost/jotter";

/// Maximum accepted request body in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// DATABASE POOL
// =============================================================================

/// Default pool size when `DB_MAX_CONNECTIONS` is not set.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a free pooled connection.
pub const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Idle connections are closed after this many seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;

/// Connections are recycled after this many seconds.
pub const DB_MAX_LIFETIME_SECS: u64 = 1800;
