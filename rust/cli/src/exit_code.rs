//! Exit code constants for the CLI application.
//!
//! Every command maps its outcome to one of these in `run`, so scripts can
//! tell a bad table apart from a failed Monte Carlo cross-check.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad input, unreadable file, rejected game.
pub const ERROR: i32 = 2;

/// Simulated frequencies strayed beyond the configured tolerance.
pub const CROSS_CHECK_FAILED: i32 = 3;
