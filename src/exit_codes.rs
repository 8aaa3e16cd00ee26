//! Exit code constants for the scaffold CLI.
//!
//! - 0: Rendered and written with every placeholder resolved
//! - 1: Rendered with unresolved placeholders
//! - 2: Unknown template id
//! - 3: Generated file could not be written
//! - 4: Configuration or usage error, including bad command-line arguments
//!
//! The config file is loaded before any template lookup, because it names
//! template directories. A broken config therefore exits 4 even when the
//! requested template id is also unknown.

/// Successful render and write.
pub const SUCCESS: i32 = 0;

/// One or more placeholders were left unresolved.
pub const UNRESOLVED_PLACEHOLDERS: i32 = 1;

/// The requested template id does not exist in any store.
pub const TEMPLATE_NOT_FOUND: i32 = 2;

/// Writing the generated file (or creating its parent) failed.
pub const WRITE_FAILURE: i32 = 3;

/// Config file unreadable or invalid, bad arguments, or no output path.
pub const CONFIG_ERROR: i32 = 4;
