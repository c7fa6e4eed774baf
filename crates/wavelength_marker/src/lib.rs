// crates/wavelength_marker/src/lib.rs

//! Literal markers shared by the header loading and extraction crates.

/// The line that opens the wavelength list in an ENVI header.
/// Matched exactly, after the line has been trimmed.
pub const WAVELENGTH_MARKER: &str = "wavelength = {";

/// The line that closes a brace-delimited ENVI list.
pub const CLOSING_BRACE: &str = "}";

/// The first line of every ENVI header.
pub const ENVI_MAGIC: &str = "ENVI";

/// Header path used when neither the command line nor the environment
/// provides one.
pub const DEFAULT_HEADER_PATH: &str = "data.hdr";

/// Environment variable consulted for the header path.
pub const HEADER_PATH_ENV: &str = "ENVI_HDR_PATH";
