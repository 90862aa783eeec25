//! Human-readable byte formatting.
//!
//! Sizes are kept as `u64` bytes everywhere and only turned into floating
//! point here, at the display boundary.

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Format a byte count using binary (base-1024) thresholds.
///
/// Exactly one tier is chosen per value:
///
/// - below 1 KB: `"<n> Bytes"`
/// - below 1 MB: `"<n / 1024> KB"`
/// - below 1 GB: `"<n / 1024²> MB"`
/// - otherwise: `"<n / 1024³> GB"`
///
/// Scaled values use two decimal places. Rounding is that of Rust's `{:.2}`
/// float formatting, which works on the exact binary value of the quotient and
/// resolves exact ties half-to-even.
///
/// # Examples
///
/// ```
/// # use gds::utils::format_bytes;
/// assert_eq!(format_bytes(1023), "1023 Bytes");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    match bytes {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{b} Bytes"),
    }
}
