//! Human-readable units for report columns

const BYTE: u64 = 1;
const KILOBYTE: u64 = 1024 * BYTE;
const MEGABYTE: u64 = 1024 * KILOBYTE;
const GIGABYTE: u64 = 1024 * MEGABYTE;
const TERABYTE: u64 = 1024 * GIGABYTE;

/// Format a byte count with binary scaling and a one-letter unit.
///
/// One decimal is kept unless it is zero: 100 MiB is `100M`, 2048 MiB is
/// `2G`, 1.5 GiB is `1.5G`. Zero bytes is `0`.
pub fn human_bytes(bytes: u64) -> String {
    let (unit, divisor) = match bytes {
        b if b >= TERABYTE => ("T", TERABYTE),
        b if b >= GIGABYTE => ("G", GIGABYTE),
        b if b >= MEGABYTE => ("M", MEGABYTE),
        b if b >= KILOBYTE => ("K", KILOBYTE),
        b if b >= BYTE => ("B", BYTE),
        _ => return "0".to_string(),
    };

    let value = format!("{:.1}", bytes as f64 / divisor as f64);
    let value = value.strip_suffix(".0").unwrap_or(&value);
    format!("{}{}", value, unit)
}

/// Format a CPU fraction as a percentage with one decimal (0.73 is `73.0%`)
pub fn format_cpu(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
