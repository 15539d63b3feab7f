const UNIT: u64 = 1024;
const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];
const GIB: f64 = (1u64 << 30) as f64;

/// Format a byte count as a human-readable base-1024 string (e.g. `"7.3 GB"`).
///
/// Counts below 1 KB are printed as a whole number of bytes; everything else
/// gets one decimal and the largest unit keeping the value below 1024.
pub fn format_byte_size(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    let mut scaled = bytes as f64 / div as f64;
    // 1023.96 KB would print as "1024.0 KB"; move it up a unit instead.
    if (scaled * 10.0).round() / 10.0 >= UNIT as f64 && exp + 1 < PREFIXES.len() {
        scaled /= UNIT as f64;
        exp += 1;
    }

    format!("{scaled:.1} {}B", PREFIXES[exp])
}

/// Percentage with two decimals, e.g. `"42.50%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Byte count in gigabytes (base 1024) with two decimals, e.g. `"7.45 GB"`.
pub fn format_gib(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}
