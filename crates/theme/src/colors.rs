use crossterm::style::Color;

/// Parse a colour from the config file.
///
/// Accepts ANSI colour names (`"blue"`, `"dark_cyan"`, `"grey"`) and
/// CSS-style hex strings (`#RRGGBB`).  Names are case-insensitive and may
/// use `-` or `_` as separator.
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.starts_with('#') {
        return from_hex(spec);
    }

    let name = spec.to_ascii_lowercase().replace('-', "_");
    let color = match name.as_str() {
        "black"        => Color::Black,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red"          => Color::Red,
        "dark_red"     => Color::DarkRed,
        "green"        => Color::Green,
        "dark_green"   => Color::DarkGreen,
        "yellow"       => Color::Yellow,
        "dark_yellow"  => Color::DarkYellow,
        "blue"         => Color::Blue,
        "dark_blue"    => Color::DarkBlue,
        "magenta"      => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan"         => Color::Cyan,
        "dark_cyan"    => Color::DarkCyan,
        "white"        => Color::White,
        "grey" | "gray" => Color::Grey,
        "reset" | "default" => Color::Reset,
        _ => return None,
    };
    Some(color)
}

fn from_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

    Some(Color::Rgb {
        r: byte(hex.get(0..2)?)?,
        g: byte(hex.get(2..4)?)?,
        b: byte(hex.get(4..6)?)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_and_separator_insensitive() {
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("dark-cyan"), Some(Color::DarkCyan));
        assert_eq!(parse_color("DARK_RED"), Some(Color::DarkRed));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(
            parse_color("#89b4fa"),
            Some(Color::Rgb { r: 0x89, g: 0xb4, b: 0xfa })
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_color("chartreuse"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }
}
