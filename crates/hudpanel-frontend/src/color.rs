use hudpanel_bridge::ui::Rgba;

/// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into normalized channels.
pub fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |slice: &str| u8::from_str_radix(slice, 16).ok().map(|v| v as f32 / 255.0);
    let short = |index: usize| {
        let c = &digits[index..index + 1];
        u8::from_str_radix(c, 16).ok().map(|v| (v * 17) as f32 / 255.0)
    };

    match digits.len() {
        3 | 4 => {
            let a = if digits.len() == 4 { short(3)? } else { 1.0 };
            Some(Rgba::new(short(0)?, short(1)?, short(2)?, a))
        }
        6 | 8 => {
            let a = if digits.len() == 8 { channel(&digits[6..8])? } else { 1.0 };
            Some(Rgba::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                a,
            ))
        }
        _ => None,
    }
}

/// Theme color with an explicit opacity. Unparseable colors fall back to
/// white; the alpha channel of the hex string is always replaced.
pub fn themed(hex: &str, opacity: f32) -> Rgba {
    parse_hex(hex)
        .unwrap_or(Rgba::WHITE)
        .with_alpha(opacity.clamp(0.0, 1.0))
}
