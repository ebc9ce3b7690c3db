//! Party codes and their display colours.

/// Colour used for any party code without an assigned colour.
pub const FALLBACK_COLOR: &str = "#808080";

/// Returns the chart colour for a party code.
///
/// The mapping is closed; unmapped codes get [`FALLBACK_COLOR`].
pub fn party_color(code: &str) -> &'static str {
    match code {
        "BJP" => "#FF9933",
        "INC" => "#008000",
        "AAP" | "TMC" => "#00CED1",
        "DMK" | "CPM" => "#FF0000",
        "BSP" => "#0000FF",
        _ => FALLBACK_COLOR,
    }
}

/// Legend entries shown under the constituency map, in display order.
pub const MAP_LEGEND: [(&str, &str); 4] = [
    ("BJP", "#FF9933"),
    ("INC", "#008000"),
    ("AAP", "#00CED1"),
    ("Others", FALLBACK_COLOR),
];

/// Discrete code used by the choropleth colourscale.
///
/// BJP, INC and AAP get their own bands; everything else shares the
/// "others" band.
pub fn map_code(code: &str) -> u8 {
    match code {
        "BJP" => 1,
        "INC" => 2,
        "AAP" => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_party_colors() {
        assert_eq!(party_color("BJP"), "#FF9933");
        assert_eq!(party_color("INC"), "#008000");
        assert_eq!(party_color("TMC"), "#00CED1");
        assert_eq!(party_color("DMK"), "#FF0000");
        assert_eq!(party_color("BSP"), "#0000FF");
    }

    #[test]
    fn test_unmapped_party_falls_back() {
        assert_eq!(party_color("JDU"), FALLBACK_COLOR);
        assert_eq!(party_color(""), FALLBACK_COLOR);
        // Codes are case-sensitive
        assert_eq!(party_color("bjp"), FALLBACK_COLOR);
    }

    #[test]
    fn test_map_code_bands() {
        assert_eq!(map_code("BJP"), 1);
        assert_eq!(map_code("INC"), 2);
        assert_eq!(map_code("AAP"), 3);
        assert_eq!(map_code("SP"), 4);
    }
}
