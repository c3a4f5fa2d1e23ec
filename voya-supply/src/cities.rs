//! Airport-to-city translation for the hotel flow.
//!
//! The provider's hotel endpoints key on city codes while searches arrive
//! with airport codes; multi-airport cities collapse to one city code.

/// Provider city code for an airport code. Unknown codes are assumed to
/// already be city codes and pass through uppercased.
pub fn city_code(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    let mapped = match upper.as_str() {
        "FCO" | "CIA" => "ROM",
        "CDG" | "ORY" => "PAR",
        "LHR" | "LGW" | "STN" => "LON",
        "ARN" => "STO",
        "JFK" | "LGA" | "EWR" => "NYC",
        "ORD" | "MDW" => "CHI",
        "YYZ" => "YTO",
        "HND" | "NRT" => "TYO",
        "PEK" => "BJS",
        "PVG" | "SHA" => "SHA",
        "ICN" => "SEL",
        "GRU" => "SAO",
        "GIG" => "RIO",
        "EZE" => "BUE",
        other => other,
    };
    mapped.to_string()
}

/// Display name and country for a city code, for synthetic hotel records.
pub fn city_display(city_code: &str) -> Option<(&'static str, &'static str)> {
    let entry = match city_code {
        "BCN" => ("Barcelona", "ES"),
        "MAD" => ("Madrid", "ES"),
        "ROM" => ("Rome", "IT"),
        "PAR" => ("Paris", "FR"),
        "LON" => ("London", "UK"),
        "CPH" => ("Copenhagen", "DK"),
        "AMS" => ("Amsterdam", "NL"),
        "BER" => ("Berlin", "DE"),
        "LIS" => ("Lisbon", "PT"),
        "ATH" => ("Athens", "GR"),
        "DXB" => ("Dubai", "AE"),
        "IST" => ("Istanbul", "TR"),
        "NYC" => ("New York", "US"),
        "LAX" => ("Los Angeles", "US"),
        "TYO" => ("Tokyo", "JP"),
        "BKK" => ("Bangkok", "TH"),
        "SIN" => ("Singapore", "SG"),
        "SYD" => ("Sydney", "AU"),
        _ => return None,
    };
    Some(entry)
}
