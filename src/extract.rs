//! Field extraction from raw listing text
//!
//! Pure heuristics over loosely structured seller text. Every function
//! degrades to the `N/A` sentinel instead of failing.

use std::sync::OnceLock;

use regex::Regex;

/// Sentinel for a field that could not be determined
pub const NOT_AVAILABLE: &str = "N/A";

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap())
}

fn km_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d{1,3}(?:\.\d{3})*|\d+)\s*(?:mil\s*)?km").unwrap())
}

fn span_res() -> &'static [Regex; 4] {
    static RES: OnceLock<[Regex; 4]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"\([^)]*\)").unwrap(),
            Regex::new(r"\[[^\]]*\]").unwrap(),
            Regex::new(r#""[^"]*""#).unwrap(),
            Regex::new(r"'[^']*'").unwrap(),
        ]
    })
}

/// First 4-digit run starting with 19 or 20, or the sentinel.
pub fn extract_year(text: &str) -> String {
    match year_re().find(text) {
        Some(m) => m.as_str().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// First number followed by the "km" unit, grouping separators stripped,
/// or the sentinel. A "mil" qualifier is consumed but the number is kept
/// as written.
pub fn extract_kilometers(text: &str) -> String {
    match km_re().captures(text).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().replace('.', "").replace(',', ""),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Run the year and kilometer scans over the same text.
///
/// The two scans are independent and first match wins in each; multiple
/// candidates are not disambiguated. Deliberate simplicity trade-off.
pub fn extract_year_and_km(text: &str) -> (String, String) {
    (extract_year(text), extract_kilometers(text))
}

/// Clean a model name.
///
/// Removes parenthesized/bracketed/quoted asides, then every literal
/// occurrence of each noise phrase in list order, then collapses
/// whitespace. Idempotent.
pub fn clean_model(raw: &str, noise_phrases: &[String]) -> String {
    let mut model = raw.to_string();

    for re in span_res() {
        model = re.replace_all(&model, "").into_owned();
    }

    for phrase in noise_phrases {
        model = model.replace(phrase.as_str(), "");
    }

    model.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep only the first line of the price text.
///
/// The site renders a secondary "Negociável" annotation on a following
/// line that must be discarded. The sentinel passes through unchanged.
pub fn clean_price(raw: &str) -> String {
    if raw == NOT_AVAILABLE {
        return raw.to_string();
    }
    raw.split('\n').next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NOISE_PHRASES;

    fn noise() -> Vec<String> {
        NOISE_PHRASES.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_extract_year_found() {
        assert_eq!(extract_year("Audi A4 2015 impecável"), "2015");
        assert_eq!(extract_year("de 1999, como novo"), "1999");
    }

    #[test]
    fn test_extract_year_first_match_wins() {
        assert_eq!(extract_year("2015 ou 2017"), "2015");
    }

    #[test]
    fn test_extract_year_none() {
        assert_eq!(extract_year("Audi A4 Avant"), NOT_AVAILABLE);
        // 4-digit runs outside 19xx/20xx do not count
        assert_eq!(extract_year("motor 1800 cc"), NOT_AVAILABLE);
    }

    #[test]
    fn test_extract_year_requires_word_boundary() {
        assert_eq!(extract_year("ref 120150"), NOT_AVAILABLE);
    }

    #[test]
    fn test_extract_kilometers_grouped() {
        assert_eq!(extract_kilometers("2015 - 250.000 km"), "250000");
    }

    #[test]
    fn test_extract_kilometers_plain() {
        assert_eq!(extract_kilometers("123456 km"), "123456");
    }

    #[test]
    fn test_extract_kilometers_mil_qualifier() {
        // the qualifier is consumed, the number is kept as written
        assert_eq!(extract_kilometers("45 mil km"), "45");
    }

    #[test]
    fn test_extract_kilometers_case_insensitive() {
        assert_eq!(extract_kilometers("90.000 KM"), "90000");
        assert_eq!(extract_kilometers("90.000 Km"), "90000");
    }

    #[test]
    fn test_extract_kilometers_none() {
        assert_eq!(extract_kilometers("2015 diesel"), NOT_AVAILABLE);
    }

    #[test]
    fn test_scans_are_independent() {
        let (year, km) = extract_year_and_km("250.000 km");
        assert_eq!(year, NOT_AVAILABLE);
        assert_eq!(km, "250000");

        let (year, km) = extract_year_and_km("2015 diesel");
        assert_eq!(year, "2015");
        assert_eq!(km, NOT_AVAILABLE);

        let (year, km) = extract_year_and_km("2015 - 250.000 km");
        assert_eq!(year, "2015");
        assert_eq!(km, "250000");
    }

    #[test]
    fn test_clean_model_removes_spans() {
        assert_eq!(clean_model("A4 (nacional) [2 chaves]", &noise()), "A4");
        assert_eq!(clean_model("A3 \"como novo\" 'extras'", &noise()), "A3");
    }

    #[test]
    fn test_clean_model_removes_noise_phrases() {
        assert_eq!(clean_model("A4 Avant aceito trocas", &noise()), "A4 Avant");
        assert_eq!(clean_model("Q5 Unico Dono FULL EXTRAS", &noise()), "Q5");
    }

    #[test]
    fn test_clean_model_is_case_sensitive() {
        // "vendo" in lowercase is not in the list
        assert_eq!(clean_model("A6 vendo", &noise()), "A6 vendo");
        assert_eq!(clean_model("A6 Vendo", &noise()), "A6");
    }

    #[test]
    fn test_clean_model_collapses_whitespace() {
        assert_eq!(clean_model("  A4   Avant   TDI  ", &noise()), "A4 Avant TDI");
    }

    #[test]
    fn test_clean_model_idempotent() {
        let inputs = [
            "A4 Avant (nacional) aceito trocas",
            "Q7 \"full\" Unico Dono",
            "  A1   Sportback  ",
        ];
        for input in inputs {
            let once = clean_model(input, &noise());
            let twice = clean_model(&once, &noise());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_clean_price_first_line() {
        assert_eq!(clean_price("1 234\nNegociável"), "1 234");
    }

    #[test]
    fn test_clean_price_trims() {
        assert_eq!(clean_price("  15.500 €  "), "15.500 €");
    }

    #[test]
    fn test_clean_price_sentinel_passthrough() {
        assert_eq!(clean_price(NOT_AVAILABLE), NOT_AVAILABLE);
    }
}
