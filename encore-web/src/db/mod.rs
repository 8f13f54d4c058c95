//! Database access for encore-web
//!
//! One module per entity; free async functions over a `SqlitePool`. Any
//! function that classifies shows as upcoming takes the request's `now`
//! explicitly, so the reference time is never process-global state.

pub mod artists;
pub mod shows;
pub mod venues;

/// Genres are stored as a JSON array in a TEXT column; order is preserved.
pub(crate) fn encode_genres(genres: &[String]) -> String {
    serde_json::to_string(genres).unwrap_or_else(|_| "[]".to_string())
}

pub(crate) fn decode_genres(text: &str) -> Vec<String> {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genres_roundtrip_in_order() {
        let genres = vec!["Jazz".to_string(), "Funk".to_string(), "R&B".to_string()];
        let encoded = encode_genres(&genres);
        assert_eq!(decode_genres(&encoded), genres);
    }

    #[test]
    fn test_bad_genres_text_decodes_empty() {
        assert_eq!(decode_genres("not json"), Vec::<String>::new());
    }
}
