//! Query parameters for basin term requests.

use serde::Deserialize;

/// Query parameters accepted by the term-resolution endpoints.
///
/// `latitude`/`longitude` arrive as already-typed scalars; range validation
/// happens when the engine constructs a [`crate::Coordinate`]. `model` is an
/// optional explicit model identifier overriding the region default.
#[derive(Debug, Clone, Deserialize)]
pub struct TermQuery {
    pub latitude: f64,
    pub longitude: f64,

    /// Explicit basin model id (e.g. "seattle", "cvms426").
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_deserializes_from_url_params() {
        let q: TermQuery =
            serde_urlencoded_like("latitude=47.6&longitude=-122.3&model=seattle");
        assert_eq!(q.latitude, 47.6);
        assert_eq!(q.longitude, -122.3);
        assert_eq!(q.model.as_deref(), Some("seattle"));
    }

    #[test]
    fn test_query_model_optional() {
        let q: TermQuery = serde_urlencoded_like("latitude=47.6&longitude=-122.3");
        assert!(q.model.is_none());
    }

    // Decode via serde_json to avoid a urlencoded dev-dependency; the field
    // mapping under test is identical.
    fn serde_urlencoded_like(query: &str) -> TermQuery {
        let mut map = serde_json::Map::new();
        for pair in query.split('&') {
            let (k, v) = pair.split_once('=').unwrap();
            let value = v
                .parse::<f64>()
                .map(serde_json::Value::from)
                .unwrap_or_else(|_| serde_json::Value::from(v));
            map.insert(k.to_string(), value);
        }
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }
}
