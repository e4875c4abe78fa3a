use std::borrow::Cow;
use std::collections::HashMap;

/// Parse a query string into a key/value map.
///
/// One leading `?` is ignored. Each `&`-separated pair is split on its first
/// `=`; pairs without `=` are dropped. Values are kept exactly as written,
/// with no percent-decoding. A repeated key keeps its last value.
pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    split_pairs(query)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Like [`parse_query_string`], but `+` becomes a space and percent escapes
/// are decoded in keys and values.
///
/// Components that do not decode to UTF-8 are kept as written.
pub fn parse_query_string_decoded(query: &str) -> HashMap<String, String> {
    split_pairs(query)
        .map(|(key, value)| (decode_component(key), decode_component(value)))
        .collect()
}

fn split_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(Cow::into_owned);
    match decoded {
        Ok(decoded) => decoded,
        Err(_) => {
            tracing::debug!("keeping undecodable query component {:?}", raw);
            raw.to_string()
        }
    }
}
