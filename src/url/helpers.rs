use urlencoding::encode;

/// Join `base` and `path` with exactly one `/`.
///
/// Every trailing `/` is removed from `base` and every leading `/` from
/// `path`. Nothing is validated, so `build_url("", "")` is `"/"`.
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Append percent-encoded `key=value` pairs to `url`.
///
/// Uses `?` when `url` has no query yet and `&` otherwise.
pub fn append_query<K, V>(url: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return url.to_string();
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k.as_ref()), encode(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if url.ends_with('?') || url.ends_with('&') {
        ""
    } else if url.contains('?') {
        "&"
    } else {
        "?"
    };

    format!("{}{}{}", url, separator, query)
}
