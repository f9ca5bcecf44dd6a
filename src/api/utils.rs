//! API utility functions
//!
//! Pure, stateless helpers for webhook request processing, kept apart from
//! services.rs so they can be unit tested.

/// Whether a Content-Type header value denotes a JSON body
///
/// Accepts `application/json` with or without parameters. Anything else
/// (including a missing or malformed header) is not JSON, and the body is
/// then treated as an empty object.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .is_some_and(|media_type| {
            media_type.type_() == mime::APPLICATION && media_type.subtype() == mime::JSON
        })
}

/// Returns the value of a query parameter given exactly once
///
/// A repeated parameter is a list, not a string, and counts as missing.
pub fn single_query_value<'a>(query: &'a [(String, String)], name: &str) -> Option<&'a str> {
    let mut values = query.iter().filter(|(key, _)| key == name);
    match (values.next(), values.next()) {
        (Some((_, value)), None) => Some(value.as_str()),
        _ => None,
    }
}
