pub mod books;
pub mod users;

/// Path ids that fail to parse fall back to zero, miss the lookup and surface
/// as not-found. Parsing never produces its own error response.
pub(crate) fn parse_id(raw: &str) -> i64 {
    raw.parse().unwrap_or(0)
}
