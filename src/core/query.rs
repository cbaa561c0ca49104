use crate::error::ProxyError;
use crate::models::SearchQuery;

/// Parse a `"<track> - <artist>"` query.
///
/// The string is split on every `-` and each part trimmed: part 0 is the
/// track, part 1 the artist, anything after is dropped. A hyphen inside a
/// track name is therefore treated as the separator ("Up-Down - Artist"
/// gives track "Up", artist "Down").
pub fn parse_query(raw: Option<&str>) -> Result<SearchQuery, ProxyError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ProxyError::missing_query()),
    };

    let mut parts = raw.split('-').map(str::trim);
    let track_name = parts.next().unwrap_or_default();
    let artist_name = parts.next().unwrap_or_default();

    if track_name.is_empty() {
        return Err(ProxyError::missing_query());
    }

    Ok(SearchQuery {
        raw: raw.to_string(),
        track_name: track_name.to_string(),
        artist_name: artist_name.to_string(),
    })
}

/// Parse every `q` value of a request. The parameter must be given at most once.
pub fn parse_query_param(values: &[String]) -> Result<SearchQuery, ProxyError> {
    match values {
        [] => parse_query(None),
        [raw] => parse_query(Some(raw.as_str())),
        _ => Err(ProxyError::BadRequest(
            r#"Invalid query: parameter "q" given more than once"#.to_string(),
        )),
    }
}
