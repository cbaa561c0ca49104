/// A parsed `"<track> - <artist>"` search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The query exactly as the caller sent it
    pub raw: String,
    pub track_name: String,
    /// Empty when the query carried no artist part
    pub artist_name: String,
}

impl SearchQuery {
    pub fn has_artist(&self) -> bool {
        !self.artist_name.is_empty()
    }

    /// Query parameters for the LRCLIB search endpoint.
    ///
    /// `artist_name` is left out entirely when there is no artist.
    pub fn upstream_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("track_name", self.track_name.as_str())];
        if self.has_artist() {
            params.push(("artist_name", self.artist_name.as_str()));
        }
        params
    }
}
