/// Query string of `GET /api/lr/search`
///
/// Every occurrence of `q` and `apikey` is kept. A repeated parameter must
/// reach the pipeline rather than fail extraction ahead of the key check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Vec<String>,
    pub apikey: Vec<String>,
}

impl SearchParams {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            match name.as_str() {
                "q" => params.q.push(value),
                "apikey" => params.apikey.push(value),
                _ => {}
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_collects_known_params() {
        let params = SearchParams::from_pairs(pairs(&[
            ("q", "Imagine"),
            ("apikey", "apikey1"),
            ("page", "2"),
        ]));

        assert_eq!(params.q, vec!["Imagine"]);
        assert_eq!(params.apikey, vec!["apikey1"]);
    }

    #[test]
    fn test_keeps_repeated_params() {
        let params = SearchParams::from_pairs(pairs(&[("q", "a"), ("q", "b")]));

        assert_eq!(params.q, vec!["a", "b"]);
        assert!(params.apikey.is_empty());
    }
}
