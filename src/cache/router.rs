use crate::cache::entry::Request;
use crate::cache::manager::CacheConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// Cache-first: staleness tolerated for availability.
    Static,
    /// Network-first: freshness preferred, cache as fallback.
    Dynamic,
}

/// The single routing policy decision point. Everything is Static unless
/// the URL matches a configured dynamic-resource pattern.
pub fn classify(config: &CacheConfig, request: &Request) -> RequestClass {
    let matches_dynamic = config
        .dynamic_patterns
        .iter()
        .any(|pattern| request.url.contains(pattern.as_str()));
    if matches_dynamic {
        RequestClass::Dynamic
    } else {
        RequestClass::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classification_is_static() {
        let config = CacheConfig::new("v1", Vec::new());
        assert_eq!(
            classify(&config, &Request::get("/index.html")),
            RequestClass::Static
        );
        assert_eq!(
            classify(&config, &Request::get("https://app.example/api/generate")),
            RequestClass::Dynamic
        );
    }
}
