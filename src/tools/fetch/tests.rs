#[cfg(test)]
mod tests {
    use crate::tools::fetch::headers::default_headers;
    use crate::tools::fetch::utils::validate_status;
    use crate::tools::fetch::*;
    use crate::types::{HydrateConfig, MediaType, Source};
    use reqwest::StatusCode;

    #[test]
    fn primary_url_shape() {
        let cfg = HydrateConfig::default();
        let url = primary_url(&cfg, "india", MediaType::Films).unwrap();
        assert_eq!(url.as_str(), "https://www.netflix.com/tudum/top10/india/films");

        let url = primary_url(&cfg, "india", MediaType::Tv).unwrap();
        assert_eq!(url.as_str(), "https://www.netflix.com/tudum/top10/india/tv");
    }

    #[test]
    fn primary_url_encodes_region() {
        let cfg = HydrateConfig::default();
        let url = primary_url(&cfg, "united states", MediaType::Tv).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.netflix.com/tudum/top10/united%20states/tv"
        );

        let url = primary_url(&cfg, "a/b?c", MediaType::Films).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.netflix.com/tudum/top10/a%2Fb%3Fc/films"
        );
    }

    #[test]
    fn fallback_url_lowercases_and_keeps_trailing_slash() {
        let cfg = HydrateConfig::default();
        let url = fallback_url(&cfg, "United Kingdom").unwrap();
        assert_eq!(
            url.as_str(),
            "https://flixpatrol.com/top10/netflix/united%20kingdom/"
        );
    }

    #[test]
    fn source_url_dispatches() {
        let cfg = HydrateConfig::default();
        let p = source_url(&cfg, Source::Primary, "India", MediaType::Tv).unwrap();
        let f = source_url(&cfg, Source::Fallback, "India", MediaType::Tv).unwrap();
        assert_eq!(p.as_str(), "https://www.netflix.com/tudum/top10/India/tv");
        assert_eq!(f.as_str(), "https://flixpatrol.com/top10/netflix/india/");
    }

    #[test]
    fn custom_base_is_honoured() {
        let cfg = HydrateConfig {
            primary_base: "http://127.0.0.1:8080/".into(),
            ..HydrateConfig::default()
        };
        let url = primary_url(&cfg, "japan", MediaType::Films).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/tudum/top10/japan/films");
    }

    #[test]
    fn unusable_base_is_invalid_url() {
        let cfg = HydrateConfig {
            primary_base: "mailto:charts@example.com".into(),
            ..HydrateConfig::default()
        };
        let err = primary_url(&cfg, "india", MediaType::Films).unwrap_err();
        assert!(matches!(err, crate::error::ChartError::InvalidUrl(_)));
    }

    #[test]
    fn success_status_passes() {
        assert!(validate_status(StatusCode::OK).is_ok());
        assert!(validate_status(StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn non_success_status_fails() {
        let err = validate_status(StatusCode::NOT_FOUND).unwrap_err();
        assert!(err.contains("404"));
        assert!(validate_status(StatusCode::INTERNAL_SERVER_ERROR).is_err());
        assert!(validate_status(StatusCode::FORBIDDEN).is_err());
        assert!(validate_status(StatusCode::TOO_MANY_REQUESTS)
            .unwrap_err()
            .contains("rate limited"));
    }

    #[test]
    fn headers_carry_user_agent() {
        let headers = default_headers("TestAgent/1.0");
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some("TestAgent/1.0")
        );
        assert!(headers.contains_key("accept"));
    }

    #[test]
    fn invalid_user_agent_falls_back() {
        let headers = default_headers("bad\nagent");
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some("Mozilla/5.0")
        );
    }

    #[test]
    fn reqwest_fetcher_builds() {
        let fetcher = ReqwestFetcher::new(&HydrateConfig::default()).unwrap();
        assert_eq!(fetcher.name(), "reqwest");
    }
}
