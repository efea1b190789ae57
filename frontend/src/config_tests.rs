#[cfg(test)]
mod config_tests {
    use crate::config::{EndpointConfig, Environment, LOCAL_API_URL, PRODUCTION_API_URL};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const LOCAL: &str = "http://127.0.0.1:8001";
    const PRODUCTION: &str = "https://ti-7c8k.onrender.com/";

    #[rstest]
    #[case("localhost")]
    #[case("127.0.0.1")]
    fn test_loopback_hosts_use_local_backend(#[case] hostname: &str) {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, hostname);

        assert!(!config.is_production());
        assert_eq!(config.environment(), Environment::Development);
        assert_eq!(config.resolve_base_url(), LOCAL);
    }

    #[rstest]
    #[case("example.com")]
    #[case("ti-7c8k.onrender.com")]
    #[case("192.168.1.20")]
    #[case("LOCALHOST")]
    #[case("")]
    fn test_other_hosts_use_production_backend(#[case] hostname: &str) {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, hostname);

        assert!(config.is_production());
        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.resolve_base_url(), PRODUCTION);
    }

    #[test]
    fn test_local_endpoint() {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, "localhost");
        assert_eq!(
            config.resolve_endpoint("/health"),
            "http://127.0.0.1:8001/health"
        );
    }

    #[test]
    fn test_production_endpoint_keeps_double_slash() {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, "example.com");
        assert_eq!(
            config.resolve_endpoint("/health"),
            "https://ti-7c8k.onrender.com//health"
        );
    }

    #[test]
    fn test_endpoint_without_leading_slash_is_not_fixed() {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, "127.0.0.1");
        assert_eq!(
            config.resolve_endpoint("health"),
            "http://127.0.0.1:8001health"
        );
    }

    #[test]
    fn test_base_url_is_stable() {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, "example.com");
        let first = config.resolve_base_url().to_string();
        let second = config.resolve_base_url().to_string();
        assert_eq!(first, second);

        let cloned = config.clone();
        assert_eq!(cloned.resolve_base_url(), first);
    }

    #[test]
    fn test_for_hostname_uses_builtin_urls() {
        let config = EndpointConfig::for_hostname("localhost");
        assert_eq!(config.local_base_url(), LOCAL_API_URL);
        assert_eq!(config.production_base_url(), PRODUCTION_API_URL);
        assert_eq!(config.resolve_base_url(), LOCAL_API_URL);
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Development.to_string(), "Development");
        assert_eq!(Environment::Production.to_string(), "Production");
    }

    #[rstest]
    #[case("dev", Environment::Development)]
    #[case("Development", Environment::Development)]
    #[case("prod", Environment::Production)]
    #[case("PRODUCTION", Environment::Production)]
    fn test_environment_from_str(#[case] input: &str, #[case] expected: Environment) {
        assert_eq!(input.parse::<Environment>().unwrap(), expected);
    }

    #[test]
    fn test_environment_from_str_rejects_unknown() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert_eq!(err, "Unknown environment: staging");
    }

    #[test]
    fn test_config_serializes_environment() {
        let config = EndpointConfig::new(LOCAL, PRODUCTION, "localhost");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["environment"], "Development");
        assert_eq!(json["local_base_url"], LOCAL);
        assert_eq!(json["production_base_url"], PRODUCTION);
    }
}
