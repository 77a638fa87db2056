use rtryon::config::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use rtryon::{TryOnClient, TryOnConfig, TryOnError};
use std::env;

// Environment variables are process-wide, so every env scenario lives in this
// one test to keep them from racing.
#[test]
fn test_from_env() {
    for var in ["API_KEY", "GEMINI_API_KEY", "TRYON_MODEL", "GEMINI_BASE_URL"] {
        env::remove_var(var);
    }

    let err = TryOnConfig::from_env().unwrap_err();
    assert!(matches!(err, TryOnError::MissingCredential(ref name) if name == "API_KEY"));
    assert!(err.is_fatal());

    env::set_var("API_KEY", "   ");
    assert!(matches!(
        TryOnConfig::from_env(),
        Err(TryOnError::MissingCredential(_))
    ));

    env::set_var("GEMINI_API_KEY", "fallback-key");
    let config = TryOnConfig::from_env().unwrap();
    assert_eq!(config.api_key, "fallback-key");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    env::set_var("API_KEY", "primary-key");
    env::set_var("TRYON_MODEL", "gemini-custom-image");
    env::set_var("GEMINI_BASE_URL", "http://127.0.0.1:8089/v1beta/");
    let config = TryOnConfig::from_env().unwrap();
    assert_eq!(config.api_key, "primary-key");
    assert_eq!(config.model, "gemini-custom-image");
    assert_eq!(config.base_url, "http://127.0.0.1:8089/v1beta");

    let client = TryOnClient::from_config(&config).unwrap();
    assert_eq!(client.model(), "gemini-custom-image");

    for var in ["API_KEY", "GEMINI_API_KEY", "TRYON_MODEL", "GEMINI_BASE_URL"] {
        env::remove_var(var);
    }
}
