#[cfg(test)]
mod model_config_tests {
    use crate::client::GeminiClient;
    use crate::config::{
        get_default_url_for_backend, normalize_api_url, BackendType, ClientFactory, ProviderSettings,
        DEFAULT_GROQ_MODEL, DEFAULT_OPENAI_MODEL, GROQ_API_URL,
    };
    use pretty_assertions::assert_eq;

    fn settings(backend: BackendType, api_url: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            backend,
            api_key: String::new(),
            model: "llama-3.1-70b".to_string(),
            api_url: api_url.map(str::to_string),
            timeout_secs: 5,
            request_logger: None,
        }
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(BackendType::from_str("gemini"), Some(BackendType::Gemini));
        assert_eq!(BackendType::from_str("GOOGLE"), Some(BackendType::Gemini));
        assert_eq!(BackendType::from_str("openai"), Some(BackendType::OpenAI));
        assert_eq!(BackendType::from_str("Groq"), Some(BackendType::Groq));
        assert_eq!(BackendType::from_str("unknown"), None);
    }

    #[test]
    fn test_backend_llama_aliases() {
        let test_cases = vec!["llama", "llamacpp", "llama.cpp", "llama-cpp"];

        for input in test_cases {
            assert_eq!(BackendType::from_str(input), Some(BackendType::Llama), "{}", input);
        }
    }

    #[test]
    fn test_backend_api_key_env() {
        assert_eq!(BackendType::Gemini.api_key_env(), Some("GOOGLE_API_KEY"));
        assert_eq!(BackendType::OpenAI.api_key_env(), Some("OPENAI_API_KEY"));
        assert_eq!(BackendType::Groq.api_key_env(), Some("GROQ_API_KEY"));
        assert_eq!(BackendType::Llama.api_key_env(), None);
    }

    #[test]
    fn test_default_models_match_backend() {
        assert_eq!(BackendType::Gemini.default_model(), "gemini-2.0-flash");
        assert_eq!(BackendType::OpenAI.default_model(), DEFAULT_OPENAI_MODEL);
        assert_eq!(BackendType::Groq.default_model(), DEFAULT_GROQ_MODEL);
        assert!(!BackendType::Groq.default_model().starts_with("gemini"));
    }

    #[test]
    fn test_get_default_urls() {
        assert_eq!(
            get_default_url_for_backend(&BackendType::Gemini).as_deref(),
            Some("https://generativelanguage.googleapis.com")
        );
        assert_eq!(
            get_default_url_for_backend(&BackendType::OpenAI).as_deref(),
            Some("https://api.openai.com/v1/chat/completions")
        );
        assert_eq!(get_default_url_for_backend(&BackendType::Groq).as_deref(), Some(GROQ_API_URL));
        assert_eq!(get_default_url_for_backend(&BackendType::Llama), None);
    }

    #[test]
    fn test_normalize_api_url() {
        assert_eq!(normalize_api_url("http://localhost:8080"), "http://localhost:8080/v1/chat/completions");
        assert_eq!(normalize_api_url("http://localhost:8080/"), "http://localhost:8080/v1/chat/completions");
        assert_eq!(normalize_api_url(GROQ_API_URL), GROQ_API_URL);
    }

    #[test]
    fn test_gemini_endpoint_url() {
        let client = GeminiClient::new(
            "key".to_string(),
            "gemini-2.0-flash".to_string(),
            "https://generativelanguage.googleapis.com/".to_string(),
            30,
            None,
        )
        .unwrap();

        assert_eq!(
            client.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_factory_reports_model_id() {
        let provider = ClientFactory::create(settings(BackendType::Llama, Some("http://localhost:8080"))).unwrap();
        assert_eq!(provider.model_id(), "llama-3.1-70b");
    }

    #[test]
    fn test_factory_groq_without_url() {
        let provider = ClientFactory::create(settings(BackendType::Groq, None)).unwrap();
        assert_eq!(provider.model_id(), "llama-3.1-70b");
    }

    #[test]
    fn test_factory_llama_requires_url() {
        let err = ClientFactory::create(settings(BackendType::Llama, None)).err().unwrap();
        assert!(err.to_string().contains("llama backend requires an API URL"));
    }
}
