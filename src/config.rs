use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub mongo_max_pool_size: u32,
    pub mongo_min_pool_size: u32,
    /// Applies to both connecting and server selection.
    pub mongo_timeout_secs: u64,
    pub quizzes_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub frontend_origin: String,
    /// When unset, every generation request takes the deterministic path.
    pub generation_api_key: Option<SecretString>,
    pub generation_api_base: String,
    pub quiz_model: String,
    pub study_summary_model: String,
    pub fetch_connect_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "wiki-quiz-local".to_string()),
            mongo_max_pool_size: env::var("MONGO_MAX_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            mongo_min_pool_size: env::var("MONGO_MIN_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            mongo_timeout_secs: env::var("MONGO_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            frontend_origin: env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            generation_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            generation_api_base: env::var("GENERATION_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            quiz_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            study_summary_model: env::var("STUDY_SUMMARY_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            fetch_connect_timeout_secs: env::var("FETCH_CONNECT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Whether the external generation service may be attempted at all.
    pub fn has_generation_credential(&self) -> bool {
        self.generation_api_key.is_some()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "wiki-quiz-test".to_string(),
            mongo_max_pool_size: 4,
            mongo_min_pool_size: 1,
            mongo_timeout_secs: 1,
            quizzes_collection: "quizzes".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            frontend_origin: "http://localhost:5173".to_string(),
            generation_api_key: None,
            generation_api_base: "http://localhost:9999/v1".to_string(),
            quiz_model: "test-quiz-model".to_string(),
            study_summary_model: "test-summary-model".to_string(),
            fetch_connect_timeout_secs: 1,
            fetch_timeout_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(config.fetch_timeout_secs > 0);
        assert!(config.mongo_min_pool_size <= config.mongo_max_pool_size);
        assert!(config.mongo_timeout_secs > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "wiki-quiz-test");
        assert_eq!(config.quizzes_collection, "quizzes");
        assert!(!config.has_generation_credential());
    }

    #[test]
    fn credential_gate_follows_key_presence() {
        let mut config = Config::test_config();
        config.generation_api_key = Some(SecretString::from("key".to_string()));

        assert!(config.has_generation_credential());
    }
}
