use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    /// Course length assumed when extracted course info carries no duration.
    pub default_total_course_hours: f64,
    pub max_topics: usize,
    pub max_days: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            default_total_course_hours: env::var("DEFAULT_TOTAL_COURSE_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(16.0),
            max_topics: env::var("MAX_TOPICS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(100),
            max_days: env::var("MAX_DAYS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(30),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            default_total_course_hours: 16.0,
            max_topics: 100,
            max_days: 30,
        }
    }
}
