/// Server settings. Fixed at build time; nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub title: String,
    pub version: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8004,
            title: "Food App Test Server".to_string(),
            version: "1.0.0".to_string(),
            log_filter: "api_server=debug,domain=debug,infrastructure=debug,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    /// Text served by the status root.
    pub fn status_message(&self) -> String {
        format!("{} is running", self.title)
    }
}
