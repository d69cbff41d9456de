use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. Without it the service keeps its data in memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".into())
                .parse()
                .expect("PORT must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr() {
        let config = Config {
            database_url: None,
            host: "127.0.0.1".into(),
            port: 10000,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:10000");
    }
}
