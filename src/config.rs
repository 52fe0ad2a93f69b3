use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Dashboard login name checked by `POST /api/login`.
    pub dash_user: String,
    /// Dashboard password checked by `POST /api/login`.
    pub dash_pass: String,
    pub server_host: String,
    pub server_port: u16,
    /// Optional cap on rows returned by the read endpoints. Unset means
    /// unbounded, which is what deployed dashboards currently expect.
    pub reading_limit: Option<i64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            dash_user: required("DASH_USER")?,
            dash_pass: required("DASH_PASS")?,
            server_host: optional("SERVER_HOST", "0.0.0.0"),
            server_port: optional("SERVER_PORT", "8080")
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            reading_limit: parse_reading_limit(std::env::var("READING_LIMIT").ok().as_deref())?,
        })
    }
}

/// Parse the optional `READING_LIMIT` row cap. Empty or unset leaves the
/// result sets unbounded.
fn parse_reading_limit(raw: Option<&str>) -> Result<Option<i64>> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => {
            let n: i64 = s
                .parse()
                .context("READING_LIMIT must be a positive integer")?;
            anyhow::ensure!(n > 0, "READING_LIMIT must be a positive integer");
            Ok(Some(n))
        }
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required env var: {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
