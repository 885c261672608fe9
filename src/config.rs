//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug, Clone)]
#[command(name = "fitfusion")]
#[command(about = "In-memory fitness tracking service with a simulated coach and food scanner")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "FITFUSION_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "FITFUSION_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Artificial "thinking" delay before the coach replies
    #[arg(long, env = "FITFUSION_COACH_DELAY_MS", default_value = "1500")]
    pub coach_delay_ms: u64,

    /// Artificial recognition delay for the food scanner
    #[arg(long, env = "FITFUSION_SCAN_DELAY_MS", default_value = "2000")]
    pub scan_delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long, env = "FITFUSION_VERBOSE")]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn coach_delay(&self) -> Duration {
        Duration::from_millis(self.coach_delay_ms)
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            coach_delay_ms: 1500,
            scan_delay_ms: 2000,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let config = Config::try_parse_from([
            "fitfusion",
            "--port",
            "9100",
            "--coach-delay-ms",
            "0",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.address(), "0.0.0.0:9100");
        assert_eq!(config.coach_delay(), Duration::ZERO);
        assert_eq!(config.scan_delay(), Duration::from_millis(2000));
        assert_eq!(config.log_level(), "debug");
    }
}
