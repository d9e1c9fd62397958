//! Server configuration from flags and environment.

use std::net::SocketAddr;

use anomaly::{DetectorConfig, DEFAULT_CURRENCY_SYMBOL, DEFAULT_MIN_HISTORY, DEFAULT_MULTIPLIER};
use anyhow::Context;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "anomaly-server", version, about = "Cost anomaly detection REST service")]
pub struct ServerArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5002)]
    pub port: u16,

    /// Standard deviations above the mean before a cost is flagged
    #[arg(long, env = "ANOMALY_MULTIPLIER", default_value_t = DEFAULT_MULTIPLIER)]
    pub multiplier: f64,

    /// Minimum number of historical costs needed for a verdict
    #[arg(long, env = "ANOMALY_MIN_HISTORY", default_value_t = DEFAULT_MIN_HISTORY)]
    pub min_history: usize,

    /// Currency symbol used in alert messages
    #[arg(long, env = "ANOMALY_CURRENCY_SYMBOL", default_value = DEFAULT_CURRENCY_SYMBOL)]
    pub currency_symbol: String,
}

impl ServerArgs {
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::new(self.multiplier, self.min_history)
            .with_currency_symbol(self.currency_symbol.clone())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid HOST:PORT configuration {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServerArgs {
        let argv = std::iter::once("anomaly-server").chain(args.iter().copied());
        ServerArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let args = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--multiplier",
            "3",
            "--min-history",
            "6",
            "--currency-symbol",
            "$",
        ]);

        assert_eq!(
            args.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
        let config = args.detector_config();
        assert_eq!(config.multiplier, 3.0);
        assert_eq!(config.min_history, 6);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let args = parse(&["--host", "not a host", "--port", "80"]);
        assert!(args.socket_addr().is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected_by_parser() {
        let argv = ["anomaly-server", "--port", "99999"];
        assert!(ServerArgs::try_parse_from(argv).is_err());
    }
}
