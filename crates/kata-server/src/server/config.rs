use anyhow::{Context, bail};
use clap::Parser;
use core::time::Duration;
use std::net::SocketAddr;

/// Runtime configuration for the `kata-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first, if present), with defaults suitable for local use.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "kata-server",
    version,
    about = "HTTP endpoints for user lookup, login, news statistics and ticket intake"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:3000" or "127.0.0.1:8080"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:3000"))]
    pub server_addr: String,

    /// Login accepted by `POST /login`.
    ///
    /// Environment variable: `ADMIN_LOGIN`
    #[arg(long, env = "ADMIN_LOGIN", default_value_t = String::from("admin"))]
    pub admin_login: String,

    /// Password accepted by `POST /login`.
    ///
    /// Environment variable: `ADMIN_PASSWORD`
    #[arg(long, env = "ADMIN_PASSWORD", default_value_t = String::from("1234"), hide_default_value = true)]
    pub admin_password: String,

    /// Seconds to wait for in-flight requests after a shutdown signal.
    ///
    /// Environment variable: `SHUTDOWN_TIMEOUT`
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 5)]
    pub shutdown_timeout: u64,
}

/// The fixed login/password pair checked by `POST /login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn matches(&self, login: &str, password: &str) -> bool {
        self.login == login && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            login: String::from("admin"),
            password: String::from("1234"),
        }
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
    pub credentials: Credentials,
    pub shutdown_timeout: Duration,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args
            .server_addr
            .parse()
            .with_context(|| format!("SERVER_ADDR ({}) is not a socket address", args.server_addr))?;

        if args.admin_login.is_empty() {
            bail!("ADMIN_LOGIN must not be empty");
        }

        if args.admin_password.is_empty() {
            bail!("ADMIN_PASSWORD must not be empty");
        }

        Ok(Self {
            server_addr,
            credentials: Credentials {
                login: args.admin_login,
                password: args.admin_password,
            },
            shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
        })
    }
}
