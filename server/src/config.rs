use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use error_stack::{Report, ResultExt};
use vodca::References;

use kernel::prelude::entity::RecentWindow;
use kernel::KernelError;

const SERVER_BIND: &str = "SERVER_BIND";
const RECENT_WINDOW_MONTHS: &str = "RECENT_WINDOW_MONTHS";
const LOG_DIR: &str = "LOG_DIR";

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone, References)]
pub struct AppConfig {
    bind: SocketAddr,
    recent_window: RecentWindow,
    log_dir: PathBuf,
}

impl AppConfig {
    /// Reads the process environment, including a `.env` file if present.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let bind = parse::<SocketAddr>(SERVER_BIND, lookup(SERVER_BIND))?
            .map_or_else(|| parse_default(DEFAULT_BIND), Ok)?;
        let recent_window = match parse::<u32>(RECENT_WINDOW_MONTHS, lookup(RECENT_WINDOW_MONTHS))? {
            Some(months) => RecentWindow::new(months)
                .attach_printable_lazy(|| format!("Invalid {RECENT_WINDOW_MONTHS}"))?,
            None => RecentWindow::default(),
        };
        let log_dir = lookup(LOG_DIR)
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_DIR), PathBuf::from);
        Ok(Self {
            bind,
            recent_window,
            log_dir,
        })
    }
}

fn parse<T>(key: &str, value: Option<String>) -> error_stack::Result<Option<T>, KernelError>
where
    T: FromStr,
    T::Err: error_stack::Context,
{
    value
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .change_context_lazy(|| KernelError::InvalidInput)
                .attach_printable_lazy(|| format!("Invalid {key}: {value}"))
        })
        .transpose()
}

fn parse_default(value: &str) -> error_stack::Result<SocketAddr, KernelError> {
    value.parse::<SocketAddr>().map_err(|error| {
        Report::new(error)
            .change_context(KernelError::Internal)
            .attach_printable(format!("Invalid default bind address {value}"))
    })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use kernel::prelude::entity::RecentWindow;
    use kernel::KernelError;

    use crate::config::AppConfig;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config.bind(),
            &"0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.recent_window(), &RecentWindow::default());
        assert_eq!(config.log_dir(), &PathBuf::from("./logs/"));
    }

    #[test]
    fn values_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SERVER_BIND", "127.0.0.1:3000"),
            ("RECENT_WINDOW_MONTHS", "6"),
            ("LOG_DIR", "/var/log/fleet"),
        ]))
        .unwrap();
        assert_eq!(config.bind().port(), 3000);
        assert_eq!(config.recent_window(), &RecentWindow::new(6u32).unwrap());
        assert_eq!(config.log_dir(), &PathBuf::from("/var/log/fleet"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        for pairs in [
            [("SERVER_BIND", "localhost")],
            [("RECENT_WINDOW_MONTHS", "soon")],
            [("RECENT_WINDOW_MONTHS", "0")],
        ] {
            let error = AppConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert_eq!(error.current_context(), &KernelError::InvalidInput);
        }
    }
}
