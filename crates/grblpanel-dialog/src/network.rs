//! Controller reachability test
//!
//! The address is checked as dotted IPv4 text first; only a well-formed
//! address is handed to the [`Pinger`]. The system implementation runs one
//! `ping` probe and reports the exit status.

use std::net::Ipv4Addr;
use std::process::{Command, Stdio};
use std::time::Duration;

use grblpanel_core::NetworkTestError;
use grblpanel_settings::NetworkTestSettings;

/// Result shown to the user after a test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkTestOutcome {
    Reachable,
    Unreachable,
    InvalidAddress,
}

impl NetworkTestOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Reachable => "Connection OK!",
            Self::Unreachable => "Target not found!",
            Self::InvalidAddress => "IP invalid!",
        }
    }
}

/// Parse four dot-separated decimal octets of one to three digits each.
///
/// Leading zeros are accepted, as an address typed into a masked entry field
/// may carry them. Surrounding whitespace is ignored.
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, NetworkTestError> {
    let invalid = || NetworkTestError::InvalidAddress {
        input: text.to_string(),
    };

    let parts: Vec<&str> = text.trim().split('.').collect();
    if parts.len() != 4 {
        return Err(invalid());
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(&parts) {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse::<u8>().map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Sends one reachability probe
pub trait Pinger {
    /// Whether `address` answered within `timeout`
    fn ping(&self, address: Ipv4Addr, timeout: Duration) -> grblpanel_core::Result<bool>;
}

/// Runs the platform ping program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPinger {
    program: String,
}

impl SystemPinger {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for a single probe with the given timeout
    pub fn args(address: Ipv4Addr, timeout: Duration) -> Vec<String> {
        let seconds = timeout.as_millis().div_ceil(1000).max(1);
        let mut args = if cfg!(windows) {
            vec![
                "-n".to_string(),
                "1".to_string(),
                "-w".to_string(),
                timeout.as_millis().max(1).to_string(),
            ]
        } else if cfg!(target_os = "macos") {
            vec![
                "-c".to_string(),
                "1".to_string(),
                "-t".to_string(),
                seconds.to_string(),
            ]
        } else {
            vec![
                "-c".to_string(),
                "1".to_string(),
                "-W".to_string(),
                seconds.to_string(),
            ]
        };
        args.push(address.to_string());
        args
    }
}

impl From<&NetworkTestSettings> for SystemPinger {
    fn from(settings: &NetworkTestSettings) -> Self {
        Self::new(settings.program.clone())
    }
}

impl Default for SystemPinger {
    fn default() -> Self {
        Self::from(&NetworkTestSettings::default())
    }
}

impl Pinger for SystemPinger {
    fn ping(&self, address: Ipv4Addr, timeout: Duration) -> grblpanel_core::Result<bool> {
        let status = Command::new(&self.program)
            .args(Self::args(address, timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| NetworkTestError::ProbeFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("{} {} exited with {}", self.program, address, status);
        Ok(status.success())
    }
}

/// Validate `address` and probe it once. A probe that cannot run counts as unreachable.
pub fn run_network_test(
    address: &str,
    pinger: &dyn Pinger,
    timeout: Duration,
) -> NetworkTestOutcome {
    let address = match parse_ipv4(address) {
        Ok(address) => address,
        Err(e) => {
            tracing::debug!("{}", e);
            return NetworkTestOutcome::InvalidAddress;
        }
    };

    match pinger.ping(address, timeout) {
        Ok(true) => NetworkTestOutcome::Reachable,
        Ok(false) => NetworkTestOutcome::Unreachable,
        Err(e) => {
            tracing::warn!("Network test of {} failed: {}", address, e);
            NetworkTestOutcome::Unreachable
        }
    }
}
