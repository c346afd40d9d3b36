//! Aggregator roles and their option keys.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A logical header slot of the [`Secure`](crate::Secure) aggregator.
///
/// Each role is addressed by a fixed option key (`hsts`, `csp`, ...), which
/// is how configuration files and [`Secure::from_options`](crate::Secure::from_options)
/// refer to it.
///
/// # Examples
///
/// ```
/// use secure_headers::{Error, Role};
///
/// assert_eq!("hsts".parse::<Role>().unwrap(), Role::Hsts);
/// assert!(matches!("x-powered-by".parse::<Role>(), Err(Error::UnknownOption(_))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `server`: `Server`
    Server,
    /// `hsts`: `Strict-Transport-Security`
    Hsts,
    /// `xfo`: `X-Frame-Options`
    Xfo,
    /// `content`: `X-Content-Type-Options`
    Content,
    /// `csp`: `Content-Security-Policy`
    Csp,
    /// `referrer`: `Referrer-Policy`
    Referrer,
    /// `cache`: `Cache-Control`
    Cache,
    /// `permissions`: `Permissions-Policy`
    Permissions,
    /// `coop`: `Cross-Origin-Opener-Policy`
    Coop,
    /// `coep`: `Cross-Origin-Embedder-Policy`
    Coep,
    /// `custom`: the list of custom headers
    Custom,
}

impl Role {
    /// Every role, in option-table order.
    pub const ALL: [Role; 11] = [
        Role::Server,
        Role::Hsts,
        Role::Xfo,
        Role::Content,
        Role::Csp,
        Role::Referrer,
        Role::Cache,
        Role::Permissions,
        Role::Coop,
        Role::Coep,
        Role::Custom,
    ];

    /// Returns the option key naming this role.
    pub fn key(self) -> &'static str {
        match self {
            Role::Server => "server",
            Role::Hsts => "hsts",
            Role::Xfo => "xfo",
            Role::Content => "content",
            Role::Csp => "csp",
            Role::Referrer => "referrer",
            Role::Cache => "cache",
            Role::Permissions => "permissions",
            Role::Coop => "coop",
            Role::Coep => "coep",
            Role::Custom => "custom",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.key() == key)
            .ok_or_else(|| Error::UnknownOption(key.to_string()))
    }
}
