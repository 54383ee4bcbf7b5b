//! isp-notify
//!
//! Notification dispatch where every channel has its own narrow sending
//! capability. See [`notifications`] for the core types.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod notifications;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
