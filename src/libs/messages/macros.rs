//! Output macros for user-facing messages.
//!
//! Every macro takes a [`Message`](super::Message) (or anything `Display`) and
//! routes it either to `tracing` or to the console:
//!
//! ```text
//! msg_info!(..) ──▶ TASKEDIT_DEBUG or RUST_LOG set? ──▶ tracing::info!
//!                                                  └──▶ println!
//! ```
//!
//! ## Macros
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**: ✅ prefix
//! - **`msg_info!`**: ℹ️ prefix
//! - **`msg_warning!`**: ⚠️ prefix
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an `anyhow::Error`
//!
//! Passing `true` as a second argument surrounds the message with blank lines.
//!
//! ```rust
//! use taskedit::{msg_info, msg_success};
//! use taskedit::libs::messages::Message;
//!
//! msg_success!(Message::NodeAdded(3));
//! msg_info!(Message::NoNodesFound, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether output should go through `tracing` instead of the console.
///
/// Debug mode is on when `TASKEDIT_DEBUG` or `RUST_LOG` is set. The result
/// is computed once and cached for the life of the process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Application-specific flag
        std::env::var("TASKEDIT_DEBUG").is_ok() ||
        // Standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
