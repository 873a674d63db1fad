//! Message macros.
//!
//! Every macro sends its message down one of two paths:
//!
//! - **Debug Mode** (`TASKFLOW_DEBUG` or `RUST_LOG` set): a `tracing` event at
//!   the level matching the macro
//! - **Normal Mode**: `println!`, or `eprintln!` for errors
//!
//! | Macro | Prefix | Level |
//! |---|---|---|
//! | `msg_print!` | none | info |
//! | `msg_success!` | ✅ | info |
//! | `msg_info!` | ℹ️ | info |
//! | `msg_warning!` | ⚠️ | warn |
//! | `msg_error!` | ❌ | error, stderr |
//! | `msg_debug!` | 🔍 | debug, silent in normal mode |
//!
//! Passing `true` as a second argument surrounds the text with blank lines,
//! which commands use for section headers.
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` turn a message into an
//! `anyhow::Error` instead of printing it.
//!
//! ```rust
//! use taskflow::{msg_info, msg_success};
//! use taskflow::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::FocusModeStatus(true), true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages go to `tracing` instead of the console.
///
/// Read once per process. The binary installs a subscriber under the same
/// condition, so routed messages are not lost.
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKFLOW_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $console:ident, $prefix:literal, $msg:expr, $spaced:expr) => {{
        let text = format!("{}{}", $prefix, $msg);
        let text = if $spaced { format!("\n{}\n", text) } else { text };
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", text);
        } else {
            $console!("{}", text);
        }
    }};
}

/// Prints a message without a prefix.
///
/// ```rust
/// use taskflow::msg_print;
/// use taskflow::libs::messages::Message;
///
/// msg_print!(Message::FocusModeStatus(false));
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, true)
    };
}

/// Prints an error. Goes to stderr so it stays out of piped table output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️  ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️  ", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️  ", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️  ", $msg, true)
    };
}

/// Emits a debug event. Nothing is printed in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message text, without a prefix.
/// The binary adds the ❌ when it reports the error through [`msg_error!`].
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an error built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
