//! Logging macros with consistent structured fields.
//!
//! Every event carries a `component` field (`token-ledger`, `bridge`,
//! `holder`, `cli`) so JSON output can be filtered per component.

/// Log an event tagged with its component.
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a transfer event with the chain, sender and nonce fields.
#[macro_export]
macro_rules! log_transfer_event {
    ($level:ident, $component:expr, $msg:expr, $chain:expr, $sender:expr, $nonce:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            chain = %$chain,
            sender = %$sender,
            nonce = %$nonce,
            $($($field)*,)?
            $msg
        )
    };
}
