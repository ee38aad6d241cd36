//! Internal macros.

/// Emit a `debug` level event when the `tracing` feature is enabled.
///
/// Without the feature the invocation expands to nothing, so the hot paths
/// and `no_std` builds carry no logging code. Field syntax is forwarded to
/// [`tracing::debug!`] unchanged.
macro_rules! debug_event {
  ($($arg:tt)+) => {
    #[cfg(feature = "tracing")]
    {
      ::tracing::debug!(target: "anycrc", $($arg)+);
    }
  };
}
