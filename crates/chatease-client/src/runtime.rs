//! Host-runtime capability probes.
//!
//! The client refuses to exist in browser-like environments (the API token
//! is a long-lived secret) and in runtimes without an HTTP capability.
//! Detection is host-specific, so it sits behind a small trait that tests
//! can substitute.

/// Probes the host runtime for the capabilities the client depends on.
pub trait RuntimeProbe {
    /// True when running in a browser-like context where shipping an API
    /// token would expose it to end users.
    fn is_browser_like(&self) -> bool;

    /// True when an HTTP transport capability is available.
    fn has_http_support(&self) -> bool;
}

/// Probe for native (server-side) targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeRuntime;

impl RuntimeProbe for NativeRuntime {
    fn is_browser_like(&self) -> bool {
        // Bare wasm32 is the browser-deployable target.
        cfg!(all(target_arch = "wasm32", target_os = "unknown"))
    }

    fn has_http_support(&self) -> bool {
        // The reqwest transport is compiled into this crate.
        true
    }
}
