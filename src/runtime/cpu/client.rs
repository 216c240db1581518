//! CPU client

use crate::runtime::KernelConfig;

/// CPU client for operation dispatch
///
/// The client holds no mutable state; every call allocates its own outputs,
/// so a single client can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    config: KernelConfig,
}

impl CpuClient {
    /// Create a CPU client with [`KernelConfig::DEFAULT`]
    pub fn new() -> Self {
        Self::with_config(KernelConfig::DEFAULT)
    }

    /// Create a CPU client with an explicit configuration
    pub fn with_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// The configuration this client dispatches with
    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn pivot_tolerance(&self) -> f64 {
        self.config.pivot_tolerance
    }
}
