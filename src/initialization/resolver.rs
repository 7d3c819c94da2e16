//! Hostname resolver initialization.
//!
//! The resolver is only used to turn nameserver hostnames into addresses;
//! record queries go straight to those addresses.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::error_handling::InitializationError;

/// Initializes the resolver used for nameserver hostname lookups.
///
/// Uses the host system configuration (e.g. `/etc/resolv.conf`). If that
/// cannot be loaded it falls back to hickory's default upstream set.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` when the timeout is zero.
pub fn init_resolver(timeout: Duration) -> Result<TokioResolver, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "resolver timeout must be non-zero".to_string(),
        ));
    }

    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 2;
    // Nameserver hostnames are absolute; never append search domains
    opts.ndots = 0;

    match TokioResolver::builder_tokio() {
        Ok(mut builder) => {
            let builder_opts = builder.options_mut();
            builder_opts.timeout = opts.timeout;
            builder_opts.attempts = opts.attempts;
            builder_opts.ndots = opts.ndots;
            Ok(builder.build())
        }
        Err(e) => {
            log::warn!("Failed to load system DNS configuration, falling back to defaults: {e}");
            Ok(TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
            .with_options(opts)
            .build())
        }
    }
}
