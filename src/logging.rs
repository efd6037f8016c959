//! Tracing setup: formatted output with a filter the config can replace.

use crate::config::AppConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{
    EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds a subscriber writing to `make_writer` whose filter can be reloaded.
pub fn subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
) -> (impl Subscriber + Send + Sync + 'static, reload::Handle<EnvFilter, Registry>)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Handle for swapping in the config's filter once the config is loaded.
#[derive(Debug)]
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Wraps `handle`; `from_env` marks a filter taken from `RUST_LOG`.
    pub fn new(handle: reload::Handle<EnvFilter, Registry>, from_env: bool) -> Self {
        Self { handle, from_env }
    }

    /// Replaces the filter with the config's `log_filter`.
    ///
    /// A filter taken from `RUST_LOG` is kept.
    pub fn apply_config(&self, config: &AppConfig) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.handle.reload(EnvFilter::new(config.log_filter()))
    }
}

/// Installs the global subscriber on stderr, so logs never interleave with
/// the board on stdout.
///
/// Uses `RUST_LOG` if set, otherwise [`DEFAULT_LOG_FILTER`] until
/// [`LogHandle::apply_config`] runs.
pub fn init() -> LogHandle {
    let env = EnvFilter::try_from_default_env();
    let from_env = env.is_ok();
    let filter = env.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (subscriber, handle) = subscriber(filter, std::io::stderr);
    subscriber.init();
    LogHandle::new(handle, from_env)
}
