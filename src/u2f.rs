use crate::logging::log_u2f_result;
use log::debug;
use tokio::sync::oneshot;
use tokio::time::{sleep, Duration};

pub type ApiVersionCallback = Box<dyn FnOnce(u32) + Send + 'static>;

/// The U2F API as exposed by the browser or the Google polyfill.
pub trait U2fProbe {
    /// A native `u2f` object without `getApiVersion` (Firefox with the extension).
    fn has_legacy_hook(&self) -> bool;

    /// Asks for the API version. Implementations call `callback` on success
    /// and may simply never call it on failure.
    fn get_api_version(&self, callback: ApiVersionCallback);
}

/// Environment without any U2F support; the version request goes unanswered.
#[derive(Debug, Clone, Default)]
pub struct StaticU2fProbe {
    pub legacy_hook: bool,
    pub api_version: Option<u32>,
}

impl U2fProbe for StaticU2fProbe {
    fn has_legacy_hook(&self) -> bool {
        self.legacy_hook
    }

    fn get_api_version(&self, callback: ApiVersionCallback) {
        if let Some(version) = self.api_version {
            callback(version);
        }
    }
}

/// Resolves `true` as soon as the probe answers and `false` once `timeout`
/// elapses without an answer. The polyfill gives no failure signal, hence
/// the timer.
pub async fn is_u2f_supported_async<P: U2fProbe + ?Sized>(probe: &P, timeout: Duration) -> bool {
    if probe.has_legacy_hook() {
        log_u2f_result(true, "native u2f object");
        return true;
    }

    let (tx, rx) = oneshot::channel::<u32>();
    probe.get_api_version(Box::new(move |version| {
        let _ = tx.send(version);
    }));

    let timer = sleep(timeout);
    tokio::pin!(timer);

    let supported = tokio::select! {
        Ok(version) = rx => {
            debug!("u2f api version {}", version);
            true
        }
        _ = &mut timer => false,
    };

    log_u2f_result(supported, if supported { "polyfill" } else { "polyfill timed out" });
    supported
}
