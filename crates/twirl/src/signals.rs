// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Signal handlers that finalize a running spinner.
//!
//! Handlers run on a dedicated thread with a handle to the spinner. After a
//! handler returns, the signal's default disposition is emulated, so SIGINT
//! still terminates the process once the spinner has been finalized.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::engine::SpinnerEngine;
use crate::error::Result;
use crate::spinner::Spinner;

#[cfg(unix)]
pub use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};

/// Called with the spinner and the received signal number.
pub type SignalHandler = Arc<dyn Fn(&Spinner, i32) + Send + Sync>;

/// Signal number to handler.
pub type SigMap = HashMap<i32, SignalHandler>;

/// Ready-made handlers.
pub mod handlers {
    use super::SignalHandler;
    use crate::spinner::Spinner;
    use std::sync::Arc;
    use tracing::warn;

    /// Finalize with the default failure glyph.
    pub fn fail() -> SignalHandler {
        Arc::new(|spinner: &Spinner, _signal: i32| {
            if let Err(e) = spinner.fail() {
                warn!("failed to finalize spinner on signal: {e}");
            }
        })
    }

    /// Finalize with a red "✘".
    pub fn fancy() -> SignalHandler {
        Arc::new(|spinner: &Spinner, _signal: i32| {
            let result = spinner
                .set_color(Some("red"))
                .and_then(|()| spinner.fail_with("✘"));
            if let Err(e) = result {
                warn!("failed to finalize spinner on signal: {e}");
            }
        })
    }
}

/// Keeps signal registrations alive; dropping it stops the handler thread
/// and hands the signals back to their default disposition.
#[cfg(unix)]
pub struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    claimed: Vec<i32>,
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        fallback::release(&self.claimed);
    }
}

#[cfg(not(unix))]
pub struct SignalGuard;

/// Process-wide default dispositions for signals a spinner has claimed.
///
/// signal-hook never uninstalls its low-level handler, so each signal gets one
/// conditional-default registration that emulates the default action while
/// no running spinner claims it.
#[cfg(unix)]
mod fallback {
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, LazyLock};

    use crate::error::{Result, SpinnerError};

    struct Claim {
        use_default: Arc<AtomicBool>,
        holders: usize,
    }

    static CLAIMS: LazyLock<Mutex<HashMap<i32, Claim>>> =
        LazyLock::new(|| Mutex::new(HashMap::new()));

    /// Route `signals` to the spinner's handler thread instead of the default
    /// action. On error nothing stays claimed.
    pub(super) fn claim(signals: &[i32]) -> Result<()> {
        let mut claims = CLAIMS.lock();
        for (i, &signal) in signals.iter().enumerate() {
            if !claims.contains_key(&signal) {
                let use_default = Arc::new(AtomicBool::new(true));
                if let Err(e) = signal_hook::flag::register_conditional_default(
                    signal,
                    Arc::clone(&use_default),
                ) {
                    release_locked(&mut claims, &signals[..i]);
                    return Err(SpinnerError::Signal(e));
                }
                claims.insert(
                    signal,
                    Claim {
                        use_default,
                        holders: 0,
                    },
                );
            }
            if let Some(claim) = claims.get_mut(&signal) {
                claim.holders += 1;
                claim.use_default.store(false, Ordering::SeqCst);
            }
        }
        Ok(())
    }

    pub(super) fn release(signals: &[i32]) {
        release_locked(&mut CLAIMS.lock(), signals);
    }

    fn release_locked(claims: &mut HashMap<i32, Claim>, signals: &[i32]) {
        for signal in signals {
            if let Some(claim) = claims.get_mut(signal) {
                claim.holders = claim.holders.saturating_sub(1);
                if claim.holders == 0 {
                    claim.use_default.store(true, Ordering::SeqCst);
                }
            }
        }
    }

    /// Whether `signal` currently falls through to its default action.
    #[cfg(test)]
    pub(super) fn uses_default(signal: i32) -> bool {
        CLAIMS
            .lock()
            .get(&signal)
            .is_none_or(|claim| claim.use_default.load(Ordering::SeqCst))
    }
}

/// Register every signal in `sigmap` for the given engine.
#[cfg(unix)]
pub(crate) fn install(sigmap: &SigMap, engine: Weak<SpinnerEngine>) -> Result<SignalGuard> {
    use crate::error::SpinnerError;
    use signal_hook::iterator::Signals;
    use signal_hook::low_level::emulate_default_handler;
    use tracing::{debug, warn};

    let claimed: Vec<i32> = sigmap.keys().copied().collect();
    fallback::claim(&claimed)?;

    let mut signals = match Signals::new(&claimed) {
        Ok(signals) => signals,
        Err(e) => {
            fallback::release(&claimed);
            return Err(SpinnerError::Signal(e));
        }
    };
    // The guard owns the claim from here on.
    let guard = SignalGuard {
        handle: signals.handle(),
        claimed,
    };
    let handlers = sigmap.clone();
    debug!(signals = ?guard.claimed, "registered spinner signal handlers");

    std::thread::Builder::new()
        .name("twirl-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                let Some(engine) = engine.upgrade() else {
                    break;
                };
                if let Some(handler) = handlers.get(&signal) {
                    debug!(signal, "running spinner signal handler");
                    handler(&Spinner::from_engine(engine), signal);
                }
                if let Err(e) = emulate_default_handler(signal) {
                    warn!("failed to run default handler for signal {signal}: {e}");
                }
            }
        })?;

    Ok(guard)
}

#[cfg(not(unix))]
pub(crate) fn install(_sigmap: &SigMap, _engine: Weak<SpinnerEngine>) -> Result<SignalGuard> {
    tracing::warn!("signal handlers are not supported on this platform");
    Ok(SignalGuard)
}

#[cfg(all(test, unix))]
#[path = "signals_tests.rs"]
mod tests;
