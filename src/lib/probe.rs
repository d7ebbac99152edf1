use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::spawn;

use crate::authorization::ProbeOutcome;
use crate::services::LocationService;

/// Runs authorization probes off the main thread and hands their results
/// back on it.
///
/// The OS-level check can be slow, so it must never run on the thread that
/// owns the surfaces. Each dispatch is fire-and-forget: no cancellation, no
/// timeout, no retry.
pub struct AuthorizationProbe {
    channel: (Sender<ProbeOutcome>, Receiver<ProbeOutcome>),
}

impl AuthorizationProbe {
    pub fn new() -> Self {
        Self { channel: channel() }
    }

    /// Resolve the current authorization on a worker thread.
    ///
    /// When the OS-level services switch is off, the per-app status is never
    /// read and the outcome is `ServicesDisabled`.
    pub fn dispatch(&self, service: Arc<dyn LocationService>) {
        let tx = self.channel.0.clone();
        spawn(move || {
            let outcome = if service.services_enabled() {
                ProbeOutcome::Resolved(service.authorization_status())
            } else {
                ProbeOutcome::ServicesDisabled
            };
            log::debug!("Authorization probe finished: {:?}", outcome);
            if tx.send(outcome).is_err() {
                log::debug!("Could not deliver the probe outcome. This most likely happened because the screen was torn down.");
            }
        });
    }

    /// The outcomes that arrived since the last tick. Never blocks.
    pub fn drain(&self) -> Vec<ProbeOutcome> {
        self.channel.1.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorization::AuthorizationState;
    use crate::services::LocationEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StubService {
        enabled: bool,
        status: AuthorizationState,
        status_reads: AtomicUsize,
    }

    impl StubService {
        fn new(enabled: bool, status: AuthorizationState) -> Self {
            Self {
                enabled,
                status,
                status_reads: AtomicUsize::new(0),
            }
        }
    }

    impl LocationService for StubService {
        fn services_enabled(&self) -> bool {
            self.enabled
        }

        fn authorization_status(&self) -> AuthorizationState {
            self.status_reads.fetch_add(1, Ordering::SeqCst);
            self.status
        }

        fn request_authorization(&self) {}

        fn events(&self) -> crossbeam_channel::Receiver<LocationEvent> {
            let (_tx, rx) = crossbeam_channel::unbounded();
            rx
        }
    }

    #[test]
    fn probe_resolves_the_per_app_status() {
        let probe = AuthorizationProbe::new();
        let service = Arc::new(StubService::new(true, AuthorizationState::Denied));
        probe.dispatch(service.clone());

        let outcome = probe
            .channel
            .1
            .recv_timeout(Duration::from_secs(1))
            .expect("probe never reported back");

        assert_eq!(outcome, ProbeOutcome::Resolved(AuthorizationState::Denied));
        assert_eq!(service.status_reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn disabled_services_skip_the_per_app_check() {
        let probe = AuthorizationProbe::new();
        let service = Arc::new(StubService::new(false, AuthorizationState::AuthorizedAlways));
        probe.dispatch(service.clone());

        let outcome = probe
            .channel
            .1
            .recv_timeout(Duration::from_secs(1))
            .expect("probe never reported back");

        assert_eq!(outcome, ProbeOutcome::ServicesDisabled);
        assert_eq!(service.status_reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drain_is_empty_before_any_dispatch() {
        let probe = AuthorizationProbe::new();
        assert!(probe.drain().is_empty());
    }
}
