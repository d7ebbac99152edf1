use std::sync::Mutex;
use std::thread::{sleep, spawn};
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use theatermap::{AuthorizationState, Coordinate, LocationEvent, LocationService};

use crate::config::Scenario;

/// A scripted stand-in for the platform location stack.
///
/// Grants arrive the way the real delegate callback does: the status flips
/// first, then an `AuthorizationChanged` event lands on the stream and the
/// screen probes again.
pub struct SimulatedLocationService {
    scenario: Scenario,
    status: Mutex<AuthorizationState>,
    route: Vec<Coordinate>,
    channel: (Sender<LocationEvent>, Receiver<LocationEvent>),
}

impl SimulatedLocationService {
    pub fn new(scenario: Scenario, route: Vec<Coordinate>) -> Self {
        let status = match scenario {
            Scenario::Authorized => AuthorizationState::AuthorizedAlways,
            Scenario::WhenInUse | Scenario::SignalLost => AuthorizationState::AuthorizedWhenInUse,
            Scenario::NotDetermined | Scenario::Disabled => AuthorizationState::NotDetermined,
            Scenario::Denied => AuthorizationState::Denied,
            Scenario::Restricted => AuthorizationState::Restricted,
        };
        Self {
            scenario,
            status: Mutex::new(status),
            route,
            channel: unbounded(),
        }
    }

    /// Start the location feed, as the platform would once the screen is on
    /// display.
    pub fn start(&self) {
        let tx = self.channel.0.clone();
        match self.scenario {
            Scenario::SignalLost => {
                spawn(move || {
                    sleep(Duration::from_millis(300));
                    if tx
                        .send(LocationEvent::Failed("signal lost".to_string()))
                        .is_err()
                    {
                        log::debug!("Location stream closed before the failure fired.");
                    }
                });
            }
            Scenario::Authorized | Scenario::WhenInUse => {
                let route = self.route.clone();
                spawn(move || {
                    for coordinate in route {
                        sleep(Duration::from_millis(250));
                        if tx.send(LocationEvent::Updated(coordinate)).is_err() {
                            log::debug!("Location stream closed; stopping the feed.");
                            return;
                        }
                    }
                });
            }
            _ => {}
        }
    }
}

impl LocationService for SimulatedLocationService {
    fn services_enabled(&self) -> bool {
        // The OS-level switch is the slow check on real hardware.
        sleep(Duration::from_millis(50));
        self.scenario != Scenario::Disabled
    }

    fn authorization_status(&self) -> AuthorizationState {
        *self.status.lock().unwrap()
    }

    fn request_authorization(&self) {
        if self.scenario != Scenario::NotDetermined {
            return;
        }
        // The simulated user taps "allow while using".
        log::info!("Simulated user granted while-in-use access.");
        *self.status.lock().unwrap() = AuthorizationState::AuthorizedWhenInUse;
        if self
            .channel
            .0
            .send(LocationEvent::AuthorizationChanged)
            .is_err()
        {
            log::debug!("Location stream closed before the grant was delivered.");
        }
    }

    fn events(&self) -> Receiver<LocationEvent> {
        self.channel.1.clone()
    }
}
