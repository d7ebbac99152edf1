use std::sync::Arc;

use crate::authorization::{
    next_action, AuthorizationAction, AuthorizationState, IgnoreReason, ProbeOutcome,
};
use crate::catalog::TheaterCatalog;
use crate::presenter::MapPresenter;
use crate::probe::AuthorizationProbe;
use crate::services::{
    DialogSurface, LocationEvent, LocationService, MapSurface, SettingsGateway, UiEvent,
};

/// The one screen of the application.
///
/// Owns the presenter and the probe, and turns probe outcomes, location
/// events and user interactions into surface commands. Everything here runs
/// on the thread that calls `tick` and `handle_ui`; the only other thread in
/// the system is the probe worker, whose result crosses back over the probe
/// channel.
pub struct TheaterMapScreen<M, D, G> {
    catalog: TheaterCatalog,
    presenter: MapPresenter,
    probe: AuthorizationProbe,
    service: Arc<dyn LocationService>,
    events: crossbeam_channel::Receiver<LocationEvent>,
    map: M,
    dialogs: D,
    settings: G,
}

impl<M, D, G> TheaterMapScreen<M, D, G>
where
    M: MapSurface,
    D: DialogSurface,
    G: SettingsGateway,
{
    /// Builds the screen and dispatches the initial authorization probe.
    pub fn new(
        catalog: TheaterCatalog,
        service: Arc<dyn LocationService>,
        map: M,
        dialogs: D,
        settings: G,
    ) -> Self {
        let probe = AuthorizationProbe::new();
        probe.dispatch(service.clone());
        let events = service.events();
        Self {
            catalog,
            presenter: MapPresenter::new(),
            probe,
            service,
            events,
            map,
            dialogs,
            settings,
        }
    }

    /// Handles everything that arrived since the last tick: probe outcomes
    /// first, then the location stream.
    pub fn tick(&mut self) {
        for outcome in self.probe.drain() {
            self.apply_probe_outcome(outcome);
        }
        let events: Vec<_> = self.events.try_iter().collect();
        for event in events {
            self.handle_location_event(event);
        }
    }

    fn apply_probe_outcome(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::ServicesDisabled => {
                log::warn!("Location services are disabled at the OS level.");
                self.degrade_to_fallback();
            }
            ProbeOutcome::Resolved(state) => self.apply_state(state),
        }
    }

    fn apply_state(&mut self, state: AuthorizationState) {
        log::debug!("Authorization resolved to {:?}.", state);
        match next_action(state) {
            AuthorizationAction::Request => self.service.request_authorization(),
            AuthorizationAction::Ignore(IgnoreReason::Restricted) => {
                // Kept from the original behavior: the user gets no dialog
                // here, only this line in the log.
                log::warn!("Location access is restricted on this device.");
            }
            AuthorizationAction::Ignore(reason) => {
                log::info!("Nothing to do for {:?} ({:?}).", state, reason);
            }
            AuthorizationAction::Fallback => self.degrade_to_fallback(),
            AuthorizationAction::ShowTheaters => {
                self.presenter.show_all(&self.catalog, &mut self.map)
            }
        }
    }

    /// The one remedy for every failure: the fallback pin, so the map is
    /// never empty, plus the permission dialog.
    fn degrade_to_fallback(&mut self) {
        self.presenter.show_fallback(&mut self.map);
        self.dialogs.present_permission_dialog();
    }

    fn handle_location_event(&mut self, event: LocationEvent) {
        match event {
            LocationEvent::Updated(coordinate) => {
                log::debug!("Device location updated to {}.", coordinate);
                self.presenter.recenter_on(coordinate, &mut self.map);
            }
            LocationEvent::Failed(reason) => {
                log::warn!("Could not resolve a location: {}", reason);
                self.degrade_to_fallback();
            }
            LocationEvent::AuthorizationChanged => {
                log::debug!("Authorization changed; probing again.");
                self.probe.dispatch(self.service.clone());
            }
        }
    }

    /// User interactions handed back by the shell surfaces.
    pub fn handle_ui(&mut self, event: UiEvent) {
        match event {
            UiEvent::LocationButton => {
                if self.service.authorization_status() == AuthorizationState::Denied {
                    self.dialogs.present_permission_dialog();
                } else {
                    self.presenter.show_all(&self.catalog, &mut self.map);
                }
            }
            UiEvent::FilterMenuRequested => {
                let chains = self.catalog.chains();
                self.dialogs.present_filter_menu(&chains);
            }
            UiEvent::FilterSelected(chain) => {
                self.presenter
                    .filter_by_chain(&chain, &self.catalog, &mut self.map)
            }
            UiEvent::ShowAllSelected => self.presenter.show_all(&self.catalog, &mut self.map),
            UiEvent::PermissionDialogConfirmed => self.settings.open_location_settings(),
            UiEvent::PermissionDialogDismissed => log::debug!("Permission dialog dismissed."),
        }
    }

    pub fn pin_count(&self) -> usize {
        self.presenter.pin_count()
    }
}
