use crossbeam_channel::Receiver;

use crate::authorization::AuthorizationState;
use crate::geo::{Coordinate, Region};
use crate::presenter::Pin;

/// Callbacks from the platform location stack, delivered as a stream and
/// drained on the main loop tick.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// A fresh device coordinate.
    Updated(Coordinate),
    /// The platform could not resolve a location.
    Failed(String),
    /// The per-app authorization changed. The new value is not part of the
    /// notification; the screen probes again.
    AuthorizationChanged,
}

/// The platform location stack.
pub trait LocationService: Send + Sync {
    /// Whether location services are enabled at the OS level, independent of
    /// the per-app authorization.
    ///
    /// May block. Only the probe worker calls it.
    fn services_enabled(&self) -> bool;

    /// The current per-app authorization.
    fn authorization_status(&self) -> AuthorizationState;

    /// Ask the user for permission. The answer arrives later as an
    /// `AuthorizationChanged` event.
    fn request_authorization(&self);

    /// The stream of location callbacks for this screen.
    fn events(&self) -> Receiver<LocationEvent>;
}

/// The map view. Commands only, no return values.
pub trait MapSurface {
    fn add_pins(&mut self, pins: &[Pin]);
    fn clear_pins(&mut self);
    fn set_region(&mut self, region: &Region);
}

/// Modal presentation. The user's choices come back as `UiEvent`s.
pub trait DialogSurface {
    /// The "we need your location" dialog, with a settings shortcut and a
    /// dismiss button.
    fn present_permission_dialog(&mut self);

    /// The filter menu: one row per chain plus a show-everything row.
    fn present_filter_menu(&mut self, chains: &[&str]);
}

/// The platform's settings deep link.
pub trait SettingsGateway {
    fn open_location_settings(&mut self);
}

/// User interactions handed back by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The round location button in the corner of the map.
    LocationButton,
    /// The filter entry in the navigation bar.
    FilterMenuRequested,
    /// A chain picked from the filter menu.
    FilterSelected(String),
    /// The show-everything row of the filter menu.
    ShowAllSelected,
    /// "Open settings" on the permission dialog.
    PermissionDialogConfirmed,
    /// "Not now" on the permission dialog.
    PermissionDialogDismissed,
}
