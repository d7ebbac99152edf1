use theatermap::{DialogSurface, MapSurface, Pin, Region, SettingsGateway};

/// Where the permission dialog sends the user on this platform.
const LOCATION_SETTINGS_URI: &str = "settings://privacy/location-services";

/// Map surface that narrates the commands it receives.
#[derive(Default)]
pub struct ConsoleMap {
    pins: usize,
}

impl MapSurface for ConsoleMap {
    fn add_pins(&mut self, pins: &[Pin]) {
        for pin in pins {
            match &pin.title {
                Some(title) => log::info!("Pin {:?} at {}", title, pin.coordinate),
                None => log::info!("Pin at {}", pin.coordinate),
            }
        }
        self.pins += pins.len();
    }

    fn clear_pins(&mut self) {
        if self.pins > 0 {
            log::info!("Removed {} pins.", self.pins);
        }
        self.pins = 0;
    }

    fn set_region(&mut self, region: &Region) {
        let (latitude_delta, longitude_delta) = region.degree_span();
        log::info!(
            "Viewport centered at {}, spanning {:.4}° x {:.4}°.",
            region.center,
            latitude_delta,
            longitude_delta
        );
    }
}

/// Modal dialogs, narrated.
pub struct ConsoleDialogs;

impl DialogSurface for ConsoleDialogs {
    fn present_permission_dialog(&mut self) {
        log::warn!("We need your location.");
        log::warn!("Turn on Location Services under Settings > Privacy & Security so the map can find theaters near you.");
        log::warn!("  [Open settings]  [Not now]");
    }

    fn present_filter_menu(&mut self, chains: &[&str]) {
        log::info!("Filter theaters:");
        for chain in chains {
            log::info!("  - {}", chain);
        }
        log::info!("  - Show everything");
    }
}

/// Hands the settings deep link to the OS. The demo only narrates it.
pub struct DesktopSettings;

impl SettingsGateway for DesktopSettings {
    fn open_location_settings(&mut self) {
        log::info!("Opening {} in the system settings.", LOCATION_SETTINGS_URI);
    }
}
