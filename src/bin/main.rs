mod config;
mod shell;
mod sim;

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use theatermap::{Coordinate, TheaterCatalog, TheaterMapScreen, UiEvent};

use crate::config::CONFIG;
use crate::shell::{ConsoleDialogs, ConsoleMap, DesktopSettings};
use crate::sim::SimulatedLocationService;

fn main() {
    log::set_max_level(CONFIG.general.log_level.to_level_filter());
    pretty_env_logger::init();

    let route: Vec<Coordinate> = CONFIG
        .simulation
        .route
        .iter()
        .map(|[latitude, longitude]| Coordinate::new(*latitude, *longitude))
        .collect();
    let service = Arc::new(SimulatedLocationService::new(
        CONFIG.simulation.scenario,
        route,
    ));
    service.start();

    let mut screen = TheaterMapScreen::new(
        TheaterCatalog::builtin(),
        service.clone(),
        ConsoleMap::default(),
        ConsoleDialogs,
        DesktopSettings,
    );

    let last_scripted_tick = CONFIG
        .simulation
        .script
        .iter()
        .map(|scripted| scripted.at_tick)
        .max()
        .unwrap_or(0);
    // Grace ticks so late probe results and route updates still land.
    let total_ticks = last_scripted_tick + 20;

    for tick in 0..=total_ticks {
        for scripted in CONFIG
            .simulation
            .script
            .iter()
            .filter(|scripted| scripted.at_tick == tick)
        {
            match parse_event(&scripted.event) {
                Some(event) => {
                    log::info!("User: {}", scripted.event);
                    screen.handle_ui(event);
                }
                None => log::error!("Unknown scripted event {:?}.", scripted.event),
            }
        }
        screen.tick();
        sleep(Duration::from_millis(CONFIG.general.tick_millis));
    }

    log::info!("Demo finished with {} pins on the map.", screen.pin_count());
}

/// Accepted scripted events: `location_button`, `filter_menu`,
/// `filter:<chain>`, `show_all`, `settings_confirm`, `settings_dismiss`.
fn parse_event(raw: &str) -> Option<UiEvent> {
    if let Some(chain) = raw.strip_prefix("filter:") {
        return Some(UiEvent::FilterSelected(chain.to_string()));
    }
    match raw {
        "location_button" => Some(UiEvent::LocationButton),
        "filter_menu" => Some(UiEvent::FilterMenuRequested),
        "show_all" => Some(UiEvent::ShowAllSelected),
        "settings_confirm" => Some(UiEvent::PermissionDialogConfirmed),
        "settings_dismiss" => Some(UiEvent::PermissionDialogDismissed),
        _ => None,
    }
}

#[test]
fn scripted_events_parse() {
    assert_eq!(
        parse_event("filter:CGV"),
        Some(UiEvent::FilterSelected("CGV".to_string()))
    );
    assert_eq!(parse_event("location_button"), Some(UiEvent::LocationButton));
    assert_eq!(parse_event("teleport"), None);
}
