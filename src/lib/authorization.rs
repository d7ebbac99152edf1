/// Per-app location permission as reported by the platform. The app only
/// ever reads it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthorizationState {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
    /// The pre-split "authorized" value some platforms still report.
    AuthorizedLegacy,
    Unknown,
}

/// The single thing the screen does about a resolved authorization state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthorizationAction {
    /// Ask the user for permission.
    Request,
    /// Nothing to do; log and move on.
    Ignore(IgnoreReason),
    /// Show the fallback pin and the permission dialog.
    Fallback,
    /// Put every theater on the map.
    ShowTheaters,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Parental controls or a device profile forbid location access. The
    /// user gets no explanation; see DESIGN.md.
    Restricted,
    LegacyAuthorized,
    Unknown,
}

/// Maps an authorization state to the action the screen takes. Pure, so the
/// whole permission table is testable without any surface in sight.
pub fn next_action(state: AuthorizationState) -> AuthorizationAction {
    use AuthorizationState::*;

    match state {
        NotDetermined => AuthorizationAction::Request,
        Restricted => AuthorizationAction::Ignore(IgnoreReason::Restricted),
        Denied => AuthorizationAction::Fallback,
        AuthorizedAlways | AuthorizedWhenInUse => AuthorizationAction::ShowTheaters,
        AuthorizedLegacy => AuthorizationAction::Ignore(IgnoreReason::LegacyAuthorized),
        Unknown => AuthorizationAction::Ignore(IgnoreReason::Unknown),
    }
}

/// Result of one background authorization probe.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Location services are off at the OS level. The per-app status was
    /// never read.
    ServicesDisabled,
    Resolved(AuthorizationState),
}

#[cfg(test)]
mod tests {
    use super::*;
    use AuthorizationState::*;

    #[test]
    fn every_state_maps_to_exactly_one_action() {
        let expectations = [
            (NotDetermined, AuthorizationAction::Request),
            (
                Restricted,
                AuthorizationAction::Ignore(IgnoreReason::Restricted),
            ),
            (Denied, AuthorizationAction::Fallback),
            (AuthorizedAlways, AuthorizationAction::ShowTheaters),
            (AuthorizedWhenInUse, AuthorizationAction::ShowTheaters),
            (
                AuthorizedLegacy,
                AuthorizationAction::Ignore(IgnoreReason::LegacyAuthorized),
            ),
            (Unknown, AuthorizationAction::Ignore(IgnoreReason::Unknown)),
        ];

        for (state, action) in expectations.iter() {
            assert_eq!(next_action(*state), *action, "state {:?}", state);
        }
    }

    #[test]
    fn only_full_authorization_shows_theaters() {
        let showing: Vec<_> = [
            NotDetermined,
            Restricted,
            Denied,
            AuthorizedAlways,
            AuthorizedWhenInUse,
            AuthorizedLegacy,
            Unknown,
        ]
        .iter()
        .filter(|state| next_action(**state) == AuthorizationAction::ShowTheaters)
        .copied()
        .collect();

        assert_eq!(showing, vec![AuthorizedAlways, AuthorizedWhenInUse]);
    }
}
