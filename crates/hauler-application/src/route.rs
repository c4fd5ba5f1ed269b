//! Route gating.

use crate::auth::AuthState;

/// Top-level views a front end can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    ProfileSetup,
    Dashboard,
}

/// Pure mapping from session state to the view to render.
pub struct RouteGate;

impl RouteGate {
    /// Resolves the view for a requested route.
    ///
    /// Returns `None` while the session is still resolving; front ends
    /// render a splash until the first resolution lands. After that:
    /// signed-out sessions always land on `Login`, signed-in sessions
    /// without a profile always land on `ProfileSetup`, and complete
    /// sessions get the requested route except that `Login` and
    /// `ProfileSetup` forward to `Dashboard`.
    pub fn resolve(state: &AuthState, requested: Route) -> Option<Route> {
        if state.loading {
            return None;
        }
        let target = if !state.is_authenticated() {
            Route::Login
        } else if !state.has_profile() {
            Route::ProfileSetup
        } else {
            match requested {
                Route::Login | Route::ProfileSetup => Route::Dashboard,
                other => other,
            }
        };
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hauler_core::profile::Profile;
    use hauler_infrastructure::seed;

    fn resolving() -> AuthState {
        AuthState {
            loading: true,
            ..AuthState::default()
        }
    }

    fn signed_out() -> AuthState {
        AuthState::default()
    }

    fn signed_in(profile: Option<Profile>) -> AuthState {
        AuthState {
            account: Some(seed::demo_account()),
            profile,
            loading: false,
        }
    }

    #[test]
    fn test_no_route_while_resolving() {
        for requested in [Route::Login, Route::ProfileSetup, Route::Dashboard] {
            assert_eq!(RouteGate::resolve(&resolving(), requested), None);
        }
    }

    #[test]
    fn test_signed_out_always_lands_on_login() {
        for requested in [Route::Login, Route::ProfileSetup, Route::Dashboard] {
            assert_eq!(
                RouteGate::resolve(&signed_out(), requested),
                Some(Route::Login)
            );
        }
    }

    #[test]
    fn test_missing_profile_always_lands_on_setup() {
        for requested in [Route::Login, Route::ProfileSetup, Route::Dashboard] {
            assert_eq!(
                RouteGate::resolve(&signed_in(None), requested),
                Some(Route::ProfileSetup)
            );
        }
    }

    #[test]
    fn test_complete_session_skips_login_and_setup() {
        let state = signed_in(Some(seed::demo_profile()));
        assert_eq!(
            RouteGate::resolve(&state, Route::Login),
            Some(Route::Dashboard)
        );
        assert_eq!(
            RouteGate::resolve(&state, Route::ProfileSetup),
            Some(Route::Dashboard)
        );
        assert_eq!(
            RouteGate::resolve(&state, Route::Dashboard),
            Some(Route::Dashboard)
        );
    }
}
