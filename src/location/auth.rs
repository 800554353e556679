//! Outcome of a location permission request.

use super::PermissionStatus;

/// What the runtime should do after a permission request resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    /// Permission granted: start a one-shot position retrieval.
    Granted,
    /// Permission refused: show the blocking denial notice.
    Denied {
        /// Offer a shortcut to the location settings (repeat denials only).
        offer_settings: bool,
    },
}

/// Remembers whether a denial was already reported during this session.
///
/// The first denial gets a plain notice; every later one offers the
/// settings shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DenialTracker {
    denied_before: bool,
}

impl DenialTracker {
    /// What: Classify a permission status and record denials.
    ///
    /// Inputs:
    /// - `status`: Status returned by the provider
    ///
    /// Output:
    /// - `Granted`, or `Denied` with `offer_settings` set from the second denial on
    pub fn on_status(&mut self, status: PermissionStatus) -> AuthorizationOutcome {
        if status.is_granted() {
            tracing::info!(?status, "location permission granted");
            return AuthorizationOutcome::Granted;
        }
        let offer_settings = self.denied_before;
        self.denied_before = true;
        tracing::info!(?status, offer_settings, "location permission denied");
        AuthorizationOutcome::Denied { offer_settings }
    }

    /// Whether a denial has already been shown this session.
    #[must_use]
    pub const fn denied_before(&self) -> bool {
        self.denied_before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_denial_is_plain_and_later_ones_offer_settings() {
        let mut t = DenialTracker::default();
        assert_eq!(
            t.on_status(PermissionStatus::Denied),
            AuthorizationOutcome::Denied {
                offer_settings: false
            }
        );
        assert_eq!(
            t.on_status(PermissionStatus::DeniedAlways),
            AuthorizationOutcome::Denied {
                offer_settings: true
            }
        );
        assert_eq!(
            t.on_status(PermissionStatus::Denied),
            AuthorizationOutcome::Denied {
                offer_settings: true
            }
        );
    }

    #[test]
    fn grants_do_not_reset_the_denial_memory() {
        let mut t = DenialTracker::default();
        assert_eq!(
            t.on_status(PermissionStatus::GrantedWhenInUse),
            AuthorizationOutcome::Granted
        );
        assert!(!t.denied_before());
        let _ = t.on_status(PermissionStatus::Denied);
        assert_eq!(t.on_status(PermissionStatus::Granted), AuthorizationOutcome::Granted);
        assert!(t.denied_before());
    }
}
