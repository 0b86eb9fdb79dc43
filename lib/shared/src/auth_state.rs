use serde::{Deserialize, Serialize};

/// A third-party service whose token possession is reported by `/api/authstate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integration {
    Fitbit,
    Google,
}

impl Integration {
    /// Render order of the status rows.
    pub const ALL: [Integration; 2] = [Integration::Fitbit, Integration::Google];

    /// Key of this integration in the snapshot JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Integration::Fitbit => "fitbit",
            Integration::Google => "google",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Integration::Fitbit => "Fitbit",
            Integration::Google => "Google",
        }
    }
}

/// Per-integration record. Only Fitbit's record carries the fields needed for the
/// authorization redirect; everything is optional so a partial record never fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ServiceAuthState {
    pub has_token: Option<bool>,
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub scopes: Option<String>,
}

/// Authorization snapshot as returned by the backend.
///
/// Starts out empty (`Default`) and is replaced as a whole once the fetch resolves.
/// Unknown keys in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AuthSnapshot {
    pub fitbit: Option<ServiceAuthState>,
    pub google: Option<ServiceAuthState>,
}

impl AuthSnapshot {
    pub fn service(&self, integration: Integration) -> Option<&ServiceAuthState> {
        match integration {
            Integration::Fitbit => self.fitbit.as_ref(),
            Integration::Google => self.google.as_ref(),
        }
    }

    /// `has_token` of the integration, `None` when the record or the field is absent.
    pub fn has_token(&self, integration: Integration) -> Option<bool> {
        self.service(integration).and_then(|s| s.has_token)
    }

    /// Absent records and absent flags count as not authorized.
    pub fn is_authorized(&self, integration: Integration) -> bool {
        self.has_token(integration).unwrap_or(false)
    }
}
