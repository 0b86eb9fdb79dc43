use std::borrow::Cow;

use crate::auth_state::{AuthSnapshot, Integration};

pub const FITBIT_AUTHORIZE_URL: &str = "https://www.fitbit.com/oauth2/authorize";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthorizeUrlError {
    #[error("no {0} record in the authorization snapshot")]
    MissingService(&'static str),
    #[error("{service} record has no `{field}`")]
    MissingField {
        service: &'static str,
        field: &'static str,
    },
}

/// Builds the OAuth authorization-code URL for Fitbit from the snapshot.
///
/// Each query value is percent-encoded. A missing record or credential field is an error
/// rather than being spliced into the URL as a placeholder.
pub fn authorize_url(endpoint: &str, snapshot: &AuthSnapshot) -> Result<String, AuthorizeUrlError> {
    let integration = Integration::Fitbit;
    let service = integration.key();
    let record = snapshot
        .service(integration)
        .ok_or(AuthorizeUrlError::MissingService(service))?;

    let client_id = encode_field(service, "client_id", &record.client_id)?;
    let redirect_uri = encode_field(service, "redirect_uri", &record.redirect_uri)?;
    let scope = encode_field(service, "scopes", &record.scopes)?;

    Ok(format!(
        "{endpoint}?response_type=code&client_id={client_id}&redirect_uri={redirect_uri}&scope={scope}"
    ))
}

fn encode_field<'a>(
    service: &'static str,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<Cow<'a, str>, AuthorizeUrlError> {
    value
        .as_deref()
        .map(urlencoding::encode)
        .ok_or(AuthorizeUrlError::MissingField { service, field })
}
