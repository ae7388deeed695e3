//! Identifier policy: fresh id generation and route/payload reconciliation.

use uuid::Uuid;

use super::errors::DomainError;

/// Generate a fresh 32-character hex id for a newly created resource.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Reject a payload whose embedded id disagrees with the route id.
///
/// Runs before the create/update distinction, so a create carrying an
/// embedded id is held to the same rule. An empty-string id counts as
/// absent and is never compared.
pub fn check_route_match(
    resource: &str,
    payload_id: Option<&str>,
    route_id: Option<&str>,
) -> Result<(), DomainError> {
    if let Some(id) = payload_id.filter(|id| !id.is_empty()) {
        if route_id != Some(id) {
            return Err(DomainError::validation(format!(
                "{resource} id does not match route id. {resource}: {id}, Route: {route}",
                route = route_id.unwrap_or("none"),
            )));
        }
    }
    Ok(())
}
