//! Authorization policy for zone operations.
//!
//! Role checks live here as an explicit decision function instead of
//! inline conditionals in the services, so the rules are independently
//! testable.

use crate::domain::Role;
use crate::error::AppError;

/// Zone operations subject to authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneAction {
    /// Register a new zone
    Create,
    /// Update title, description or status
    Annotate,
    /// Remove a zone
    Delete,
}

/// Outcome of a policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(&'static str),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

/// Evaluate whether a requester with `role` may perform `action`.
///
/// `is_owner` is only consulted for `Delete`: a farmer may delete their
/// own zones, an agronomist may delete any zone.
pub fn evaluate(role: Role, action: ZoneAction, is_owner: bool) -> Decision {
    match action {
        ZoneAction::Create => match role {
            Role::Farmer => Decision::Allowed,
            Role::Agronomist => Decision::Denied("Only farmers can create zones"),
        },
        ZoneAction::Annotate => match role {
            Role::Agronomist => Decision::Allowed,
            Role::Farmer => Decision::Denied("Only agronomists are allowed to update zone data"),
        },
        ZoneAction::Delete => {
            if role == Role::Agronomist || is_owner {
                Decision::Allowed
            } else {
                Decision::Denied("You are not authorized to delete this zone")
            }
        }
    }
}

/// Enforce a decision, mapping a denial to `AppError::Forbidden`
pub fn enforce(role: Role, action: ZoneAction, is_owner: bool) -> Result<(), AppError> {
    match evaluate(role, action, is_owner) {
        Decision::Allowed => Ok(()),
        Decision::Denied(reason) => Err(AppError::Forbidden(reason.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_farmers_create_zones() {
        assert!(evaluate(Role::Farmer, ZoneAction::Create, false).is_allowed());
        assert!(!evaluate(Role::Agronomist, ZoneAction::Create, false).is_allowed());
    }

    #[test]
    fn test_only_agronomists_annotate() {
        assert!(evaluate(Role::Agronomist, ZoneAction::Annotate, false).is_allowed());
        // Ownership does not grant annotation rights
        assert!(!evaluate(Role::Farmer, ZoneAction::Annotate, true).is_allowed());
    }

    #[test]
    fn test_delete_requires_agronomist_or_owner() {
        assert!(evaluate(Role::Agronomist, ZoneAction::Delete, false).is_allowed());
        assert!(evaluate(Role::Farmer, ZoneAction::Delete, true).is_allowed());
        assert!(!evaluate(Role::Farmer, ZoneAction::Delete, false).is_allowed());
    }

    #[test]
    fn test_enforce_maps_denial_to_forbidden() {
        let err = enforce(Role::Agronomist, ZoneAction::Create, false).unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert!(enforce(Role::Farmer, ZoneAction::Create, false).is_ok());
    }
}
