//! Zone domain model
//!
//! A zone is a georeferenced record owned by one farmer. Agronomists
//! annotate zones with alert metadata (title, description, status).

use super::user::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Alert status of a zone.
///
/// The source schema stores status as a free string; only these three
/// values are ever written, so the store boundary enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ZoneStatus {
    Active,
    Inactive,
    Pending,
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ZoneStatus::Active => "active",
            ZoneStatus::Inactive => "inactive",
            ZoneStatus::Pending => "pending",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ZoneStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ZoneStatus::Active),
            "inactive" => Ok(ZoneStatus::Inactive),
            "pending" => Ok(ZoneStatus::Pending),
            other => Err(format!("Unknown zone status '{other}'")),
        }
    }
}

/// Zone entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Zone {
    pub id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ZoneStatus>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Reduced owner sub-record embedded in zone responses.
///
/// Email is only populated for single-zone lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOwner {
    pub id: i64,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Zone with its owner projection, as returned by read endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneWithOwner {
    pub id: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ZoneStatus>,
    pub user: ZoneOwner,
}

impl ZoneWithOwner {
    /// Drop the owner email from the projection (list responses)
    pub fn without_owner_email(mut self) -> Self {
        self.user.email = None;
        self
    }
}

/// Input for creating a zone
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateZoneInput {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Input for annotating a zone. Missing fields keep their prior value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateZoneInput {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub status: Option<ZoneStatus>,
}

impl UpdateZoneInput {
    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zone_status_round_trip() {
        assert_eq!("active".parse::<ZoneStatus>().unwrap(), ZoneStatus::Active);
        assert_eq!(
            "pending".parse::<ZoneStatus>().unwrap(),
            ZoneStatus::Pending
        );
        assert!("archived".parse::<ZoneStatus>().is_err());
        assert_eq!(ZoneStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_zone_status_rejected_in_update_input() {
        let err = serde_json::from_str::<UpdateZoneInput>(r#"{"status":"archived"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_update_input_is_empty() {
        let input = UpdateZoneInput::default();
        assert!(input.is_empty());

        let input = UpdateZoneInput {
            status: Some(ZoneStatus::Active),
            ..Default::default()
        };
        assert!(!input.is_empty());
    }

    #[test]
    fn test_create_zone_input_range() {
        let input = CreateZoneInput {
            latitude: 120.0,
            longitude: -6.75,
            user_id: 1,
        };
        assert!(input.validate().is_err());

        let input = CreateZoneInput {
            latitude: 34.05,
            longitude: -6.75,
            user_id: 1,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_owner_email_omitted_in_list_projection() {
        let zone = ZoneWithOwner {
            id: 1,
            latitude: Some(34.05),
            longitude: Some(-6.75),
            title: None,
            description: None,
            status: None,
            user: ZoneOwner {
                id: 1,
                name: "Amina".to_string(),
                role: Role::Farmer,
                email: Some("amina@example.com".to_string()),
            },
        };
        let json = serde_json::to_value(zone.without_owner_email()).unwrap();
        assert!(json["user"].get("email").is_none());
    }
}
