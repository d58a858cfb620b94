//! Typed ID wrappers for rows this service owns.
//!
//! Wrapping the UUID prevents a player's id from being passed where a season's
//! id is expected. Rows owned by the external auth/organization engine
//! (organizations, teams, users, members, invitations) keep the engine's
//! opaque string ids and are not wrapped here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Generates a typed UUID wrapper with the common trait implementations.
macro_rules! typed_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Serialize,
            Deserialize,
            sqlx::Type,
            ToSchema,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(PlayerId, "Unique identifier for a player.");
typed_id!(TeamPlayerId, "Unique identifier for a roster membership row.");
typed_id!(ContactInfoId, "Unique identifier for a player contact-info row.");
typed_id!(SeasonId, "Unique identifier for a season.");
typed_id!(GameId, "Unique identifier for a game.");
typed_id!(FeedbackId, "Unique identifier for a feedback entry.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_ids_round_trip_through_strings() {
        let id = PlayerId::new();
        let parsed: PlayerId = id.to_string().parse().expect("parse display output");
        assert_eq!(id, parsed);
    }

    #[test]
    fn typed_ids_serialize_as_plain_uuid_strings() {
        let id = SeasonId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id));
    }
}
