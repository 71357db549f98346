//! User domain entity and related types.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;
use validator::Validate;

use crate::constants::USER_ID_HEX_LEN;
use crate::error::{DomainError, DomainResult};

/// User identifier.
///
/// Rendered as 32 lowercase hex digits, which is also the path segment that
/// addresses the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID
    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Check if this is the nil identifier
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    /// Accepts exactly [`USER_ID_HEX_LEN`] hex digits, either case.
    fn from_str(s: &str) -> DomainResult<Self> {
        if s.len() != USER_ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::invalid_id(s));
        }

        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| DomainError::invalid_id(s))
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Optional id field where `""` and `null` both mean absent.
fn deserialize_optional_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UserId>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "5f0c2a1e9b7d4c3e8a6f1b2d3c4e5f60")
    )]
    pub id: UserId,
    /// User display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ryan"))]
    pub name: String,
    /// Free-text role
    #[cfg_attr(feature = "openapi", schema(example = "Engineer"))]
    pub role: String,
}

impl User {
    /// Create an empty record with the given identifier
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: String::new(),
            role: String::new(),
        }
    }

    /// Check the record can be stored.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        if self.id.is_nil() {
            return Err(DomainError::validation("User id is required"));
        }

        self.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            DomainError::validation(message)
        })
    }
}

/// Request body shape for create, replace and partial update.
///
/// Every field is optional so the same payload serves merge and replace
/// decoding. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPayload {
    /// Client-supplied id. Must be a well-formed id when present; never applied.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
    pub id: Option<UserId>,
    /// New display name
    #[cfg_attr(feature = "openapi", schema(example = "Ryan"))]
    pub name: Option<String>,
    /// New role
    #[cfg_attr(feature = "openapi", schema(example = "Engineer"))]
    pub role: Option<String>,
}

impl UserPayload {
    /// Decode a JSON body.
    pub fn from_json(body: &[u8]) -> DomainResult<Self> {
        if body.is_empty() {
            return Err(DomainError::validation("Body is empty"));
        }

        serde_json::from_slice(body).map_err(|e| DomainError::validation(e.to_string()))
    }

    /// Merge onto an existing record; absent fields keep their value.
    pub fn apply_to(self, target: &mut User) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(role) = self.role {
            target.role = role;
        }
    }

    /// Build a fresh record; absent fields are left empty.
    pub fn into_user(self, id: UserId) -> User {
        let mut user = User::new(id);
        self.apply_to(&mut user);
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ryan() -> User {
        User {
            id: UserId::generate(),
            name: "Ryan".to_string(),
            role: "Engineer".to_string(),
        }
    }

    #[test]
    fn id_round_trips_through_hex() {
        let id = UserId::generate();
        let hex = id.to_string();

        assert_eq!(hex.len(), USER_ID_HEX_LEN);
        assert_eq!(hex, hex.to_lowercase());
        assert_eq!(hex.parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn id_accepts_uppercase_hex() {
        let id = UserId::generate();
        let upper = id.to_string().to_uppercase();

        assert_eq!(upper.parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn id_rejects_malformed_input() {
        let hyphenated = Uuid::new_v4().hyphenated().to_string();
        for raw in [
            "",
            "not-a-valid-id",
            "123",
            "zz0c2a1e9b7d4c3e8a6f1b2d3c4e5f60",
            "5f0c2a1e9b7d4c3e8a6f1b2d3c4e5f6",
            "5f0c2a1e9b7d4c3e8a6f1b2d3c4e5f600",
            hyphenated.as_str(),
        ] {
            assert!(
                matches!(raw.parse::<UserId>(), Err(DomainError::InvalidId(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn user_serializes_id_as_hex() {
        let user = ryan();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], user.id.to_string());
        assert_eq!(json["name"], "Ryan");
        assert_eq!(json["role"], "Engineer");
    }

    #[test]
    fn merge_keeps_absent_fields_and_ignores_unknown_ones() {
        let mut user = ryan();
        let id = user.id;
        let payload = UserPayload::from_json(br#"{"role": "tester", "age": 30}"#).unwrap();

        payload.apply_to(&mut user);

        assert_eq!(user.id, id);
        assert_eq!(user.name, "Ryan");
        assert_eq!(user.role, "tester");
    }

    #[test]
    fn merge_treats_null_as_absent() {
        let mut user = ryan();
        let payload = UserPayload::from_json(br#"{"name": null}"#).unwrap();

        payload.apply_to(&mut user);

        assert_eq!(user.name, "Ryan");
    }

    #[test]
    fn replace_resets_absent_fields() {
        let id = UserId::generate();
        let user = UserPayload::from_json(br#"{"name": "Ryan"}"#)
            .unwrap()
            .into_user(id);

        assert_eq!(user, User { id, name: "Ryan".to_string(), role: String::new() });
    }

    #[test]
    fn body_id_is_never_applied() {
        let id = UserId::generate();
        let other = UserId::generate();
        let body = format!(r#"{{"id": "{}", "name": "Ryan"}}"#, other);

        let user = UserPayload::from_json(body.as_bytes()).unwrap().into_user(id);

        assert_eq!(user.id, id);
    }

    #[test]
    fn decode_rejects_empty_and_malformed_bodies() {
        assert!(UserPayload::from_json(b"").is_err());
        assert!(UserPayload::from_json(b"{").is_err());
        assert!(UserPayload::from_json(b"null").is_err());
        assert!(UserPayload::from_json(br#"{"id": 123}"#).is_err());
        assert!(UserPayload::from_json(br#"{"id": "abc", "name": "Ryan"}"#).is_err());
        assert!(UserPayload::from_json(br#"{"name": 7}"#).is_err());
    }

    #[test]
    fn empty_or_null_body_id_is_absent() {
        let bodies = [
            br#"{"id": "", "name": "Ryan"}"#.as_slice(),
            br#"{"id": null, "name": "Ryan"}"#.as_slice(),
        ];
        for body in bodies {
            let payload = UserPayload::from_json(body).unwrap();
            assert_eq!(payload.id, None);
            assert_eq!(payload.name.as_deref(), Some("Ryan"));
        }
    }

    #[test]
    fn empty_object_decodes_to_empty_payload() {
        assert_eq!(UserPayload::from_json(b"{}").unwrap(), UserPayload::default());
    }

    #[test]
    fn validation_requires_name_and_id() {
        assert!(ryan().ensure_valid().is_ok());

        let mut nameless = ryan();
        nameless.name.clear();
        assert_eq!(
            nameless.ensure_valid(),
            Err(DomainError::validation("Name cannot be empty"))
        );

        let mut nil = ryan();
        nil.id = UserId::new(Uuid::nil());
        assert!(matches!(nil.ensure_valid(), Err(DomainError::Validation(_))));
    }
}
