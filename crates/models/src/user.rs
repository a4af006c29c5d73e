use serde::{Deserialize, Serialize};

/// Registered storefront user.
///
/// `username` is the unique natural key; uniqueness is enforced at
/// registration time by the user service. Users are read-only after
/// registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_image: String,
}
