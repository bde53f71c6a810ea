use super::{null_default, parse_date, ExternalUrls, Followers, Image, Uri};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Publicly available information about a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Name shown on the profile; not populated inside playlist owners
    pub display_name: Option<String>,
    pub external_urls: ExternalUrls,
    pub followers: Option<Followers>,
    #[serde(deserialize_with = "null_default")]
    pub href: String,
    /// Spotify user id (not a base-62 id)
    pub id: String,
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_default")]
    pub uri: Uri,
}

/// Explicit content settings of the current user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplicitContent {
    /// Explicit content should not be played
    pub filter_enabled: bool,
    /// The setting cannot be changed by the user
    pub filter_locked: bool,
}

/// Private profile of the current user
///
/// Country and product need the `user-read-private` scope, email needs
/// `user-read-email` and birthdate `user-read-birthdate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub country: Option<String>,
    /// Unverified address entered at sign-up
    #[serde(default)]
    pub email: Option<String>,
    /// Subscription level (`premium`, `free`, ...)
    #[serde(default)]
    pub product: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub explicit_content: Option<ExplicitContent>,
}

impl PrivateUser {
    pub fn birthdate_date(&self) -> Option<NaiveDate> {
        self.birthdate.as_deref().and_then(parse_date)
    }
}

impl Deref for PrivateUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.user
    }
}
