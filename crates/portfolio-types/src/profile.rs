use serde::{Deserialize, Serialize};

/// The portfolio owner. Exactly one exists per server; updates replace it whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub location: Option<String>,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    /// URL or `data:` URI of the profile photo.
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Display order is insertion order.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub socials: Socials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_uses_camel_case_on_the_wire() {
        let profile = Profile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            bio: "Builds things".to_string(),
            location: None,
            email: "ada@example.com".to_string(),
            website: None,
            profile_picture: Some("https://example.com/ada.png".to_string()),
            skills: vec!["Rust".to_string()],
            socials: Socials::default(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["profilePicture"], "https://example.com/ada.png");
        assert!(json.get("profile_picture").is_none());
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"Ada","title":"Engineer","bio":"","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert!(profile.skills.is_empty());
        assert_eq!(profile.socials, Socials::default());
        assert!(profile.website.is_none());
    }
}
