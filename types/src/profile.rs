//! The portfolio owner shown in the info panel and the chat header.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub surname: Option<String>,
    pub role: String,
    /// Presence line under the name in the chat header.
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

fn default_status() -> String {
    "Active now".to_string()
}

impl Profile {
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {surname}", self.name),
            None => self.name.clone(),
        }
    }
}
