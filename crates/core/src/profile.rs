//! Profile records and portfolio draft assembly.
//!
//! Records mirror the two document-store collections a freelancer is spread
//! across (`users` and `freelancers`). Every field is optional because the
//! store does not enforce a schema; [`missing_fields`] reports what a record
//! lacks so the shell can log it.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classify::{classify, CategoryMatch};
use crate::taxonomy::Taxonomy;

/// Placeholder used when no name can be resolved from either record.
pub const UNKNOWN_NAME: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreelancerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rich-text field; anything other than a string is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_description: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_links: Option<String>,
    #[serde(
        rename = "linkedIn_profile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    /// Upload descriptor, normally `{ "url": "..." }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl FreelancerRecord {
    /// Skills followed by tools, as declared.
    pub fn declared_items(&self) -> Vec<String> {
        self.skills
            .iter()
            .chain(self.tools.iter())
            .flatten()
            .cloned()
            .collect()
    }
}

/// Everything known about a freelancer before narrative generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDraft {
    pub full_name: String,
    pub about: String,
    pub github_link: Option<String>,
    pub behance_link: Option<String>,
    pub dribbble_link: Option<String>,
    pub portfolio_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub profile_photo: Option<String>,
    pub services: Vec<CategoryMatch>,
    pub tools: Vec<String>,
    pub resume_text: Option<String>,
}

/// Object ids are 24 hexadecimal characters.
pub fn is_valid_user_id(id: &str) -> bool {
    let id = id.trim();
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Expected fields that are absent from the records that do exist, as
/// `user.<field>` / `freelancer.<field>`.
pub fn missing_fields(user: Option<&UserRecord>, freelancer: Option<&FreelancerRecord>) -> Vec<String> {
    let mut missing = Vec::new();

    if let Some(user) = user {
        let fields = [
            ("first_name", user.first_name.is_none()),
            ("last_name", user.last_name.is_none()),
            ("github_profile", user.github_profile.is_none()),
            ("profile_photo", user.profile_photo.is_none()),
        ];
        missing.extend(
            fields
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| format!("user.{name}")),
        );
    }

    if let Some(freelancer) = freelancer {
        let fields = [
            ("name", freelancer.name.is_none()),
            ("work_description", freelancer.work_description.is_none()),
            ("portfolio_website", freelancer.portfolio_website.is_none()),
            ("skills", freelancer.skills.is_none()),
            ("tools", freelancer.tools.is_none()),
        ];
        missing.extend(
            fields
                .into_iter()
                .filter(|(_, absent)| *absent)
                .map(|(name, _)| format!("freelancer.{name}")),
        );
    }

    missing
}

/// URL of the uploaded résumé, when the record carries a non-empty one.
pub fn resume_url(freelancer: &FreelancerRecord) -> Option<&str> {
    freelancer
        .resume
        .as_ref()?
        .as_object()?
        .get("url")?
        .as_str()
        .filter(|url| !url.trim().is_empty())
}

/// `first_name last_name` from the user, else the freelancer's `name`, else
/// [`UNKNOWN_NAME`].
pub fn resolve_full_name(user: Option<&UserRecord>, freelancer: Option<&FreelancerRecord>) -> String {
    let from_user = user
        .map(|u| {
            let first = u.first_name.as_deref().unwrap_or("").trim();
            let last = u.last_name.as_deref().unwrap_or("").trim();
            format!("{first} {last}").trim().to_string()
        })
        .filter(|name| !name.is_empty());

    from_user
        .or_else(|| freelancer.and_then(|f| f.name.clone()))
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Remove `<...>` markup and trim.
pub fn strip_tags(html: &str) -> String {
    static RE_TAG: OnceLock<Regex> = OnceLock::new();
    let re_tag = RE_TAG.get_or_init(|| Regex::new(r"<.*?>").unwrap());
    re_tag.replace_all(html, "").trim().to_string()
}

/// Plain-text "about" section. Non-string descriptions yield an empty string.
pub fn about_text(freelancer: &FreelancerRecord) -> String {
    match &freelancer.work_description {
        Some(serde_json::Value::String(html)) => strip_tags(html),
        Some(other) => {
            log::warn!("Ignoring non-string work_description: {}", other);
            String::new()
        }
        None => String::new(),
    }
}

/// Links sorted into the slots the portfolio template knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLinks {
    pub behance: Option<String>,
    pub dribbble: Option<String>,
    pub portfolio: Option<String>,
}

/// A Behance portfolio website or Dribbble project link takes its dedicated
/// slot; a generic portfolio link is only kept when neither was found.
pub fn classify_links(portfolio_website: &str, project_links: &str) -> ProfileLinks {
    let behance = portfolio_website
        .contains("behance.net")
        .then(|| portfolio_website.to_string());
    let dribbble = project_links
        .contains("dribbble.com")
        .then(|| project_links.to_string());
    let portfolio = (!portfolio_website.trim().is_empty() && behance.is_none() && dribbble.is_none())
        .then(|| portfolio_website.to_string());

    ProfileLinks {
        behance,
        dribbble,
        portfolio,
    }
}

/// Assemble the draft handed to narrative generation.
pub fn build_draft(
    user: Option<&UserRecord>,
    freelancer: Option<&FreelancerRecord>,
    resume_text: Option<String>,
    taxonomy: &Taxonomy,
) -> PortfolioDraft {
    let links = classify_links(
        freelancer
            .and_then(|f| f.portfolio_website.as_deref())
            .unwrap_or(""),
        freelancer
            .and_then(|f| f.project_links.as_deref())
            .unwrap_or(""),
    );

    let declared = freelancer.map(FreelancerRecord::declared_items).unwrap_or_default();
    let classification = classify(taxonomy, &declared);

    let profile_photo = user
        .and_then(|u| u.profile_photo.clone())
        .filter(|p| !p.is_empty())
        .or_else(|| freelancer.and_then(|f| f.profile_photo.clone()));

    PortfolioDraft {
        full_name: resolve_full_name(user, freelancer),
        about: freelancer.map(about_text).unwrap_or_default(),
        github_link: user.and_then(|u| u.github_profile.clone()),
        behance_link: links.behance,
        dribbble_link: links.dribbble,
        portfolio_link: links.portfolio,
        linkedin_link: freelancer.and_then(|f| f.linkedin_profile.clone()),
        profile_photo,
        services: classification.categories,
        tools: classification.tools,
        resume_text,
    }
}
