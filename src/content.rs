use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_PORTFOLIO: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{table} entry has an empty {field}")]
    EmptyField {
        table: &'static str,
        field: &'static str,
    },
    #[error("duplicate {table} key `{key}`")]
    DuplicateKey { table: &'static str, key: String },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
    pub path: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CertificationGroup {
    pub group: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Concept,
    Building,
    Shipped,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Concept => "Concept",
            ProjectStatus::Building => "Building",
            ProjectStatus::Shipped => "Shipped",
        };
        f.write_str(label)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
}

impl Project {
    /// Header shown on the project card, e.g. `Shipped · Temple Terminal Portfolio`.
    pub fn card_title(&self) -> String {
        match self.status {
            Some(status) => format!("{} · {}", status, self.name),
            None => format!("Project · {}", self.name),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct HobbyEntry {
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Portfolio {
    pub prompt: Prompt,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<CertificationGroup>,
    pub projects: Vec<Project>,
    pub hobbies: Vec<HobbyEntry>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

impl Portfolio {
    /// Loads the tables compiled into the binary from `content/portfolio.json`.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_PORTFOLIO)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    // Every rendered list is keyed, so keys have to be unique and non-empty.
    fn validate(&self) -> Result<(), ContentError> {
        unique_keys("skill", "title", self.skills.iter().map(|s| s.title.as_str()))?;
        for skill in &self.skills {
            unique_keys("skill item", "label", skill.items.iter().map(String::as_str))?;
        }

        unique_keys(
            "certification",
            "group",
            self.certifications.iter().map(|c| c.group.as_str()),
        )?;
        for group in &self.certifications {
            unique_keys("certification item", "label", group.items.iter().map(String::as_str))?;
        }

        unique_keys("project", "name", self.projects.iter().map(|p| p.name.as_str()))?;
        for project in &self.projects {
            unique_keys("project tag", "label", project.tags.iter().map(String::as_str))?;
        }

        unique_keys("hobby", "label", self.hobbies.iter().map(|h| h.label.as_str()))?;
        unique_keys("contact link", "label", self.links.iter().map(|l| l.label.as_str()))?;
        Ok(())
    }
}

fn unique_keys<'a>(
    table: &'static str,
    field: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(ContentError::EmptyField { table, field });
        }
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let portfolio = Portfolio::embedded().unwrap();

        assert_eq!(portfolio.skills.len(), 7);
        assert_eq!(portfolio.certifications.len(), 3);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.hobbies.len(), 8);
        assert_eq!(portfolio.prompt.user, "sarmarzan");
    }

    #[test]
    fn embedded_tables_keep_their_order() {
        let portfolio = Portfolio::embedded().unwrap();

        let titles: Vec<_> = portfolio.skills.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"Web Development"));
        assert_eq!(titles.last(), Some(&"Other"));

        let azure = &portfolio.certifications[0];
        assert_eq!(azure.items, vec!["AI-900", "AZ-900", "AI-102", "AZ-104"]);
        assert_eq!(portfolio.hobbies[0].label, "Spiritual reflection");
    }

    #[test]
    fn only_one_skill_category_carries_a_note() {
        let portfolio = Portfolio::embedded().unwrap();

        let with_note: Vec<_> = portfolio
            .skills
            .iter()
            .filter(|s| s.note.is_some())
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(with_note, vec!["Programming"]);
    }

    #[test]
    fn project_title_falls_back_to_generic_label() {
        let mut project = Project {
            name: "Wisdom Notes".to_string(),
            summary: String::new(),
            tags: Vec::new(),
            status: Some(ProjectStatus::Building),
        };
        assert_eq!(project.card_title(), "Building · Wisdom Notes");

        project.status = None;
        assert_eq!(project.card_title(), "Project · Wisdom Notes");
    }

    #[test]
    fn optional_project_fields_default() {
        let raw = r#"{
            "prompt": { "user": "u", "host": "h", "path": "~" },
            "skills": [],
            "certifications": [],
            "projects": [{ "name": "Bare", "summary": "no extras" }],
            "hobbies": []
        }"#;
        let portfolio = Portfolio::from_json(raw).unwrap();

        let project = &portfolio.projects[0];
        assert!(project.tags.is_empty());
        assert_eq!(project.status, None);
        assert!(portfolio.links.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let raw = r#"{
            "prompt": { "user": "u", "host": "h", "path": "~" },
            "skills": [],
            "certifications": [],
            "projects": [{ "name": "X", "summary": "", "status": "Archived" }],
            "hobbies": []
        }"#;
        assert!(matches!(Portfolio::from_json(raw), Err(ContentError::Parse(_))));
    }

    #[test]
    fn duplicate_hobby_is_rejected() {
        let raw = r#"{
            "prompt": { "user": "u", "host": "h", "path": "~" },
            "skills": [],
            "certifications": [],
            "projects": [],
            "hobbies": ["Football", "Football"]
        }"#;
        match Portfolio::from_json(raw) {
            Err(ContentError::DuplicateKey { table, key }) => {
                assert_eq!(table, "hobby");
                assert_eq!(key, "Football");
            }
            other => panic!("expected duplicate key, got {:?}", other),
        }
    }

    #[test]
    fn blank_skill_item_is_rejected() {
        let raw = r#"{
            "prompt": { "user": "u", "host": "h", "path": "~" },
            "skills": [{ "title": "Backend", "items": ["SQL", "  "] }],
            "certifications": [],
            "projects": [],
            "hobbies": []
        }"#;
        assert!(matches!(
            Portfolio::from_json(raw),
            Err(ContentError::EmptyField { table: "skill item", .. })
        ));
    }
}
