//! Interview role catalog.
//!
//! The candidate picks a role before the panel starts; the role title is
//! woven into the welcome message.

use crate::error::{PanelError, Result};
use serde::{Deserialize, Serialize};

/// A role the candidate can practise for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRole {
    /// Stable slug, e.g. `"backend-engineer"`
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// One-line summary shown in role pickers
    pub description: String,
    /// Topics the panel tends to cover
    pub focus_areas: Vec<String>,
}

fn role(id: &str, title: &str, description: &str, focus_areas: &[&str]) -> InterviewRole {
    InterviewRole {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        focus_areas: focus_areas.iter().map(|s| s.to_string()).collect(),
    }
}

/// Returns the built-in role catalog.
pub fn default_roles() -> Vec<InterviewRole> {
    vec![
        role(
            "software-engineer",
            "Software Engineer",
            "General software engineering loop covering coding, debugging and teamwork.",
            &["debugging", "testing", "collaboration"],
        ),
        role(
            "backend-engineer",
            "Backend Engineer",
            "Services, data stores and reliability under load.",
            &["system design", "databases", "observability"],
        ),
        role(
            "frontend-engineer",
            "Frontend Engineer",
            "User interfaces, accessibility and performance in the browser.",
            &["ui architecture", "accessibility", "performance"],
        ),
        role(
            "product-manager",
            "Product Manager",
            "Prioritisation, discovery and working with engineering.",
            &["prioritisation", "metrics", "stakeholders"],
        ),
        role(
            "data-scientist",
            "Data Scientist",
            "Experimentation, modelling and communicating results.",
            &["statistics", "experimentation", "communication"],
        ),
    ]
}

/// Looks up a role by id in `roles`.
pub fn find_role<'a>(roles: &'a [InterviewRole], id: &str) -> Result<&'a InterviewRole> {
    roles
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| PanelError::not_found("role", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_role() {
        let roles = default_roles();
        let role = find_role(&roles, "product-manager").unwrap();
        assert_eq!(role.title, "Product Manager");
    }

    #[test]
    fn test_find_unknown_role() {
        let roles = default_roles();
        let err = find_role(&roles, "astronaut").unwrap_err();
        assert!(err.is_not_found());
    }
}
