//! Task categories, templates and the built-in catalog.

use super::error::GameError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fixed classification of a task, used for scoping and reward rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Math,
    Language,
    Logic,
    ColorHop,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Math,
        Category::Language,
        Category::Logic,
        Category::ColorHop,
    ];

    /// Stable string id (matches the catalog and CLI).
    pub fn id(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Language => "language",
            Self::Logic => "logic",
            Self::ColorHop => "colorhop",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Math => "Math Challenge",
            Self::Language => "Word Master",
            Self::Logic => "Logic Puzzle",
            Self::ColorHop => "Color Hop",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == needle)
            .ok_or_else(|| GameError::UnknownCategory(s.to_string()))
    }
}

/// A reusable task definition. Each handed-out [`Task`] is an instance of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: &'static str,
    pub category: Category,
    pub difficulty: u32,
}

/// Built-in task catalog. Never empty.
pub const TASK_CATALOG: &[TaskTemplate] = &[
    TaskTemplate {
        id: "math_easy_add",
        category: Category::Math,
        difficulty: 1,
    },
    TaskTemplate {
        id: "letter_find",
        category: Category::Language,
        difficulty: 1,
    },
    TaskTemplate {
        id: "logic_basic",
        category: Category::Logic,
        difficulty: 1,
    },
    TaskTemplate {
        id: "colorhop_basic",
        category: Category::ColorHop,
        difficulty: 1,
    },
];

/// A single problem instance presented to the player. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// `<template id>_<uuid>`; unique per instance.
    pub id: String,
    pub template_id: String,
    pub category: Category,
    pub difficulty: u32,
    pub timestamp: DateTime<Utc>,
}

impl Task {
    /// Instantiate a template with a fresh id and timestamp.
    pub fn from_template(template: &TaskTemplate) -> Self {
        Self {
            id: format!("{}_{}", template.id, Uuid::new_v4()),
            template_id: template.id.to_string(),
            category: template.category,
            difficulty: template.difficulty,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_catalog_ids() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Math ".parse::<Category>(), Ok(Category::Math));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert_eq!(
            "chess".parse::<Category>(),
            Err(GameError::UnknownCategory("chess".to_string()))
        );
    }

    #[test]
    fn test_catalog_covers_every_category() {
        assert!(!TASK_CATALOG.is_empty());
        for category in Category::ALL {
            assert!(TASK_CATALOG.iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn test_task_ids_keep_template_prefix_and_differ() {
        let template = &TASK_CATALOG[0];
        let a = Task::from_template(template);
        let b = Task::from_template(template);
        assert!(a.id.starts_with("math_easy_add_"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.template_id, b.template_id);
    }

    #[test]
    fn test_category_serializes_as_lowercase_id() {
        let json = serde_json::to_string(&Category::ColorHop).unwrap();
        assert_eq!(json, "\"colorhop\"");
    }
}
