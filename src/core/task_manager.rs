//! Randomized task selection scoped by category.

use super::error::GameError;
use super::task::{Category, Task, TaskTemplate, TASK_CATALOG};
use rand::seq::SliceRandom;
use rand::Rng;

/// Supplies a random task from the effective candidate set.
///
/// When a category scope is given but no template in the catalog matches it,
/// the manager falls back to the whole catalog so a session never runs dry.
#[derive(Debug, Clone)]
pub struct TaskManager {
    catalog: Vec<TaskTemplate>,
    scope: Option<Category>,
    candidates: Vec<TaskTemplate>,
}

impl TaskManager {
    /// Manager over the built-in catalog.
    pub fn new(scope: Option<Category>) -> Self {
        Self::build(TASK_CATALOG.to_vec(), scope)
    }

    /// Manager over a custom catalog. An empty catalog is rejected.
    pub fn with_catalog(
        catalog: Vec<TaskTemplate>,
        scope: Option<Category>,
    ) -> Result<Self, GameError> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self::build(catalog, scope))
    }

    fn build(catalog: Vec<TaskTemplate>, scope: Option<Category>) -> Self {
        let filtered: Vec<TaskTemplate> = match scope {
            Some(category) => catalog
                .iter()
                .filter(|t| t.category == category)
                .cloned()
                .collect(),
            None => catalog.clone(),
        };

        let candidates = if filtered.is_empty() {
            tracing::debug!(
                scope = ?scope,
                "no tasks in scope, falling back to full catalog"
            );
            catalog.clone()
        } else {
            filtered
        };

        Self {
            catalog,
            scope,
            candidates,
        }
    }

    pub fn scope(&self) -> Option<Category> {
        self.scope
    }

    pub fn catalog(&self) -> &[TaskTemplate] {
        &self.catalog
    }

    /// Templates a task may currently be drawn from (after scope fallback).
    pub fn candidates(&self) -> &[TaskTemplate] {
        &self.candidates
    }

    /// Templates eligible at `level`: difficulty at most `level`, or the
    /// easiest candidates when nothing qualifies.
    pub fn eligible(&self, level: u32) -> Vec<&TaskTemplate> {
        let within: Vec<&TaskTemplate> = self
            .candidates
            .iter()
            .filter(|t| t.difficulty <= level)
            .collect();
        if !within.is_empty() {
            return within;
        }

        let easiest = self
            .candidates
            .iter()
            .map(|t| t.difficulty)
            .min()
            .unwrap_or(0);
        self.candidates
            .iter()
            .filter(|t| t.difficulty == easiest)
            .collect()
    }

    /// Pick a template uniformly among the eligible ones and instantiate it.
    pub fn get_task<R: Rng>(&self, level: u32, rng: &mut R) -> Task {
        let eligible = self.eligible(level);
        // Candidates are never empty: catalogs are non-empty by construction.
        let template = eligible
            .choose(rng)
            .copied()
            .unwrap_or(&self.candidates[0]);
        Task::from_template(template)
    }
}
