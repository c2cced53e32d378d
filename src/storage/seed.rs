//! Startup fixtures for the in-memory stores

use super::in_memory::InMemoryStore;
use crate::core::entity::Resource;
use crate::core::validation::Submission;
use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Dishes and orders to load before serving, in listing order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Load fixtures from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse seed file {}", path.display()))
    }

    /// Load fixtures from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(yaml)?;
        Ok(seed)
    }

    /// Build one store per collection holding these fixtures
    ///
    /// Every fixture must pass the checks a client create would run.
    pub fn into_stores(self) -> Result<(InMemoryStore<Dish>, InMemoryStore<Order>)> {
        let dishes = InMemoryStore::with_entities(admitted(self.dishes)?)?;
        let orders = InMemoryStore::with_entities(admitted(self.orders)?)?;
        Ok((dishes, orders))
    }
}

fn admitted<T: Resource>(entities: Vec<T>) -> Result<Vec<T>> {
    let checks = T::create_checks();
    for entity in &entities {
        let data = serde_json::to_value(entity)?;
        checks
            .run(&Submission::new(Some(&data)))
            .with_context(|| format!("seeded {} {} is invalid", T::display_name(), entity.id()))?;
    }
    Ok(entities)
}
