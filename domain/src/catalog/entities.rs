//! Catalog entities
//!
//! A [`Catalog`] is the full, insertion-ordered sequence of property records
//! plus the agent directory, supplied once at startup by a loader. There is
//! no create/update/delete; every view the application derives from it is a
//! pure function of the catalog and the current criteria.

use crate::core::error::DomainError;
use crate::listing::entities::{Agent, Property};
use crate::listing::value_objects::{AgentId, PropertyId};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered directory of agents, looked up by id.
///
/// Lookup misses are valid: agent data is best-effort enrichment for the
/// detail view, so a property whose agent is absent simply renders without
/// an agent panel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentDirectory {
    agents: Vec<Agent>,
}

impl AgentDirectory {
    /// Build a directory preserving the given agent order.
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Look up an agent by id.
    pub fn get(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| &agent.id == id)
    }

    /// All agents, in directory order.
    pub fn all(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// The full immutable set of property records available to the engine.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    properties: Vec<Property>,
    agents: AgentDirectory,
}

impl Catalog {
    /// Build a catalog from loaded records.
    ///
    /// Fails with [`DomainError::DuplicateId`] when two records share an id;
    /// identity must be unique for the detail lookup to be well-defined.
    pub fn new(properties: Vec<Property>, agents: AgentDirectory) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.clone()) {
                return Err(DomainError::DuplicateId(property.id.to_string()));
            }
        }
        Ok(Self { properties, agents })
    }

    /// All records, in original insertion order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a record by id.
    pub fn get(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|property| &property.id == id)
    }

    /// The agent directory associated with this catalog.
    pub fn agents(&self) -> &AgentDirectory {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
