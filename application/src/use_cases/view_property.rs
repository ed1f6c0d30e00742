//! View property use case.
//!
//! Composes the detail view: a single record looked up by id, joined with
//! its agent from the directory. A missing id is a normal outcome
//! ([`PropertyView::NotFound`]), never a partial record or an error; a
//! missing agent only drops the agent panel, since agent data is
//! best-effort enrichment.

use silfira_domain::{Agent, Catalog, Property, PropertyId};
use std::sync::Arc;
use tracing::debug;

/// Outcome of a detail lookup.
#[derive(Debug)]
pub enum PropertyView<'a> {
    /// The record plus its agent, when the directory resolves the reference
    Found {
        property: &'a Property,
        agent: Option<&'a Agent>,
    },
    /// No record with the requested id; the view renders a "not found"
    /// state and offers navigation back to browsing
    NotFound,
}

impl<'a> PropertyView<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, PropertyView::Found { .. })
    }
}

/// Use case for the single-record detail view.
pub struct ViewPropertyUseCase {
    catalog: Arc<Catalog>,
}

impl ViewPropertyUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Look up `id` and join the referenced agent.
    pub fn execute(&self, id: &PropertyId) -> PropertyView<'_> {
        let Some(property) = self.catalog.get(id) else {
            debug!(%id, "detail lookup missed");
            return PropertyView::NotFound;
        };

        let agent = self.catalog.agents().get(&property.agent_id);
        if agent.is_none() {
            debug!(%id, agent_id = %property.agent_id, "agent reference unresolved");
        }

        PropertyView::Found { property, agent }
    }
}
