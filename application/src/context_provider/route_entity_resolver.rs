//! Resolves the current entity of a given type from the active route.

use super::ContextProvider;
use crate::config::ContextSettings;
use crate::ports::entity_store::EntityStore;
use crate::ports::route_match::RouteMatchPort;
use std::sync::Arc;
use termgate_domain::{
    CacheMetadata, ContextDefinition, Entity, EntityTypeTag, ResolvedContext, RouteContext,
    RuntimeContexts,
};
use tracing::{debug, trace, warn};

/// Offers "current entity of type T" as a runtime context.
///
/// Every failure on the way (no route, no tagged parameter, malformed
/// declarations, unknown id, store error) produces an absent context.
pub struct RouteEntityResolver {
    store: Arc<dyn EntityStore>,
    route_match: Arc<dyn RouteMatchPort>,
    settings: ContextSettings,
}

impl RouteEntityResolver {
    pub fn new(store: Arc<dyn EntityStore>, route_match: Arc<dyn RouteMatchPort>) -> Self {
        Self {
            store,
            route_match,
            settings: ContextSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ContextSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ContextSettings {
        &self.settings
    }

    /// Resolve the entity of `entity_type` carried by `route`.
    ///
    /// The result always declares the configured cache context; a present
    /// result additionally carries the entity's cache tag.
    pub fn resolve(&self, route: Option<&RouteContext>, entity_type: &EntityTypeTag) -> ResolvedContext {
        let definition = ContextDefinition::for_entity(entity_type, self.settings.label.clone());
        let cacheability = CacheMetadata::new().with_context(self.settings.cache_context.clone());

        match self.load_entity(route, entity_type) {
            Some(entity) => {
                let cacheability = cacheability.with_tag(entity.cache_tag());
                ResolvedContext::present(definition, entity, cacheability)
            }
            None => ResolvedContext::absent(definition, cacheability),
        }
    }

    /// Same single-entry map as [`ContextProvider::available_contexts`]
    pub fn list_available(&self) -> RuntimeContexts {
        self.available_contexts()
    }

    fn load_entity(&self, route: Option<&RouteContext>, entity_type: &EntityTypeTag) -> Option<Entity> {
        let route = route?;

        let id = match route.entity_id(entity_type) {
            Ok(Some(id)) => id,
            Ok(None) => {
                trace!(route = %route.name, "No {} parameter on route", entity_type);
                return None;
            }
            Err(e) => {
                warn!(route = %route.name, "Ignoring malformed route declarations: {}", e);
                return None;
            }
        };

        match self.store.load(entity_type, &id) {
            Ok(Some(entity)) if entity.is_of_type(entity_type) => {
                debug!(route = %route.name, "Resolved {}", entity.cache_tag());
                Some(entity)
            }
            Ok(Some(entity)) => {
                warn!(
                    "Store returned {} when asked for {}:{}",
                    entity.cache_tag(),
                    entity_type,
                    id
                );
                None
            }
            Ok(None) => {
                debug!(route = %route.name, "No {} with id {}", entity_type, id);
                None
            }
            Err(e) => {
                warn!("Failed to load {}:{}: {}", entity_type, id, e);
                None
            }
        }
    }
}

impl ContextProvider for RouteEntityResolver {
    fn runtime_contexts(&self, unqualified_ids: &[&str]) -> RuntimeContexts {
        let route = self.route_match.current_route();
        let context = self.resolve(route.as_ref(), &self.settings.entity_type);

        let mut contexts = RuntimeContexts::new().with(self.settings.name.clone(), context);
        contexts.retain_named(unqualified_ids);
        contexts
    }

    fn available_contexts(&self) -> RuntimeContexts {
        let context = self.resolve(None, &self.settings.entity_type);
        RuntimeContexts::new().with(self.settings.name.clone(), context)
    }
}
