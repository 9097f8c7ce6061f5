use std::sync::Arc;

use legacy_session_core::{
    HookRegistry, HookResult, LegacyCookieRelay, RelayConfig, ResponseHeaders, SessionProperties,
    TreeHook,
};

/// Node configuration type the legacy cookie hook is normally attached to.
pub const SET_PERSISTENT_COOKIE_NODE: &str = "SetPersistentCookieNode";

/// Runs the tree hooks registered for the node that produced a login
/// decision.
pub struct HookEngine {
    config: Arc<RelayConfig>,
    registry: HookRegistry,
}

/// Builder for [`HookEngine`].
///
/// The configuration is validated once, in [`build`](Self::build).
pub struct HookEngineBuilder {
    config: RelayConfig,
    registry: HookRegistry,
}

impl HookEngineBuilder {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            registry: HookRegistry::new(),
        }
    }

    /// Attach a hook to a node configuration type.
    pub fn hook<H: TreeHook + 'static>(mut self, node_type: impl Into<String>, hook: H) -> Self {
        self.registry.register(node_type, Arc::new(hook));
        self
    }

    /// Attach a [`LegacyCookieRelay`] built from this builder's config.
    pub fn legacy_session_hook(self, node_type: impl Into<String>) -> Self {
        let relay = LegacyCookieRelay::new(self.config.clone());
        self.hook(node_type, relay)
    }

    pub fn build(self) -> HookResult<HookEngine> {
        self.config.validate()?;

        let engine = HookEngine {
            config: Arc::new(self.config),
            registry: self.registry,
        };
        engine.config.logger.debug(&format!(
            "Tree hooks registered for {:?}",
            engine.registry.node_types()
        ));
        Ok(engine)
    }
}

impl HookEngine {
    pub fn builder(config: RelayConfig) -> HookEngineBuilder {
        HookEngineBuilder::new(config)
    }

    /// Run the hooks attached to `node_type` against this request's session
    /// and response.
    pub fn after_login(
        &self,
        node_type: &str,
        session: &dyn SessionProperties,
        response: &mut dyn ResponseHeaders,
    ) -> HookResult<()> {
        let hooks = self.registry.hooks_for(node_type);
        if hooks.is_empty() {
            return Ok(());
        }

        self.config.logger.debug(&format!(
            "Running {} tree hook(s) for {}",
            hooks.len(),
            node_type
        ));

        self.registry
            .run(node_type, session, response)
            .inspect_err(|e| {
                self.config
                    .logger
                    .error(&format!("Tree hook failed for {}: {}", node_type, e));
            })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn node_types(&self) -> Vec<&str> {
        self.registry.node_types()
    }
}
