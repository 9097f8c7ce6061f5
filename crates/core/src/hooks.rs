use std::collections::HashMap;
use std::sync::Arc;

use crate::error::HookResult;
use crate::session::SessionProperties;
use crate::types::ResponseHeaders;

/// Callback run by the host after an authentication decision is final.
///
/// The host supplies the session and the response of the current request.
/// Returning `Err` is reported back to the host; a hook that must never
/// interrupt the login flow absorbs its own failures and returns `Ok(())`.
pub trait TreeHook: Send + Sync {
    /// Hook name, used in logs and errors.
    fn name(&self) -> &'static str;

    fn accept(
        &self,
        session: &dyn SessionProperties,
        response: &mut dyn ResponseHeaders,
    ) -> HookResult<()>;
}

/// Tree hooks grouped by the node configuration type they belong to.
#[derive(Clone, Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Vec<Arc<dyn TreeHook>>>,
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (node_type, hooks) in &self.hooks {
            let names: Vec<_> = hooks.iter().map(|h| h.name()).collect();
            map.entry(node_type, &names);
        }
        map.finish()
    }
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook(mut self, node_type: impl Into<String>, hook: Arc<dyn TreeHook>) -> Self {
        self.register(node_type, hook);
        self
    }

    pub fn register(&mut self, node_type: impl Into<String>, hook: Arc<dyn TreeHook>) {
        self.hooks.entry(node_type.into()).or_default().push(hook);
    }

    /// Hooks registered for `node_type`, in registration order.
    pub fn hooks_for(&self, node_type: &str) -> &[Arc<dyn TreeHook>] {
        self.hooks.get(node_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registered node types, sorted.
    pub fn node_types(&self) -> Vec<&str> {
        let mut types: Vec<_> = self.hooks.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Run every hook registered for `node_type` in order.
    ///
    /// Stops at the first hook that fails and returns its error.
    pub fn run(
        &self,
        node_type: &str,
        session: &dyn SessionProperties,
        response: &mut dyn ResponseHeaders,
    ) -> HookResult<()> {
        for hook in self.hooks_for(node_type) {
            hook.accept(session, response)?;
        }
        Ok(())
    }
}
