mod engine;

pub use engine::{HookEngine, HookEngineBuilder, SET_PERSISTENT_COOKIE_NODE};
