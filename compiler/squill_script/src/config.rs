//! Script formatting configuration.

/// Configuration for the script formatter.
///
/// The remote function namespace is configuration rather than a
/// hardcoded literal so tests and alternative scripting backends can
/// swap it; the default is the engine's conventional `{sql}` utility
/// namespace, substituted server-side.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScriptConfig {
    namespace: String,
}

impl ScriptConfig {
    pub fn new(namespace: impl Into<String>) -> Self {
        ScriptConfig {
            namespace: namespace.into(),
        }
    }

    /// The prefix remote function calls are qualified with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        ScriptConfig::new("{sql}")
    }
}
