/// Configuration for index introspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectConfig {
    /// Fail instead of skipping indexes that resolve to no columns
    pub strict: bool,

    /// Look up operator classes to report non-default overrides
    pub resolve_operator_classes: bool,
}

impl Default for IntrospectConfig {
    fn default() -> Self {
        Self {
            strict: false,
            resolve_operator_classes: true,
        }
    }
}

impl IntrospectConfig {
    /// Create a new IntrospectConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unrepresentable indexes are an error
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether operator classes are resolved
    pub fn resolve_operator_classes(mut self, resolve: bool) -> Self {
        self.resolve_operator_classes = resolve;
        self
    }
}
