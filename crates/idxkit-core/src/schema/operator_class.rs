/// A row of the operator-class catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorClass {
    /// Name of the operator class, e.g. `text_pattern_ops`
    pub name: String,

    /// When `true`, this is the default class for the indexed column's type
    pub is_default: bool,
}

impl OperatorClass {
    pub fn new(name: impl Into<String>, is_default: bool) -> Self {
        Self {
            name: name.into(),
            is_default,
        }
    }
}
