use std::collections::HashSet;

/// The set of field names the user asked for, plus whether `--show` was
/// supplied at all.
///
/// Omitting `--show` entirely means "show everything"; supplying it (even as
/// an empty string) restricts output to the listed fields. The `explicit`
/// flag, not set emptiness, is what distinguishes the two.
#[derive(Debug, Clone, Default)]
pub struct FieldSelection {
    fields: HashSet<String>,
    explicit: bool,
}

impl FieldSelection {
    /// Parse the raw `--show` value. `None` means the flag was absent.
    ///
    /// Tokens are split on commas, trimmed, lower-cased, and kept as-is:
    /// unknown tokens are inert rather than rejected.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let fields = raw
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            fields,
            explicit: true,
        }
    }

    pub fn explicit(&self) -> bool {
        self.explicit
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }
}
