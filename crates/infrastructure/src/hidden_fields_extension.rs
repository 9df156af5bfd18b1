use std::collections::BTreeSet;

use userlookup_application::{ProjectedUserRecord, UserRecordExtension};
use userlookup_domain::{RequestContext, User};

/// Record extension removing a fixed set of fields from every record.
#[derive(Debug, Clone, Default)]
pub struct HiddenFieldsExtension {
    fields: BTreeSet<String>,
}

impl HiddenFieldsExtension {
    /// Creates an extension hiding the given field names.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list of field names, ignoring blanks.
    #[must_use]
    pub fn from_list(value: &str) -> Self {
        Self::new(
            value
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty()),
        )
    }

    /// Returns whether no field would be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl UserRecordExtension for HiddenFieldsExtension {
    fn apply(
        &self,
        mut record: ProjectedUserRecord,
        _user: &User,
        _context: RequestContext,
    ) -> ProjectedUserRecord {
        for field in &self.fields {
            record.remove(field);
        }

        record
    }
}
