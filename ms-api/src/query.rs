//! OData query construction.
//!
//! Filters are built as a small expression tree and rendered once, so call
//! sites never format `$filter` strings by hand. Values are inserted verbatim
//! between single quotes; they are not escaped, so callers must not pass
//! untrusted text containing `'`.

use std::fmt;

/// Entity property names used in filters and ordering.
pub mod field {
    pub const NAME: &str = "Name";
    pub const TITLE: &str = "Title";
    pub const PARENT_FOLDER_ID: &str = "ParentFolderId";
    pub const RECORDER_ID: &str = "RecorderId";
}

/// An OData `$filter` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `Field eq 'value'`
    Eq { field: String, value: String },
    /// `startswith(Field, 'prefix')`
    StartsWith { field: String, prefix: String },
    /// Clauses joined with `and`.
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: &str, value: &str) -> Self {
        Filter::Eq {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn starts_with(field: &str, prefix: &str) -> Self {
        Filter::StartsWith {
            field: field.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// Conjunction of `self` and `other`, flattening nested conjunctions.
    #[must_use]
    pub fn and(self, other: Filter) -> Self {
        let mut clauses = match self {
            Filter::And(clauses) => clauses,
            single => vec![single],
        };
        match other {
            Filter::And(more) => clauses.extend(more),
            single => clauses.push(single),
        }
        Filter::And(clauses)
    }

    /// Render to the OData text form.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Eq { field, value } => write!(f, "{field} eq '{value}'"),
            Filter::StartsWith { field, prefix } => write!(f, "startswith({field}, '{prefix}')"),
            Filter::And(clauses) => {
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{clause}")?;
                }
                Ok(())
            }
        }
    }
}

/// A GET against a resource collection with OData query options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedRequest {
    resource: String,
    filter: Option<Filter>,
    order_by: Option<String>,
    top: Option<usize>,
    skip: usize,
    select: Option<String>,
}

impl PagedRequest {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            filter: None,
            order_by: None,
            top: None,
            skip: 0,
            select: None,
        }
    }

    /// One page of `resource`: the full set of paging options at once.
    pub fn paged(
        resource: impl Into<String>,
        filter: Option<Filter>,
        order_by: Option<&str>,
        page_size: usize,
        skip: usize,
    ) -> Self {
        Self {
            resource: resource.into(),
            filter,
            order_by: order_by.map(str::to_string),
            top: Some(page_size),
            skip,
            select: None,
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: &str) -> Self {
        self.order_by = Some(field.to_string());
        self
    }

    #[must_use]
    pub fn top(mut self, page_size: usize) -> Self {
        self.top = Some(page_size);
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// `$select` projection, e.g. "full" for presentations.
    #[must_use]
    pub fn select(mut self, projection: &str) -> Self {
        self.select = Some(projection.to_string());
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Query string pairs in OData order. `$skip` is omitted when zero.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(("$filter", filter.render()));
        }
        if let Some(order_by) = self.order_by.as_deref().filter(|o| !o.is_empty()) {
            pairs.push(("$orderby", order_by.to_string()));
        }
        if let Some(top) = self.top {
            pairs.push(("$top", top.to_string()));
        }
        if self.skip > 0 {
            pairs.push(("$skip", self.skip.to_string()));
        }
        if let Some(select) = &self.select {
            pairs.push(("$select", select.clone()));
        }
        pairs
    }
}

/// `Collection('id')` entity path.
pub fn entity_path(collection: &str, id: &str) -> String {
    format!("{collection}('{id}')")
}
