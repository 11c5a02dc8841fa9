//! PostgREST query builder
//!
//! Renders filters, ordering, and limits into URL query parameters.

/// A select query against one table
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    /// `column >= value`
    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("gte.{}", value.to_string())));
        self
    }

    /// `column < value`
    pub fn lt(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("lt.{}", value.to_string())));
        self
    }

    /// `column <= value`
    pub fn lte(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), format!("lte.{}", value.to_string())));
        self
    }

    /// Append an ordering term; earlier terms take precedence
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order.push(format!("{}.{}", column, direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query parameters in request order
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(self.filters.iter().cloned());

        if !self.order.is_empty() {
            params.push(("order".to_string(), self.order.join(",")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}
