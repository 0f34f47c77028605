//! Collection query: relations to expand, equality filters and sort order.
//!
//! A [`Query`] is encoded as the query string the backend's collection
//! endpoint understands:
//!
//! | Builder call | Parameter |
//! |--------------|-----------|
//! | `with(["restaurant"])` | `relations=restaurant` |
//! | `filter("customer", "7")` | `customer_eq=7` |
//! | `order_by("createdAt", Direction::Desc)` | `orderBy=createdAt&order=DESC` |

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub relations: Vec<String>,
    pub filters: Vec<(String, String)>,
    pub order: Option<(String, Direction)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand the named relations inline instead of returning their ids.
    pub fn with<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relations.extend(relations.into_iter().map(Into::into));
        self
    }

    /// Keep only records whose `field` equals `value`.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((field.into(), direction));
        self
    }

    /// Query-string pairs in the backend's format.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !self.relations.is_empty() {
            params.push(("relations".to_string(), self.relations.join(",")));
        }
        for (field, value) in &self.filters {
            params.push((format!("{field}_eq"), value.clone()));
        }
        if let Some((field, direction)) = &self.order {
            params.push(("orderBy".to_string(), field.clone()));
            params.push(("order".to_string(), direction.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(Query::new().to_params().is_empty());
    }

    #[test]
    fn test_customer_orders_query() {
        let query = Query::new()
            .with(["restaurant"])
            .filter("customer", "7")
            .order_by("createdAt", Direction::Desc);

        assert_eq!(
            query.to_params(),
            vec![
                ("relations".to_string(), "restaurant".to_string()),
                ("customer_eq".to_string(), "7".to_string()),
                ("orderBy".to_string(), "createdAt".to_string()),
                ("order".to_string(), "DESC".to_string()),
            ]
        );
    }

    #[test]
    fn test_multiple_relations_are_comma_joined() {
        let query = Query::new().with(["restaurant", "courier"]);
        assert_eq!(
            query.to_params(),
            vec![("relations".to_string(), "restaurant,courier".to_string())]
        );
    }
}
