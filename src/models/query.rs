// ============================================================================
// QUERY - Petición de filas a una tabla (select / filtros / orden)
// ============================================================================

use crate::utils::links::encode_query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn asc(column: &'static str) -> Self {
        Self { column, ascending: true }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self { column, ascending: false }
    }
}

/// Filtro de igualdad (`columna=eq.valor`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub table: &'static str,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn order(mut self, order: Option<Order>) -> Self {
        self.order = order;
        self
    }

    /// Query string PostgREST: `select=*&col=eq.val&order=col.asc`
    pub fn to_query_string(&self) -> String {
        let filters: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|f| (f.column.clone(), format!("eq.{}", f.value)))
            .collect();
        let order = self.order.map(|o| {
            format!("{}.{}", o.column, if o.ascending { "asc" } else { "desc" })
        });

        let mut pairs: Vec<(&str, &str)> = vec![("select", "*")];
        pairs.extend(filters.iter().map(|(c, v)| (c.as_str(), v.as_str())));
        if let Some(ref order) = order {
            pairs.push(("order", order.as_str()));
        }
        encode_query(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_select_asks_for_every_column() {
        assert_eq!(Query::table("divisions").to_query_string(), "select=*");
    }

    #[test]
    fn filters_and_order_follow_postgrest_syntax() {
        let query = Query::table("profiles")
            .eq("id", "abc-123")
            .order(Some(Order::asc("name")));
        assert_eq!(query.to_query_string(), "select=*&id=eq.abc-123&order=name.asc");

        let query = Query::table("news").order(Some(Order::desc("published_at")));
        assert_eq!(query.to_query_string(), "select=*&order=published_at.desc");
    }
}
