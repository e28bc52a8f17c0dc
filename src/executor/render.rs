//! Canonical query string rendering
//!
//! `SELECT <fields|*> FROM <collection>[ WHERE c1 AND c2 ...][ ORDER BY f ASC|DESC][ LIMIT n]`
//!
//! Field names, sort and limit are taken from the structured query as
//! given; WHERE clauses come from the compiled filter set.

use crate::planner::StructuredQuery;

/// Renders the canonical query string
pub fn render_query(collection: &str, query: &StructuredQuery, clauses: &[String]) -> String {
    let select = if query.fields.is_empty() {
        "*".to_string()
    } else {
        query.fields.join(", ")
    };

    let mut sql = format!("SELECT {} FROM {}", select, collection);

    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    if let Some(sort) = &query.sort {
        sql.push_str(&format!(" ORDER BY {} {}", sort.field, sort.order.keyword()));
    }

    if let Some(limit) = query.effective_limit() {
        sql.push_str(&format!(" LIMIT {}", limit));
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::SortSpec;

    #[test]
    fn test_select_all() {
        let query = StructuredQuery::new("everything");
        assert_eq!(render_query("products", &query, &[]), "SELECT * FROM products");
    }

    #[test]
    fn test_full_rendering() {
        let query = StructuredQuery::new("q")
            .with_fields(["product", "price"])
            .with_sort(SortSpec::desc("price"))
            .with_limit(10);
        let clauses = vec!["price > 500".to_string(), "region = 'Europe'".to_string()];

        assert_eq!(
            render_query("products", &query, &clauses),
            "SELECT product, price FROM products WHERE price > 500 AND region = 'Europe' ORDER BY price DESC LIMIT 10"
        );
    }

    #[test]
    fn test_unknown_fields_rendered_verbatim() {
        let query = StructuredQuery::new("q").with_fields(["id", "bogus"]);
        assert_eq!(render_query("products", &query, &[]), "SELECT id, bogus FROM products");
    }

    #[test]
    fn test_zero_limit_omitted() {
        let query = StructuredQuery::new("q").with_limit(0);
        assert_eq!(render_query("products", &query, &[]), "SELECT * FROM products");
    }
}
