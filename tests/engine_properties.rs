//! Engine Property Tests
//!
//! Properties of validation, execution and rendering:
//! - Empty filters return every record unchanged
//! - Execution is repeatable
//! - Identical clauses render once
//! - Complexity is monotonic and clamped at 10
//! - Equality clauses are quoted, numeric clauses are not

use nlquery::dataset::{Dataset, Record, Row};
use nlquery::executor::{OrderingPolicy, QueryExecutor};
use nlquery::planner::{complexity_score, QueryValidator, SortSpec, StructuredQuery, MAX_COMPLEXITY};
use nlquery::schema::SchemaRegistry;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn two_records() -> Vec<Record> {
    serde_json::from_value(json!([
        {"id": 1, "product": "A", "category": "Software", "price": 600, "units_sold": 10, "region": "Europe", "date": "2024-01-01"},
        {"id": 2, "product": "B", "category": "Add-on", "price": 50, "units_sold": 500, "region": "Asia", "date": "2024-02-01"}
    ]))
    .unwrap()
}

fn executor() -> QueryExecutor {
    QueryExecutor::new(SchemaRegistry::products(), OrderingPolicy::Apply)
}

fn validator() -> QueryValidator {
    QueryValidator::new(SchemaRegistry::products())
}

// =============================================================================
// Filtering
// =============================================================================

/// No filters and no projection returns every record as loaded.
#[test]
fn test_empty_filters_return_all_records() {
    let dataset = Dataset::sample().unwrap();
    let records = dataset.snapshot();

    let result = executor().execute(&StructuredQuery::new("everything"), &records);

    assert_eq!(result.len(), records.len());
    for (row, record) in result.iter().zip(records.iter()) {
        assert_eq!(row, &Row::full(record));
    }
}

/// Unrecognized filters have no filtering effect.
#[test]
fn test_unrecognized_filter_is_always_true() {
    let query = StructuredQuery::new("q").with_filter("cheap stuff");
    let result = executor().execute(&query, &two_records());
    assert_eq!(result.len(), 2);
    assert_eq!(result.canonical_query, "SELECT * FROM products");
}

/// Numeric comparison against a text field never matches.
#[test]
fn test_numeric_filter_on_text_field_matches_nothing() {
    let query = StructuredQuery::new("q").with_filter("product > 1");
    let result = executor().execute(&query, &two_records());
    assert!(result.is_empty());
}

/// Loose equality: a numeric string equals a number.
#[test]
fn test_loose_equality_on_numbers() {
    let query = StructuredQuery::new("q").with_filter("price == '600'");
    let result = executor().execute(&query, &two_records());
    assert_eq!(result.len(), 1);
}

/// A literal past the f64 range compares as infinity.
#[test]
fn test_overflowing_literal_compares_as_infinity() {
    let below = StructuredQuery::new("q").with_filter("price < 1e999");
    assert_eq!(executor().execute(&below, &two_records()).len(), 2);

    let above = StructuredQuery::new("q").with_filter("price > 1e999");
    assert!(executor().execute(&above, &two_records()).is_empty());
}

// =============================================================================
// Determinism
// =============================================================================

/// Same query, same records: same rows and query string.
#[test]
fn test_execution_is_idempotent() {
    let dataset = Dataset::sample().unwrap();
    let records = dataset.snapshot();
    let query = StructuredQuery::new("q")
        .with_filter("region != 'Asia'")
        .with_filter("price > 100")
        .with_fields(["product", "price", "region"])
        .with_sort(SortSpec::desc("price"))
        .with_limit(5);

    let first = executor().execute(&query, &records);
    let second = executor().execute(&query, &records);

    assert_eq!(first.data, second.data);
    assert_eq!(first.canonical_query, second.canonical_query);
    assert_eq!(first.stats.complexity, second.stats.complexity);
}

// =============================================================================
// Rendering
// =============================================================================

/// A repeated filter contributes one WHERE fragment.
#[test]
fn test_duplicate_clauses_render_once() {
    let query = StructuredQuery::new("q")
        .with_filter("price > 500")
        .with_filter("price > 500");

    let result = executor().execute(&query, &two_records());

    assert_eq!(result.canonical_query, "SELECT * FROM products WHERE price > 500");
}

/// Equality renders quoted, numeric comparison renders bare.
#[test]
fn test_rendering_asymmetry() {
    let query = StructuredQuery::new("q")
        .with_filter("price > 500")
        .with_filter("region == 'Europe'");

    let result = executor().execute(&query, &two_records());

    assert_eq!(
        result.canonical_query,
        "SELECT * FROM products WHERE price > 500 AND region = 'Europe'"
    );
}

/// Sort and limit render from the query as given.
#[test]
fn test_render_order_by_and_limit() {
    let query = StructuredQuery::new("q")
        .with_fields(["product"])
        .with_sort(SortSpec::asc("units_sold"))
        .with_limit(1);

    let result = executor().execute(&query, &two_records());

    assert_eq!(
        result.canonical_query,
        "SELECT product FROM products ORDER BY units_sold ASC LIMIT 1"
    );
    assert_eq!(serde_json::to_value(&result.data).unwrap(), json!([{"product": "A"}]));
}

// =============================================================================
// Validation & Complexity
// =============================================================================

/// Complexity grows with filters and stops at 10.
#[test]
fn test_complexity_monotonic_and_clamped() {
    let filters = [
        "price > 500",
        "region == 'Europe'",
        "category == 'Software'",
        "units_sold < 100",
    ];

    let mut previous = 0.0;
    let mut query = StructuredQuery::new("q");
    for filter in filters {
        query = query.with_filter(filter);
        let score = complexity_score(&query, SchemaRegistry::products().field_count());
        assert!(score >= previous);
        previous = score;
    }

    let query = query.with_sort(SortSpec::desc("price")).with_limit(10);
    assert_eq!(validator().validate(&query).complexity, MAX_COMPLEXITY);
}

/// Unknown projected fields are named in an issue.
#[test]
fn test_unknown_fields_flagged() {
    let query = StructuredQuery::new("q").with_fields(["id", "bogus"]);
    let result = validator().validate(&query);

    assert!(!result.is_valid);
    assert_eq!(result.issues.len(), 1);
    assert!(result.issues[0].contains("bogus"));
    assert!(!result.issues[0].contains("id,"));
}

/// Operator-free filters are listed together in one issue.
#[test]
fn test_bad_filters_flagged_together() {
    let query = StructuredQuery::new("q")
        .with_filter("cheap")
        .with_filter("price > 1")
        .with_filter("recent");

    let result = validator().validate(&query);

    assert_eq!(result.issues, vec!["Some filters have invalid syntax: cheap, recent"]);
}

// =============================================================================
// End to End
// =============================================================================

/// Filter, project and render over two records.
#[test]
fn test_end_to_end_example() {
    let query = StructuredQuery::new("software over 500")
        .with_filter("price > 500")
        .with_filter("category == 'Software'")
        .with_fields(["product", "price"]);

    let validation = validator().validate(&query);
    let result = executor().execute(&query, &two_records());

    assert!(validation.is_valid);
    assert_eq!(
        serde_json::to_value(&result.data).unwrap(),
        json!([{"product": "A", "price": 600}])
    );
    assert_eq!(
        result.canonical_query,
        "SELECT product, price FROM products WHERE price > 500 AND category = 'Software'"
    );
    assert_eq!(result.stats.records_returned, 1);
}
