//! Filter expression parser and predicate evaluation
//!
//! A filter is a single binary comparison `<field> <op> <value>` with
//! `op` one of `==`, `!=`, `>`, `<`. Operators are detected in exactly that
//! order and the first token present wins, so `a > b == c` parses as an
//! equality. Expressions without any operator token are kept as
//! `Unrecognized` and never filter anything out.

use std::fmt;

use crate::dataset::{coerce_number, Record};
use crate::schema::Field;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Loose equality
    Eq,
    /// Loose inequality
    NotEq,
    /// Numeric greater-than
    Gt,
    /// Numeric less-than
    Lt,
}

impl Operator {
    /// Order in which operator tokens are searched for
    pub const DETECTION_ORDER: [Operator; 4] =
        [Operator::Eq, Operator::NotEq, Operator::Gt, Operator::Lt];

    /// Token as written in filter expressions
    pub fn token(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
        }
    }

    /// Returns true for the numeric operators
    pub fn is_numeric(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Lt)
    }

    /// First operator whose token occurs in `expr`
    pub fn detect(expr: &str) -> Option<Operator> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|op| expr.contains(op.token()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A parsed `<field> <op> <value>` comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Comparison {
    /// Canonical clause fragment.
    ///
    /// Equality renders quoted (`region = 'Europe'`), numeric comparisons
    /// unquoted (`price > 500`).
    pub fn clause_text(&self) -> String {
        match self.operator {
            Operator::Eq => format!("{} = '{}'", self.field, self.value),
            Operator::NotEq => format!("{} != '{}'", self.field, self.value),
            Operator::Gt | Operator::Lt => format!("{} {} {}", self.field, self.operator, self.value),
        }
    }

    /// Evaluates the comparison against a record.
    ///
    /// A field the record does not have equals nothing, so only `!=` holds
    /// for it. Numeric comparisons are false when either side is not a
    /// number.
    pub fn matches(&self, record: &Record) -> bool {
        let Some(field) = Field::from_name(&self.field) else {
            return self.operator == Operator::NotEq;
        };
        let actual = record.value(field);

        match self.operator {
            Operator::Eq => actual.loose_eq(&self.value),
            Operator::NotEq => !actual.loose_eq(&self.value),
            Operator::Gt | Operator::Lt => {
                let (Some(a), Some(b)) = (actual.as_number(), coerce_number(&self.value)) else {
                    return false;
                };
                if self.operator == Operator::Gt {
                    a > b
                } else {
                    a < b
                }
            }
        }
    }
}

/// A parsed filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr {
    Comparison(Comparison),
    /// No operator token found; matches every record
    Unrecognized(String),
}

impl FilterExpr {
    /// Parses one filter expression. Never fails.
    pub fn parse(expr: &str) -> FilterExpr {
        let Some(operator) = Operator::detect(expr) else {
            return FilterExpr::Unrecognized(expr.to_string());
        };

        // Only the text between the first and second operator token is the value
        let mut parts = expr.split(operator.token());
        let field = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();

        let (field, value) = if operator.is_numeric() {
            (field.trim().to_string(), value.trim().to_string())
        } else {
            (strip_quotes(field.trim()), strip_quotes(value.trim()))
        };

        FilterExpr::Comparison(Comparison {
            field,
            operator,
            value,
        })
    }

    /// Clause fragment; `None` for unrecognized expressions
    pub fn clause_text(&self) -> Option<String> {
        match self {
            FilterExpr::Comparison(cmp) => Some(cmp.clause_text()),
            FilterExpr::Unrecognized(_) => None,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            FilterExpr::Comparison(cmp) => cmp.matches(record),
            FilterExpr::Unrecognized(_) => true,
        }
    }
}

/// Returns true if `expr` contains any operator token
pub fn has_operator(expr: &str) -> bool {
    Operator::detect(expr).is_some()
}

fn strip_quotes(s: &str) -> String {
    s.chars().filter(|c| *c != '\'' && *c != '"').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(price: f64, region: &str) -> Record {
        serde_json::from_value(json!({
            "id": 1,
            "product": "A",
            "category": "Software",
            "price": price,
            "units_sold": 10,
            "region": region,
            "date": "2024-01-01"
        }))
        .unwrap()
    }

    fn comparison(expr: &str) -> Comparison {
        match FilterExpr::parse(expr) {
            FilterExpr::Comparison(cmp) => cmp,
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_equality_strips_quotes() {
        let cmp = comparison("region == 'Europe'");
        assert_eq!(cmp.field, "region");
        assert_eq!(cmp.operator, Operator::Eq);
        assert_eq!(cmp.value, "Europe");
    }

    #[test]
    fn test_parse_double_quotes() {
        assert_eq!(comparison("region != \"Asia\"").value, "Asia");
    }

    #[test]
    fn test_parse_numeric_keeps_raw_value() {
        let cmp = comparison("  price   >   500 ");
        assert_eq!(cmp.field, "price");
        assert_eq!(cmp.operator, Operator::Gt);
        assert_eq!(cmp.value, "500");
    }

    #[test]
    fn test_detection_order_equality_first() {
        // `>` inside the value loses to `==`
        let cmp = comparison("product == 'a>b'");
        assert_eq!(cmp.operator, Operator::Eq);
        assert_eq!(cmp.value, "a>b");

        let cmp = comparison("price > 5 == x");
        assert_eq!(cmp.operator, Operator::Eq);
        assert_eq!(cmp.field, "price > 5");
    }

    #[test]
    fn test_detection_order_not_equal_before_less_than() {
        assert_eq!(Operator::detect("a != <b"), Some(Operator::NotEq));
        assert_eq!(Operator::detect("a >= 3"), Some(Operator::Gt));
        assert_eq!(Operator::detect("a <= 3"), Some(Operator::Lt));
    }

    #[test]
    fn test_only_first_value_segment_is_used() {
        assert_eq!(comparison("a == b == c").value, "b");
    }

    #[test]
    fn test_unrecognized() {
        let expr = FilterExpr::parse("price is high");
        assert_eq!(expr, FilterExpr::Unrecognized("price is high".into()));
        assert!(expr.matches(&record(1.0, "Asia")));
        assert_eq!(expr.clause_text(), None);
        assert!(!has_operator("price is high"));
    }

    #[test]
    fn test_clause_text_asymmetry() {
        assert_eq!(comparison("price > 500").clause_text(), "price > 500");
        assert_eq!(comparison("price < 20").clause_text(), "price < 20");
        assert_eq!(comparison("region == 'Europe'").clause_text(), "region = 'Europe'");
        assert_eq!(comparison("region != 'Asia'").clause_text(), "region != 'Asia'");
    }

    #[test]
    fn test_loose_equality_on_numbers() {
        assert!(comparison("price == '600'").matches(&record(600.0, "Europe")));
        assert!(comparison("id == 1").matches(&record(600.0, "Europe")));
    }

    #[test]
    fn test_numeric_comparisons() {
        let r = record(600.0, "Europe");
        assert!(comparison("price > 500").matches(&r));
        assert!(!comparison("price < 500").matches(&r));
        assert!(!comparison("price > 600").matches(&r));
    }

    #[test]
    fn test_numeric_comparison_on_text_is_false() {
        let r = record(600.0, "Europe");
        assert!(!comparison("region > 5").matches(&r));
        assert!(!comparison("date < 3000").matches(&r));
        assert!(!comparison("price > abc").matches(&r));
    }

    #[test]
    fn test_unknown_field() {
        let r = record(600.0, "Europe");
        assert!(!comparison("color == 'red'").matches(&r));
        assert!(comparison("color != 'red'").matches(&r));
        assert!(!comparison("weight > 1").matches(&r));
    }
}
