//! # Query Fragment Builder
//!
//! Pure string composition for SQL fragments: WHERE, IN, ORDER BY, GROUP BY
//! and LIMIT/OFFSET, with positional `$n` parameter bookkeeping.
//!
//! Each function takes a source query (a complete or partial SELECT) and
//! returns a new query string. Functions that introduce parameters take the
//! current parameter position and report the next free one; the caller
//! supplies argument values aligned to that numbering at execution time.
//! ORDER BY and GROUP BY are identifier-only and never parameterized.

use crate::model::PageInfo;

/// An ORDER BY entry: a column identifier and its direction.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// Appends `<keyword> "<field>" = $n <logic> "<field>" = $n+1 ...`,
/// numbering placeholders from `start_param`. Returns the new query and the
/// next free parameter position.
pub fn add_where_clause(
    query: &str,
    fields: &[&str],
    start_param: usize,
    keyword: &str,
    logic: &str,
) -> (String, usize) {
    let clauses: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| format!("\"{}\" = ${}", field, start_param + i))
        .collect();
    (
        format!("{} {} {}", query, keyword, clauses.join(&format!(" {} ", logic))),
        start_param + fields.len(),
    )
}

/// Appends `<keyword> ("<field>" IN ($n, $n+1, ...))` with `value_count`
/// bound placeholders numbered from `start_param`. Returns the new query and
/// the next free parameter position.
///
/// The IN list binds placeholders rather than inlining literals; the caller
/// appends one argument per placeholder in order.
pub fn add_in_clause(
    query: &str,
    value_count: usize,
    field: &str,
    keyword: &str,
    start_param: usize,
) -> (String, usize) {
    let placeholders: Vec<String> = (0..value_count)
        .map(|i| format!("${}", start_param + i))
        .collect();
    (
        format!(
            "{} {} (\"{}\" IN ({}))",
            query,
            keyword,
            field,
            placeholders.join(", ")
        ),
        start_param + value_count,
    )
}

/// Appends `ORDER BY` over quoted identifiers, with `DESC` per field when
/// requested. Adds no parameters.
pub fn add_order_by_clause(query: &str, fields: &[OrderBy]) -> String {
    let clauses: Vec<String> = fields
        .iter()
        .map(|order| {
            if order.descending {
                format!("\"{}\" DESC", order.field)
            } else {
                format!("\"{}\"", order.field)
            }
        })
        .collect();
    format!("{} ORDER BY {}", query, clauses.join(", "))
}

/// Appends `GROUP BY` over quoted identifiers. Adds no parameters.
pub fn add_group_clause(query: &str, fields: &[&str]) -> String {
    let clauses: Vec<String> = fields.iter().map(|f| format!("\"{}\"", f)).collect();
    format!("{} GROUP BY {}", query, clauses.join(", "))
}

/// Appends `LIMIT $n` / `OFFSET $n` only for pager fields that are present,
/// numbering from `start_param`. An absent field means no clause at all, not
/// a zero value. Returns the new query and the argument values to append.
pub fn add_pagination_clause(
    query: &str,
    pager: &PageInfo,
    start_param: usize,
) -> (String, Vec<i64>) {
    let mut dst = query.to_string();
    let mut args = Vec::new();
    let mut param = start_param;

    if let Some(limit) = pager.limit {
        dst.push_str(&format!(" LIMIT ${}", param));
        args.push(limit);
        param += 1;
    }

    if let Some(offset) = pager.offset {
        dst.push_str(&format!(" OFFSET ${}", param));
        args.push(offset);
    }

    (dst, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "select aircraft_code, range from bookings.aircrafts_data";

    #[test]
    fn test_where_clause_single_field() {
        let (query, next) = add_where_clause(BASE, &["aircraft_code"], 1, "WHERE", "AND");
        assert_eq!(
            query,
            "select aircraft_code, range from bookings.aircrafts_data WHERE \"aircraft_code\" = $1"
        );
        assert_eq!(next, 2);
    }

    #[test]
    fn test_where_clause_numbers_from_start_param() {
        let (query, next) = add_where_clause(BASE, &["a", "b"], 3, "AND", "OR");
        assert!(query.ends_with("AND \"a\" = $3 OR \"b\" = $4"));
        assert_eq!(next, 5);
    }

    #[test]
    fn test_in_clause_placeholders() {
        let (query, next) = add_in_clause(BASE, 3, "aircraft_code", "WHERE", 1);
        assert!(query.ends_with("WHERE (\"aircraft_code\" IN ($1, $2, $3))"));
        assert_eq!(next, 4);
    }

    #[test]
    fn test_in_clause_continues_numbering() {
        let (query, next) = add_in_clause(BASE, 2, "code", "AND", 4);
        assert!(query.ends_with("AND (\"code\" IN ($4, $5))"));
        assert_eq!(next, 6);
    }

    #[test]
    fn test_order_by_clause() {
        let query = add_order_by_clause(BASE, &[OrderBy::asc("code"), OrderBy::desc("range")]);
        assert!(query.ends_with("ORDER BY \"code\", \"range\" DESC"));
    }

    #[test]
    fn test_group_clause() {
        let query = add_group_clause(BASE, &["aircraft_code", "fare_conditions"]);
        assert!(query.ends_with("GROUP BY \"aircraft_code\", \"fare_conditions\""));
    }

    #[test]
    fn test_pagination_both_present() {
        let pager = PageInfo {
            limit: Some(20),
            offset: Some(40),
        };
        let (query, args) = add_pagination_clause(BASE, &pager, 1);
        assert!(query.ends_with(" LIMIT $1 OFFSET $2"));
        assert_eq!(args, vec![20, 40]);
    }

    #[test]
    fn test_pagination_absent_means_no_clause() {
        let pager = PageInfo {
            limit: None,
            offset: None,
        };
        let (query, args) = add_pagination_clause(BASE, &pager, 1);
        assert_eq!(query, BASE);
        assert!(args.is_empty());
    }

    #[test]
    fn test_pagination_offset_only() {
        let pager = PageInfo {
            limit: None,
            offset: Some(5),
        };
        let (query, args) = add_pagination_clause(BASE, &pager, 1);
        assert!(!query.contains("LIMIT"));
        assert!(query.ends_with(" OFFSET $1"));
        assert_eq!(args, vec![5]);
    }

    #[test]
    fn test_composition_is_associative_in_effect() {
        // Composing in one pass and replaying stored intermediates must
        // produce identical SQL text.
        let pager = PageInfo {
            limit: Some(10),
            offset: Some(2),
        };

        let (step1, next) = add_where_clause(BASE, &["aircraft_code"], 1, "WHERE", "AND");
        let step2 = add_order_by_clause(&step1, &[OrderBy::asc("aircraft_code")]);
        let (stored, _) = add_pagination_clause(&step2, &pager, next);

        let (one_pass, _) = add_pagination_clause(
            &add_order_by_clause(
                &add_where_clause(BASE, &["aircraft_code"], 1, "WHERE", "AND").0,
                &[OrderBy::asc("aircraft_code")],
            ),
            &pager,
            next,
        );

        assert_eq!(stored, one_pass);
    }

    #[test]
    fn test_parameter_alignment_across_builders() {
        // The Nth placeholder in the text must correspond to the Nth argument
        // position handed out by the builders.
        let (query, next) = add_in_clause(BASE, 2, "aircraft_code", "WHERE", 1);
        let pager = PageInfo {
            limit: Some(10),
            offset: None,
        };
        let (query, args) = add_pagination_clause(&query, &pager, next);

        assert!(query.contains("IN ($1, $2)"));
        assert!(query.ends_with("LIMIT $3"));
        assert_eq!(args.len(), 1);
    }
}
