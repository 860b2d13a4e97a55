//! Safe dynamic filter construction for list endpoints
//!
//! List endpoints accept an open bag of optional query parameters. Each
//! recognized, non-empty parameter contributes exactly one predicate fragment
//! and one bound argument; absent parameters contribute nothing. Fragment
//! templates are fixed in code and user values only ever travel through the
//! bound-argument list, so no user text is ever interpolated into SQL.
//!
//! Callers invoke the builder methods in a fixed declared order (not the
//! arrival order of the query string), which keeps the generated SQL
//! deterministic and testable.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// A value bound to one placeholder in a filter predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterArg {
    Text(String),
    Int(i64),
}

/// An assembled filter: predicate fragments positionally aligned 1:1 with
/// their bound arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    fragments: Vec<String>,
    args: Vec<FilterArg>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments, always equal to the number of bound arguments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn args(&self) -> &[FilterArg] {
        &self.args
    }

    /// The `WHERE` clause for this filter, with fragments joined by `AND`.
    /// An empty filter yields an empty string (select-all semantics), never a
    /// vacuous always-true predicate.
    pub fn where_clause(&self) -> String {
        if self.fragments.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.fragments.join(" AND "))
        }
    }

    /// Attach the bound arguments to a runtime query, left to right, matching
    /// the placeholders emitted by the builder.
    pub fn bind_to<'q, O>(
        &'q self,
        mut query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        for arg in &self.args {
            query = match arg {
                FilterArg::Text(value) => query.bind(value.as_str()),
                FilterArg::Int(value) => query.bind(*value),
            };
        }
        query
    }
}

/// Builds a [`Filter`] from optional named inputs.
///
/// Placeholders are numbered `$1..$n` in the order fragments are appended.
#[derive(Debug, Default)]
pub struct FilterBuilder {
    filter: Filter,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, fragment: String, arg: FilterArg) {
        self.filter.fragments.push(fragment);
        self.filter.args.push(arg);
    }

    fn next_placeholder(&self) -> usize {
        self.filter.args.len() + 1
    }

    /// Substring match against a free-text column. The value is wrapped in
    /// `%` wildcards and bound; absent or empty values contribute nothing.
    pub fn contains(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let fragment = format!("{} LIKE ${}", column, self.next_placeholder());
            self.push(fragment, FilterArg::Text(format!("%{value}%")));
        }
        self
    }

    /// Exact match against an integer identifier column.
    pub fn equals(mut self, column: &str, value: Option<i64>) -> Self {
        if let Some(value) = value {
            let fragment = format!("{} = ${}", column, self.next_placeholder());
            self.push(fragment, FilterArg::Int(value));
        }
        self
    }

    /// Ambiguous parameter: if the text parses as an integer, emit an exact
    /// match on `id_column` with the parsed value bound; otherwise emit a
    /// substring match on `text_column` with the raw text bound.
    pub fn equals_or_contains(self, id_column: &str, text_column: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            None => self,
            Some(value) => match value.parse::<i64>() {
                Ok(id) => self.equals(id_column, Some(id)),
                Err(_) => self.contains(text_column, Some(value)),
            },
        }
    }

    pub fn build(self) -> Filter {
        self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs_yields_no_clause() {
        let filter = FilterBuilder::new()
            .contains("events.name", None)
            .contains("events.description", Some(""))
            .build();
        assert!(filter.is_empty());
        assert_eq!(filter.where_clause(), "");
        assert_eq!(filter.args().len(), 0);
    }

    #[test]
    fn test_one_argument_per_fragment() {
        let filter = FilterBuilder::new()
            .contains("events.name", Some("Jazz"))
            .contains("events.description", None)
            .contains("events.location", Some("Plaza"))
            .equals("categories.id", Some(3))
            .build();
        assert_eq!(filter.len(), filter.args().len());
        assert_eq!(filter.len(), 3);
        assert_eq!(
            filter.where_clause(),
            "WHERE events.name LIKE $1 AND events.location LIKE $2 AND categories.id = $3"
        );
        assert_eq!(
            filter.args(),
            &[
                FilterArg::Text("%Jazz%".to_string()),
                FilterArg::Text("%Plaza%".to_string()),
                FilterArg::Int(3),
            ]
        );
    }

    #[test]
    fn test_user_text_never_lands_in_the_predicate() {
        let hostile = "x'; DROP TABLE events; --";
        let filter = FilterBuilder::new()
            .contains("events.name", Some(hostile))
            .build();
        assert!(!filter.where_clause().contains(hostile));
        assert_eq!(
            filter.args(),
            &[FilterArg::Text(format!("%{hostile}%"))]
        );
    }

    #[test]
    fn test_ambiguous_parameter_integer_probe() {
        let filter = FilterBuilder::new()
            .equals_or_contains("categories.id", "categories.name", Some("3"))
            .build();
        assert_eq!(filter.where_clause(), "WHERE categories.id = $1");
        assert_eq!(filter.args(), &[FilterArg::Int(3)]);

        let filter = FilterBuilder::new()
            .equals_or_contains("categories.id", "categories.name", Some("music"))
            .build();
        assert_eq!(filter.where_clause(), "WHERE categories.name LIKE $1");
        assert_eq!(filter.args(), &[FilterArg::Text("%music%".to_string())]);
    }

    #[test]
    fn test_identical_input_builds_identical_output() {
        let build = || {
            FilterBuilder::new()
                .contains("events.name", Some("Jazz"))
                .equals_or_contains("categories.id", "categories.name", Some("3"))
                .build()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_placeholders_number_left_to_right() {
        let filter = FilterBuilder::new()
            .contains("a", Some("1"))
            .contains("b", Some("2"))
            .contains("c", Some("3"))
            .build();
        assert_eq!(filter.where_clause(), "WHERE a LIKE $1 AND b LIKE $2 AND c LIKE $3");
    }
}
