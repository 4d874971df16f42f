/// Builds a `Table`: `table!("users")` or `table!("users", "u")` for an aliased one.
#[macro_export]
macro_rules! table {
    ($name:expr) => {
        $crate::ast::table::Table::create($name)
    };
    ($name:expr, $alias:expr) => {
        $crate::ast::table::Table::aliased($name, $alias)
    };
}

/// Builds a `Column`: `column!("id")`, or `column!("users", "id")` qualified by a table.
#[macro_export]
macro_rules! column {
    ($name:expr) => {
        $crate::ast::column::Column::create($name)
    };
    ($table:expr, $name:expr) => {
        $crate::table!($table)
            .and_then(|table| $crate::ast::column::Column::qualified($name, table))
    };
}

/// Builds a `SimpleCondition` on a bare column: `condition!("age", ">", ":age")`.
#[macro_export]
macro_rules! condition {
    ($column:expr, $comparator:expr, $predicate:expr) => {
        $crate::ast::condition::SimpleCondition::create($column, $comparator, $predicate)
    };
}
