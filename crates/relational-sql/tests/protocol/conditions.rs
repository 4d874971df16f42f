//! Construction and self-description of condition nodes

use relational_sql::{Comparator, Condition, SegmentError, SimpleCondition, column, condition, table};

#[test]
fn test_create_describes_itself() {
    let condition = SimpleCondition::create("age", ">", ":age").unwrap();

    assert_eq!(condition.to_string(), "age > :age");
}

#[test]
fn test_compare_matches_create() {
    let typed = SimpleCondition::compare("name", Comparator::Like, "'A%'").unwrap();
    let raw = SimpleCondition::create("name", "LIKE", "'A%'").unwrap();

    assert_eq!(typed.to_string(), raw.to_string());
    assert_eq!(typed.comparator(), "LIKE");
}

#[test]
fn test_qualified_expression_via_macros() -> Result<(), SegmentError> {
    let id = column!("users", "id")?;
    let condition = SimpleCondition::new(Box::new(id), "IN", "(:ids)");

    assert_eq!(condition.to_string(), "users.id IN (:ids)");
    assert_eq!(table!("users", "u")?.reference_name(), "u");
    Ok(())
}

#[test]
fn test_nested_description_has_no_parentheses() {
    let tree = condition!("a", "=", "1")
        .unwrap()
        .or(condition!("b", "=", "2").unwrap())
        .and(condition!("c", "=", "3").unwrap());

    assert_eq!(tree.to_string(), "a = 1 OR b = 2 AND c = 3");
}

#[test]
fn test_blank_column_is_a_typed_error() {
    let err = SimpleCondition::create(" ", ">", ":age").unwrap_err();

    assert!(matches!(err, SegmentError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: Column name must not be empty");
}

#[test]
fn test_comparator_and_predicate_are_not_validated() {
    let condition = SimpleCondition::create("flag", "", "").unwrap();

    assert_eq!(condition.to_string(), "flag  ");
    assert_eq!(condition.comparator(), "");
    assert_eq!(condition.predicate(), "");
}
