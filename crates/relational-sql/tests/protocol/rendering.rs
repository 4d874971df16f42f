//! SQL rendering through the visitor protocol

use std::any::Any;
use std::fmt;

use relational_sql::{
    Column, Condition, DialectKind, Expression, Postgres, RenderError, RenderSettings, Segment,
    SegmentError, SimpleCondition, SqlRenderer, Table, Visitable, Visitor, render, walk,
};

use crate::common::init_tracing;

#[test]
fn test_render_with_settings_from_json() {
    init_tracing();
    let settings = RenderSettings::from_json(r#"{ "dialect": "postgres" }"#).unwrap();
    let users = Table::aliased("users", "u").unwrap();
    let tree = SimpleCondition::new(Box::new(Column::qualified("age", users).unwrap()), ">", ":age")
        .and(SimpleCondition::create("name", "LIKE", ":name").unwrap());

    let sql = render(&tree, &settings).unwrap();

    assert_eq!(sql, r#"("u"."age" > :age AND "name" LIKE :name)"#);
}

#[test]
fn test_render_three_way_or_mysql() {
    let tree = SimpleCondition::create("a", "=", "1")
        .unwrap()
        .or(SimpleCondition::create("b", "=", "2").unwrap())
        .or(SimpleCondition::create("c", "=", "3").unwrap());

    let sql = render(&tree, &RenderSettings::new(DialectKind::MySql)).unwrap();

    assert_eq!(sql, "((`a` = 1 OR `b` = 2) OR `c` = 3)");
}

#[test]
fn test_render_dyn_condition() {
    let tree: Box<dyn Condition> = Box::new(SimpleCondition::create("age", ">", ":age").unwrap());

    let sql = render(tree.as_ref(), &RenderSettings::default()).unwrap();

    assert_eq!(sql, r#""age" > :age"#);
}

#[test]
fn test_renderer_is_reusable_per_tree() {
    let condition = SimpleCondition::create("age", ">", ":age").unwrap();

    let first = {
        let mut renderer = SqlRenderer::new(&Postgres);
        condition.visit(&mut renderer).unwrap();
        renderer.finish()
    };
    let second = render(&condition, &RenderSettings::new(DialectKind::Postgres)).unwrap();

    assert_eq!(first, second);
}

/// Segment kinds the renderer does not know about surface as a visitor error.
#[derive(Debug)]
struct Raw(String);

impl Visitable for Raw {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |_| Ok(()))
    }
}

impl Segment for Raw {
    fn kind(&self) -> &'static str {
        "Raw"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expression for Raw {}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[test]
fn test_unknown_segment_rejected() {
    init_tracing();
    let condition =
        SimpleCondition::new(Box::new(Raw("LOWER(name)".to_string())), "=", ":name");

    let err = render(&condition, &RenderSettings::default()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<RenderError>(),
        Some(RenderError::UnsupportedSegment(kind)) if kind == "Raw"
    ));
}
