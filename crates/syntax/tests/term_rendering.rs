use pretty_assertions::assert_eq;
use sparql_syntax::prelude::*;

#[test]
fn triple_rendering() {
    let triple = Triple::new("?person", "rdf:type", "ex:Person");
    assert_eq!(triple.render(), "?person rdf:type ex:Person .\n");
}

#[test]
fn prefix_rendering() {
    let prefix = Prefix::new("foaf", "http://xmlns.com/foaf/0.1/");
    assert_eq!(prefix.render(), "PREFIX foaf: <http://xmlns.com/foaf/0.1/>\n");
}

#[test]
fn filter_rendering() {
    let filter = Filter::new("?age > 30");
    assert_eq!(filter.render(), "FILTER (?age > 30)");
}

#[test]
fn binding_with_raw_value() {
    let binding = Binding::new("'John'@en", "?name");
    assert_eq!(binding.render(), "BIND ('John'@en AS ?name)");
}

#[test]
fn binding_with_conditional_value() {
    let binding = Binding::new(
        IfClause::new(Bound::new("?age"), "?age", "32"),
        "?years",
    );
    assert_eq!(
        binding.render(),
        "BIND (IF (BOUND (?age), ?age, 32) AS ?years)"
    );
}

#[test]
fn nested_if_condition() {
    let inner = IfClause::new(Bound::new("?x"), "1", "0");
    let outer = IfClause::new(inner, "?a", "?b");
    assert_eq!(
        outer.render(),
        "IF (IF (BOUND (?x), 1, 0), ?a, ?b)"
    );
}

#[test]
fn group_by_rendering() {
    let group = GroupBy::new(["?person", "?age"]);
    assert_eq!(group.render(), "GROUP BY ?person ?age");
}

#[test]
fn having_rendering() {
    let having = Having::new("COUNT(?item) > 2");
    assert_eq!(having.render(), "HAVING (COUNT(?item) > 2)");
}

#[test]
fn order_by_rendering() {
    let order = OrderBy::new([
        OrderTemplate::asc("?name"),
        OrderTemplate::desc("?age"),
    ]);
    assert_eq!(order.render(), "ORDER BY ?name DESC(?age)");
}

#[test]
fn display_matches_render() {
    let triple = Triple::new("?s", "?p", "?o");
    assert_eq!(triple.to_string(), triple.render());

    let order = OrderBy::new([OrderTemplate::desc("?age")]);
    assert_eq!(order.to_string(), order.render());
}

#[test]
fn expression_serde_roundtrip() {
    let expression: Expression = IfClause::new(Bound::new("?age"), "?age", "32").into();
    let json = serde_json::to_string(&expression).unwrap();
    let back: Expression = serde_json::from_str(&json).unwrap();
    assert_eq!(back.render(), expression.render());
}
