use sparql_builder::prelude::*;

fn main() {
    // Build the WHERE pattern bottom-up: two triples plus an optional block.
    let optional = GraphPattern::optional()
        .add_triples([Triple::new("?person", "ex:hasAge", "?age")])
        .add_filter(Filter::new("?age > 30"));

    let pattern = GraphPattern::new()
        .add_triples([
            Triple::new("?person", "rdf:type", "ex:Person"),
            Triple::new("?person", "ex:hasName", "?name"),
        ])
        .add_nested_pattern(optional)
        .add_binding(Binding::new(
            IfClause::new(Bound::new("?age"), "?age", "32"),
            "?years",
        ));

    let query = SelectQuery::new()
        .distinct()
        .limit(1000)
        .add_prefix(Prefix::new("ex", "http://www.example.com#"))
        .add_variables(["?person", "?years"])
        .set_where_pattern(pattern)
        .add_group_by(GroupBy::new(["?person", "?age"]))
        .add_order_by(OrderBy::new([OrderTemplate::desc("?years")]));

    match query.render() {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("rendering failed: {err}"),
    }
}
