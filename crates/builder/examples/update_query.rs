use sparql_builder::prelude::*;

fn main() {
    // Rewrite every matched age to a fixed value.
    let query = UpdateQuery::new()
        .add_prefix(Prefix::new("ex", "http://www.example.com#"))
        .set_delete_pattern(
            GraphPattern::new().add_triple(Triple::new("?person", "ex:hasAge", "?age")),
        )
        .set_insert_pattern(
            GraphPattern::new().add_triple(Triple::new("?person", "ex:hasAge", "32")),
        )
        .set_where_pattern(
            GraphPattern::new().add_triples([
                Triple::new("?person", "ex:hasAge", "?age"),
                Triple::new("?person", "ex:hasName", "'John'"),
            ]),
        );

    match query.render() {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("rendering failed: {err}"),
    }
}
