use pretty_assertions::assert_eq;

use crate::prelude::*;

#[test]
fn plain_pattern_renders_brace_block() {
    let pattern = GraphPattern::new().add_triples([
        Triple::new("?person", "rdf:type", "ex:Person"),
        Triple::new("?person", "ex:hasName", "?name"),
    ]);

    let expected = "\
{
   ?person rdf:type ex:Person .
   ?person ex:hasName ?name .
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn optional_pattern_opens_with_optional() {
    let pattern =
        GraphPattern::optional().add_triple(Triple::new("?person", "ex:hasAge", "?age"));

    let expected = "\
OPTIONAL {
   ?person ex:hasAge ?age .
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn union_pattern_opens_on_two_lines() {
    let pattern = GraphPattern::union().add_triple(Triple::new("?x", "rdf:type", "ex:B"));

    let expected = "\
UNION
{
   ?x rdf:type ex:B .
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn nested_pattern_indents_one_level_deeper() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?person", "rdf:type", "ex:Person"))
        .add_nested_pattern(
            GraphPattern::optional().add_triple(Triple::new("?person", "ex:hasAge", "?age")),
        );

    let expected = "\
{
   ?person rdf:type ex:Person .
   OPTIONAL {
      ?person ex:hasAge ?age .
   }
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn union_of_two_alternatives() {
    let pattern = GraphPattern::new()
        .add_nested_pattern(GraphPattern::new().add_triple(Triple::new("?x", "rdf:type", "ex:A")))
        .add_nested_pattern(
            GraphPattern::union().add_triple(Triple::new("?x", "rdf:type", "ex:B")),
        );

    let expected = "\
{
   {
      ?x rdf:type ex:A .
   }
   UNION
   {
      ?x rdf:type ex:B .
   }
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn bindings_render_before_filters_regardless_of_insertion_order() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?person", "ex:hasAge", "?age"))
        .add_filter(Filter::new("?age > 30"))
        .add_binding(Binding::new("'John'@en", "?name"));

    let expected = "\
{
   ?person ex:hasAge ?age .
   BIND ('John'@en AS ?name)
   FILTER (?age > 30)
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn having_on_pattern_is_accepted_but_never_rendered() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?person", "ex:hasAge", "?age"))
        .add_having(Having::new("AVG(?age) > 20"));

    let text = pattern.render().unwrap();
    assert!(!text.contains("HAVING"));
}

#[test]
fn nested_select_is_wrapped_in_extra_braces() {
    let subquery = SelectQuery::new()
        .add_variables(["?person"])
        .set_where_pattern(
            GraphPattern::new().add_triple(Triple::new("?person", "rdf:type", "ex:Customer")),
        );

    let pattern = GraphPattern::new().add_nested_select(subquery);

    // The subquery renders at two extra levels, so its WHERE clause carries
    // the block's own indentation after the keyword, and the wrapping brace
    // closes on the subquery's final line.
    let expected = "\
{
   {
      SELECT ?person
      WHERE       {
         ?person rdf:type ex:Customer .
      }   }
}
";
    assert_eq!(pattern.render().unwrap(), expected);
}

#[test]
fn render_at_applies_outer_indentation() {
    let pattern = GraphPattern::new().add_triple(Triple::new("?s", "?p", "?o"));

    let expected = "\
      {
         ?s ?p ?o .
      }
";
    assert_eq!(pattern.render_at(2).unwrap(), expected);
}

#[test]
fn rendering_is_idempotent() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?s", "?p", "?o"))
        .add_nested_pattern(GraphPattern::optional());

    let first = pattern.render().unwrap();
    let second = pattern.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn braces_stay_balanced_in_composite_trees() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?a", "?b", "?c"))
        .add_nested_pattern(
            GraphPattern::optional()
                .add_triple(Triple::new("?c", "?d", "?e"))
                .add_nested_pattern(
                    GraphPattern::union().add_triple(Triple::new("?e", "?f", "?g")),
                ),
        )
        .add_filter(Filter::new("?g != ?a"));

    let text = pattern.render().unwrap();
    let opened = text.matches('{').count();
    let closed = text.matches('}').count();
    assert_eq!(opened, closed);
}

#[test]
fn depth_limit_fails_the_whole_render() {
    let mut pattern = GraphPattern::new().add_triple(Triple::new("?s", "?p", "?o"));
    for _ in 0..=MAX_RENDER_DEPTH {
        pattern = GraphPattern::new().add_nested_pattern(pattern);
    }

    let err = pattern.render().unwrap_err();
    assert!(matches!(err, RenderError::DepthLimitExceeded { .. }));
}

#[test]
fn entries_preserve_insertion_order() {
    let pattern = GraphPattern::new()
        .add_triple(Triple::new("?a", "?b", "?c"))
        .add_nested_pattern(GraphPattern::new())
        .add_triple(Triple::new("?d", "?e", "?f"));

    assert_eq!(pattern.len(), 3);
    assert!(matches!(pattern.entries()[0], PatternEntry::Triple(_)));
    assert!(matches!(pattern.entries()[1], PatternEntry::Pattern(_)));
    assert!(matches!(pattern.entries()[2], PatternEntry::Triple(_)));
}
