use lexnet_core::builder::LexGraphBuilder;
use lexnet_core::graph::*;
use lexnet_core::rel::{ConRel, EdgePolicy, LexRel};

fn make_unit(id: u32, synset: u32, sense: u32, form: &str) -> LexUnit {
    LexUnit::new(LexUnitId(id), SynsetId(synset), sense, form)
}

fn make_synset(id: u32, units: Vec<LexUnit>) -> Synset {
    Synset::new(SynsetId(id), WordCategory::Noun, WordClass::Artifact, units)
}

fn two_synset_builder() -> LexGraphBuilder {
    let mut builder = LexGraphBuilder::new();
    builder.register_synset(make_synset(1, vec![make_unit(10, 1, 1, "Bank")]));
    builder.register_synset(make_synset(2, vec![make_unit(11, 2, 1, "Geldinstitut")]));
    builder
}

#[test]
fn test_one_way_is_the_default_with_no_automatic_inverse() {
    let mut builder = two_synset_builder();
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    let graph = builder.finalize().unwrap();

    assert_eq!(
        graph.related_synsets(SynsetId(1), ConRel::HasHypernym),
        vec![SynsetId(2)]
    );
    assert!(
        graph
            .related_synsets(SynsetId(2), ConRel::HasHyponym)
            .is_empty()
    );
    assert!(
        graph
            .related_synsets(SynsetId(2), ConRel::HasHypernym)
            .is_empty()
    );
}

#[test]
fn test_symmetric_policy_round_trip() {
    let mut builder = two_synset_builder();
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::Symmetric,
    );
    let graph = builder.finalize().unwrap();

    let forward = graph.related_synsets(SynsetId(1), ConRel::HasHypernym);
    let backward = graph.related_synsets(SynsetId(2), ConRel::HasHypernym);
    assert_eq!(forward, vec![SynsetId(2)]);
    assert_eq!(backward, vec![SynsetId(1)]);
}

#[test]
fn test_inverse_policy_round_trip() {
    let mut builder = two_synset_builder();
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::InverseTo(ConRel::HasHyponym),
    );
    let graph = builder.finalize().unwrap();

    assert_eq!(
        graph.related_synsets(SynsetId(2), ConRel::HasHyponym),
        vec![SynsetId(1)]
    );
    assert!(
        graph
            .related_synsets(SynsetId(1), ConRel::HasHyponym)
            .is_empty()
    );
}

#[test]
fn test_unresolvable_endpoint_is_logged_and_skipped() {
    let mut builder = two_synset_builder();
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(99),
        EdgePolicy::OneWay,
    );
    builder.add_conceptual_relation(
        SynsetId(99),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );

    assert_eq!(builder.report().skipped_conceptual_relations, 2);

    // The load carries on; valid records still apply.
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    let graph = builder.finalize().unwrap();
    assert_eq!(
        graph.related_synsets(SynsetId(1), ConRel::HasHypernym),
        vec![SynsetId(2)]
    );
    assert_eq!(graph.metadata().conceptual_edges, 1);
    assert_eq!(graph.metadata().load.skipped_conceptual_relations, 2);
}

#[test]
fn test_all_related_synsets_unions_relation_types() {
    let mut builder = two_synset_builder();
    builder.register_synset(make_synset(3, vec![make_unit(12, 3, 1, "Gebäude")]));
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasComponentMeronym,
        SynsetId(3),
        EdgePolicy::OneWay,
    );
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::IsRelatedTo,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    let graph = builder.finalize().unwrap();

    let related = graph.all_related_synsets(SynsetId(1));
    assert_eq!(related.len(), 2);
    assert!(related.contains(&SynsetId(2)));
    assert!(related.contains(&SynsetId(3)));
}

#[test]
fn test_lexical_relations_are_independent_of_conceptual_ones() {
    let mut builder = two_synset_builder();
    builder.add_lexical_relation(
        LexUnitId(10),
        LexRel::HasAntonym,
        LexUnitId(11),
        EdgePolicy::Symmetric,
    );
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHypernym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    let graph = builder.finalize().unwrap();

    assert_eq!(
        graph.related_lex_units(LexUnitId(10), LexRel::HasAntonym),
        vec![LexUnitId(11)]
    );
    assert_eq!(
        graph.related_lex_units(LexUnitId(11), LexRel::HasAntonym),
        vec![LexUnitId(10)]
    );
    // The ID value 10 means nothing in the synset graph.
    assert!(graph.all_related_synsets(SynsetId(10)).is_empty());
}

#[test]
fn test_lexical_relation_with_unknown_unit_is_skipped() {
    let mut builder = two_synset_builder();
    builder.add_lexical_relation(
        LexUnitId(10),
        LexRel::HasSynonym,
        LexUnitId(99),
        EdgePolicy::OneWay,
    );

    assert_eq!(builder.report().skipped_lexical_relations, 1);
    let graph = builder.finalize().unwrap();
    assert!(
        graph
            .related_lex_units(LexUnitId(10), LexRel::HasSynonym)
            .is_empty()
    );
}

#[test]
fn test_related_synsets_empty_for_unknown_id() {
    let graph = two_synset_builder().finalize().unwrap();

    assert!(
        graph
            .related_synsets(SynsetId(42), ConRel::HasHypernym)
            .is_empty()
    );
    assert!(graph.all_related_synsets(SynsetId(42)).is_empty());
}

#[test]
fn test_repeated_insertion_keeps_both_edges_in_order() {
    let mut builder = two_synset_builder();
    builder.register_synset(make_synset(3, vec![make_unit(12, 3, 1, "Institut")]));
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHyponym,
        SynsetId(3),
        EdgePolicy::OneWay,
    );
    builder.add_conceptual_relation(
        SynsetId(1),
        ConRel::HasHyponym,
        SynsetId(2),
        EdgePolicy::OneWay,
    );
    let graph = builder.finalize().unwrap();

    assert_eq!(
        graph.related_synsets(SynsetId(1), ConRel::HasHyponym),
        vec![SynsetId(3), SynsetId(2)]
    );
}
