//! Property tests for annotation and link regeneration

use aihsr_mapping::tables::{SUBCATEGORY_PHASES, SUBCATEGORY_TECH_TYPES};
use aihsr_mapping::{
    annotate_controls, generate_mitigation_links, regenerate_links, CatalogDocument,
    TraceabilityDocument,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn subcategory() -> impl Strategy<Value = Option<String>> {
    let known: Vec<String> = SUBCATEGORY_PHASES.iter().map(|(k, _)| k.to_string()).collect();
    prop_oneof![
        Just(None),
        prop::sample::select(known).prop_map(Some),
        "[a-z]{3,8}-[0-9]\\.[0-9]".prop_map(Some),
    ]
}

fn control() -> impl Strategy<Value = Value> {
    (
        subcategory(),
        prop::collection::vec("phase-[1-3]", 0..3),
        prop::collection::vec("[a-z-]{2,10}", 0..3),
    )
        .prop_map(|(subcategory, phases, tech_types)| {
            let mut record = json!({ "phases": phases, "techTypes": tech_types });
            if let (Some(id), Some(map)) = (subcategory, record.as_object_mut()) {
                map.insert("subcategoryId".to_string(), Value::String(id));
            }
            record
        })
}

fn link() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("mitigation"), Just("trigger"), Just("regulation")],
        "[a-z0-9-]{1,12}",
    )
        .prop_map(|(kind, id)| json!({ "id": id, "type": kind, "from": {}, "to": {} }))
}

proptest! {
    #[test]
    fn annotation_is_idempotent(controls in prop::collection::vec(control(), 0..20)) {
        let mut doc = CatalogDocument::from_value(json!({ "controls": controls })).unwrap();
        let first = annotate_controls(&mut doc);
        let once = doc.clone().into_value();
        let second = annotate_controls(&mut doc);

        prop_assert_eq!(doc.into_value(), once);
        prop_assert_eq!(second.changed, 0);
        prop_assert_eq!(second.updated, first.updated);
    }

    #[test]
    fn mapped_controls_match_tables(controls in prop::collection::vec(control(), 0..20)) {
        let mut doc = CatalogDocument::from_value(json!({ "controls": controls.clone() })).unwrap();
        let report = annotate_controls(&mut doc);

        let with_id = controls.iter().filter(|c| c.get("subcategoryId").is_some()).count();
        prop_assert_eq!(report.updated, with_id);

        for (record, original) in doc.controls().iter().zip(&controls) {
            match record.subcategory_id() {
                Some(id) => {
                    match SUBCATEGORY_PHASES.get(id) {
                        Some(phases) => prop_assert_eq!(record.phases(), phases.to_vec()),
                        None => prop_assert_eq!(&Value::from(record.clone()), original),
                    }
                    if let Some(types) = SUBCATEGORY_TECH_TYPES.get(id) {
                        prop_assert_eq!(record.tech_types(), types.to_vec());
                    }
                }
                None => prop_assert_eq!(&Value::from(record.clone()), original),
            }
        }
    }

    #[test]
    fn link_count_and_order(links in prop::collection::vec(link(), 0..30)) {
        let kept: Vec<Value> = links.iter().filter(|l| l["type"] != "mitigation").cloned().collect();
        let mut doc = TraceabilityDocument::from_value(json!({ "links": links })).unwrap();

        let report = regenerate_links(&mut doc);

        prop_assert_eq!(doc.links().len(), kept.len() + 101);
        prop_assert_eq!(&doc.links()[..kept.len()], &kept[..]);
        prop_assert_eq!(report.retained, kept.len());
    }

    #[test]
    fn generated_ids_have_no_gaps(
        table in prop::collection::vec(
            ("[a-z]{1,6}", prop::collection::vec("[a-z]{1,6}", 0..6)),
            0..12,
        )
    ) {
        let borrowed: Vec<(String, Vec<&str>)> = table
            .iter()
            .map(|(risk, subs)| (risk.clone(), subs.iter().map(String::as_str).collect()))
            .collect();
        let pairs = borrowed.iter().map(|(risk, subs)| (risk.as_str(), subs.as_slice()));

        let links = generate_mitigation_links(pairs);

        let expected: usize = table.iter().map(|(_, subs)| subs.len()).sum();
        prop_assert_eq!(links.len(), expected);
        for (i, link) in links.iter().enumerate() {
            prop_assert_eq!(&link.id, &format!("control-cat-{}", i + 1));
        }
    }
}
