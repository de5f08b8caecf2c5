//! Property-based tests for the response model
//!
//! These verify the derived fields stay consistent with the payload:
//! - `needs_more_info` is exactly "dialog present and not finished"
//! - A finished dialog never exposes prompt fields
//! - Removing an optional key only clears that attribute

use super::*;
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Finished".to_string()),
        Just("Question".to_string()),
        "[A-Z][a-z]{2,10}",
    ]
}

fn arb_dialog() -> impl Strategy<Value = Value> {
    (
        "[a-f0-9-]{8,36}",
        arb_status(),
        proptest::option::of("[a-zA-Z ?]{1,40}"),
        proptest::option::of("[a-z]{1,12}"),
        proptest::option::of("[a-z.]{1,20}"),
    )
        .prop_map(|(context_id, status, prompt, name, kind)| {
            let mut dialog = json!({"contextId": context_id, "status": status});
            if let Some(prompt) = prompt {
                dialog["prompt"] = json!(prompt);
            }
            if let Some(name) = name {
                dialog["parameterName"] = json!(name);
            }
            if let Some(kind) = kind {
                dialog["parameterType"] = json!(kind);
            }
            dialog
        })
}

fn arb_entity() -> impl Strategy<Value = Value> {
    ("[a-z]{1,10}", "[a-zA-Z]{1,10}", 0u64..100, any::<bool>()).prop_map(
        |(kind, text, start, with_resolution)| {
            let mut entity = json!({
                "type": kind,
                "entity": text.clone(),
                "startIndex": start,
                "endIndex": start + text.len() as u64 - 1,
                "score": 0.5
            });
            if with_resolution {
                entity["resolution"] = json!({"values": [text]});
            }
            entity
        },
    )
}

fn arb_action() -> impl Strategy<Value = Value> {
    ("[A-Za-z]{1,12}", any::<bool>()).prop_map(|(name, triggered)| {
        json!({"name": name, "triggered": triggered, "parameters": []})
    })
}

fn arb_intent() -> impl Strategy<Value = Value> {
    (
        "[A-Za-z]{1,12}",
        0.0f64..=1.0,
        proptest::option::of(proptest::collection::vec(arb_action(), 0..4)),
    )
        .prop_map(|(name, score, actions)| {
            let mut intent = json!({"intent": name, "score": score});
            if let Some(actions) = actions {
                intent["actions"] = Value::Array(actions);
            }
            intent
        })
}

fn arb_payload() -> impl Strategy<Value = Value> {
    (
        "[a-z ]{1,40}",
        arb_intent(),
        proptest::collection::vec(arb_intent(), 0..4),
        proptest::collection::vec(arb_entity(), 0..4),
        proptest::option::of(arb_dialog()),
    )
        .prop_map(|(query, top, intents, entities, dialog)| {
            let mut payload = json!({
                "query": query,
                "topScoringIntent": top,
                "intents": intents,
                "entities": entities
            });
            if let Some(dialog) = dialog {
                payload["dialog"] = dialog;
            }
            payload
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_payload_parses(payload in arb_payload()) {
        let response = Response::from_json(payload.clone()).unwrap();
        prop_assert_eq!(&response.query, payload["query"].as_str().unwrap());
        prop_assert_eq!(response.intents.len(), payload["intents"].as_array().unwrap().len());
        prop_assert_eq!(response.entities.len(), payload["entities"].as_array().unwrap().len());
        prop_assert_eq!(response.raw, payload);
    }

    #[test]
    fn prop_needs_more_info_matches_dialog(payload in arb_payload()) {
        let response = Response::from_json(payload).unwrap();
        let expected = match &response.dialog {
            Some(dialog) => dialog.status != DialogStatus::Finished,
            None => false,
        };
        prop_assert_eq!(response.needs_more_info(), expected);
        if response.needs_more_info() {
            prop_assert!(response.dialog.is_some());
        }
    }

    #[test]
    fn prop_finished_dialog_has_no_prompt(dialog in arb_dialog()) {
        let finished = dialog["status"] == "Finished";
        let dialog: Dialog = json::parse(&dialog, "dialog", "Response").unwrap();
        if finished {
            prop_assert!(dialog.prompt.is_none());
            prop_assert!(dialog.parameter_name.is_none());
            prop_assert!(dialog.parameter_type.is_none());
        }
    }

    #[test]
    fn prop_removing_dialog_only_clears_dialog(payload in arb_payload()) {
        let with = Response::from_json(payload.clone()).unwrap();
        let mut stripped = payload;
        stripped.as_object_mut().unwrap().remove("dialog");
        let without = Response::from_json(stripped).unwrap();

        prop_assert!(without.dialog.is_none());
        prop_assert!(!without.needs_more_info());
        prop_assert_eq!(with.query, without.query);
        prop_assert_eq!(with.top_scoring_intent, without.top_scoring_intent);
        prop_assert_eq!(with.intents, without.intents);
        prop_assert_eq!(with.entities, without.entities);
    }

    #[test]
    fn prop_triggered_action_is_first_triggered(intent in arb_intent()) {
        let expected = intent["actions"]
            .as_array()
            .and_then(|actions| actions.iter().find(|a| a["triggered"] == true))
            .map(|a| a["name"].as_str().unwrap().to_string());
        let intent: Intent = json::parse(&intent, "topScoringIntent", "Response").unwrap();
        prop_assert_eq!(intent.triggered_action().map(|a| a.name.clone()), expected);
    }
}
