// ABOUTME: Integration tests for leaderboard extraction over a full page fixture.
// ABOUTME: Covers section lookup, nested provider rows, score normalization and payload JSON shape.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use topboard_scrape::{build_log, build_payload, build_payload_with, BuildOptions, Entry, Section};

fn score_row(rank: u32, name: &str, value: &str) -> String {
    format!(
        r#"<div class="flex items-center justify-between gap-3">
             <div class="flex items-center gap-2 min-w-0 flex-1">
               <span class="w-5 text-muted">{rank}</span>
               <a class="truncate" href="/models/{rank}">{name}</a>
             </div>
             <span class="font-mono text-sm tabular-nums">{value}</span>
           </div>"#
    )
}

fn provider_row(rank: u32, name: &str, value: &str) -> String {
    format!(
        r#"<div class="flex items-center justify-between">
             <div class="flex items-center gap-2 min-w-0 flex-1">
               <span class="w-5">{rank}</span>
               <div class="flex items-center gap-2 min-w-0 flex-1">
                 <img src="/logos/p{rank}.svg" alt="">
                 <span class="truncate">{name}</span>
               </div>
             </div>
             <span class="tabular-nums">{value}</span>
           </div>"#
    )
}

fn card(title: &str, rows: &[String]) -> String {
    format!(
        r#"<div class="rounded-xl border bg-card p-6">
             <div class="flex items-center gap-2 mb-4"><h3 class="font-semibold">{title}</h3></div>
             <div class="space-y-3">{}</div>
           </div>"#,
        rows.join("\n")
    )
}

fn page() -> String {
    let cards = [
        card(
            "Best LLM - Code",
            &[
                score_row(1, "GPT-5", "92.3"),
                score_row(2, "Claude X", "90.1"),
            ],
        ),
        card(
            "Best Multimodal LLM",
            &[
                score_row(1, "Gemini 2.5 Pro", "82%"),
                score_row(2, "Mystery", "n/a"),
                score_row(3, "o3", "81.6%"),
            ],
        ),
        card(
            "Best LLM - Knowledge",
            &(1..=7)
                .map(|i| score_row(i, &format!("Model {}", i), &format!("{}.0", 90 - i)))
                .collect::<Vec<_>>(),
        ),
        card(
            "Longest Context Model",
            &[score_row(1, "Llama 4 Scout", "10M"), score_row(2, "Gemini", "2M")],
        ),
        card(
            "Cheapest API Provider",
            &[provider_row(1, "Provider A", "$0.01")],
        ),
    ];
    format!(
        "<!DOCTYPE html><html><head><title>LLM Leaderboard</title></head><body><main class=\"grid\">{}</main></body></html>",
        cards.join("\n")
    )
}

const SOURCE: &str = "https://llm-stats.com/";

#[test]
fn test_full_page_sections() {
    let now = Utc.with_ymd_and_hms(2025, 8, 14, 6, 0, 0).unwrap();
    let payload = build_payload(&page(), SOURCE, now);

    assert_eq!(payload.source, SOURCE);
    assert_eq!(payload.last_updated, "2025-08-14T06:00:00Z");

    assert_eq!(
        serde_json::to_value(&payload.code).unwrap(),
        json!([
            {"name": "GPT-5", "score": 92.3},
            {"name": "Claude X", "score": 90.1}
        ])
    );

    // non-numeric benchmark value is dropped
    let names: Vec<_> = payload.multimodal.iter().map(Entry::name).collect();
    assert_eq!(names, vec!["Gemini 2.5 Pro", "o3"]);
    assert_eq!(payload.multimodal[1].score(), Some(81.6));

    assert_eq!(payload.knowledge.len(), 5);
    assert_eq!(payload.knowledge[0].name(), "Model 1");

    assert_eq!(payload.longest_context[0].value(), Some("10M"));

    assert_eq!(
        serde_json::to_value(&payload.cheapest).unwrap(),
        json!([{"name": "Provider A", "value": "$0.01"}])
    );

    // absent heading -> empty list, not an error
    assert!(payload.fastest.is_empty());
}

#[test]
fn test_section_invariants() {
    let payload = build_payload(&page(), SOURCE, Utc::now());
    for section in Section::ALL {
        let entries = payload.section(section);
        assert!(entries.len() <= 5, "{} has {} entries", section, entries.len());
        for e in entries {
            assert!(!e.name().is_empty());
            if section.is_benchmark() {
                let score = e.score().expect("benchmark entry has a score");
                assert!(score.is_finite());
            } else {
                assert!(e.value().is_some());
            }
        }
    }
    assert!(payload.last_updated.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&payload.last_updated).is_ok());
}

#[test]
fn test_payload_json_key_order() {
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let payload = build_payload("<html><body></body></html>", SOURCE, now);
    let text = serde_json::to_string(&payload).unwrap();
    assert_eq!(
        text,
        r#"{"source":"https://llm-stats.com/","last_updated":"2025-01-02T03:04:05Z","code":[],"multimodal":[],"knowledge":[],"longest_context":[],"cheapest":[],"fastest":[]}"#
    );
}

#[test]
fn test_same_html_same_payload() {
    let html = page();
    let a = build_payload(&html, SOURCE, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let b = build_payload(&html, SOURCE, Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap());
    assert_ne!(a.last_updated, b.last_updated);

    let mut b = b;
    b.last_updated = a.last_updated.clone();
    assert_eq!(
        serde_json::to_string_pretty(&a).unwrap(),
        serde_json::to_string_pretty(&b).unwrap()
    );
}

#[test]
fn test_split_name_across_page() {
    let html = card(
        "Best LLM - Code",
        &[r#"<div class="justify-between"><div class="min-w-0 flex-1"><a>GPT</a></div><span class="tabular-nums">5 74.9</span></div>"#.to_string()],
    );
    let payload = build_payload(&html, SOURCE, Utc::now());
    assert_eq!(payload.code.len(), 1);
    assert_eq!(payload.code[0].name(), "GPT-5");
    assert_eq!(payload.code[0].score(), Some(5.0));
}

#[test]
fn test_build_log_counts() {
    let now = Utc.with_ymd_and_hms(2025, 8, 14, 6, 0, 0).unwrap();
    let payload = build_payload(&page(), SOURCE, now);
    let log = build_log(&payload, SOURCE, now);
    assert_eq!(
        serde_json::to_value(&log).unwrap(),
        json!({
            "fetched_from": SOURCE,
            "utc": "2025-08-14T06:00:00Z",
            "counts": {
                "code": 2, "multimodal": 2, "knowledge": 5,
                "longest_context": 2, "cheapest": 1, "fastest": 0
            }
        })
    );
}

#[test]
fn test_table_only_when_requested() {
    let html = r#"<table><thead><tr><th>Organization</th><th>Model</th></tr></thead>
                  <tbody><tr><td><img src="/logos/anthropic.svg"></td><td>Claude</td></tr></tbody></table>"#;
    let now = Utc::now();

    let plain = build_payload(html, SOURCE, now);
    assert!(plain.table.is_none());
    assert!(!serde_json::to_string(&plain).unwrap().contains("\"table\""));

    let with = build_payload_with(html, SOURCE, now, BuildOptions { with_table: true });
    let table = with.table.expect("table requested");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].organization, "Anthropic");
    assert_eq!(table[0].model, "Claude");
}
