// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for list rendering.

#![allow(clippy::unwrap_used)]

use td_core::{Status, Todo};

use super::{render_list, render_todo, search_filter};

fn sample() -> Vec<Todo> {
    let mut a = Todo::new(1, "Buy milk");
    a.description = Some("two liters".to_string());
    let mut b = Todo::new(2, "Write report");
    b.status = Status::InProgress;
    b.priority = 3;
    b.tags = vec!["work".to_string()];
    vec![a, b]
}

#[test]
fn search_matches_name_case_insensitive() {
    let todos = sample();
    let hits = search_filter(&todos, "MILK");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn search_matches_description() {
    let todos = sample();
    let hits = search_filter(&todos, "liters");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn empty_search_matches_everything() {
    let todos = sample();
    assert_eq!(search_filter(&todos, "").len(), 2);
}

#[test]
fn search_with_no_hits_is_empty() {
    let todos = sample();
    assert!(search_filter(&todos, "zzz").is_empty());
}

#[test]
fn render_todo_includes_id_name_status() {
    let todos = sample();
    let out = render_todo(&todos[1], false);
    assert!(out.contains("#2"));
    assert!(out.contains("Write report"));
    assert!(out.contains("[in_progress]"));
    assert!(out.contains("priority: 3"));
    assert!(out.contains("tags: work"));
}

#[test]
fn render_list_empty_state() {
    let out = render_list(&[], None, false);
    assert_eq!(out, "No todos found\n");
}

#[test]
fn render_list_applies_search() {
    let todos = sample();
    let out = render_list(&todos, Some("report"), false);
    assert!(out.contains("Write report"));
    assert!(!out.contains("Buy milk"));
}

#[test]
fn render_without_colors_has_no_escapes() {
    let todos = sample();
    let out = render_list(&todos, None, false);
    assert!(!out.contains('\x1b'));
}
