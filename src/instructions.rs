use regex::Regex;
use std::sync::OnceLock;

use crate::markup::strip_tags;

fn blank_lines() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("valid blank line pattern"))
}

/// Line breaks and "N." step markers, with an optional "Step" label in front.
fn step_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\r?\n|(?i:\bstep\s*)?\d+\.").expect("valid step marker pattern")
    })
}

/// Splits a free-text instructions blob into discrete steps.
///
/// Markup is stripped, blank lines collapse, and the text is split on line
/// breaks and numbered markers such as `2.` or `Step 2.`. A dot followed by a
/// digit (`1.5 cups`) is a decimal and does not split. Fragments are trimmed
/// and empty ones dropped; order follows the source.
///
/// Returns `None` when there are no instructions at all.
pub fn normalize(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    let text = strip_tags(raw);
    let text = blank_lines().replace_all(&text, "\n");

    let mut steps = Vec::new();
    let mut last = 0;
    for marker in step_breaks().find_iter(&text) {
        let decimal = marker.as_str().ends_with('.')
            && text[marker.end()..].starts_with(|c: char| c.is_ascii_digit());
        if decimal {
            continue;
        }
        push_step(&mut steps, &text[last..marker.start()]);
        last = marker.end();
    }
    push_step(&mut steps, &text[last..]);

    Some(steps)
}

fn push_step(steps: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        steps.push(fragment.to_string());
    }
}
