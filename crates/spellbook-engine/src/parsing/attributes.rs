//! Attribute fragment parsing for tag headers.
//!
//! `{% div .card .hover:shadow #intro hx-get="/items" @click='open = !open' %}`
//!
//! Scans run in a fixed order: `.class` shorthands, then the first `#id`,
//! then quoted `key="value"` pairs. Quoted values are masked before the
//! shorthand scans so a `.` or `#` inside a value never becomes a class or id.
//! Nothing here fails: text that matches no pattern contributes nothing.

use std::sync::OnceLock;

use regex::Regex;

use crate::markup::AttributeSet;

fn class_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.([\w:-]+)").expect("Invalid class regex"))
}

fn id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([\w-]+)").expect("Invalid id regex"))
}

fn pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([@:\w.-]+)=(?:"([^"]*)"|'([^']*)')"#).expect("Invalid attribute regex")
    })
}

/// Parse a raw attribute fragment into an [`AttributeSet`].
pub fn parse_attributes(fragment: &str) -> AttributeSet {
    let mut attrs = AttributeSet::new();

    let pairs: Vec<(&str, &str)> = pair_regex()
        .captures_iter(fragment)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
            Some((key, value))
        })
        .collect();
    let shorthand = mask_quoted_pairs(fragment);

    let classes: Vec<&str> = class_regex()
        .captures_iter(&shorthand)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if !classes.is_empty() {
        attrs.set("class", classes.join(" "));
    }

    if let Some(id) = id_regex().captures(&shorthand).and_then(|caps| caps.get(1)) {
        attrs.set("id", id.as_str());
    }

    for (key, value) in pairs {
        attrs.set(key, value);
    }

    attrs
}

/// Blank out every `key="value"` pair, keeping byte offsets intact.
fn mask_quoted_pairs(fragment: &str) -> String {
    pair_regex()
        .replace_all(fragment, |caps: &regex::Captures<'_>| {
            " ".repeat(caps.get(0).map_or(0, |m| m.as_str().len()))
        })
        .into_owned()
}
