//! Turning free-form CSV text into Rust identifiers.
//
//  Words are split on anything that isn't alphanumeric and on case
//  boundaries:
//
//      "maxHP"        -> max, hp
//      "HeavyStrike"  -> heavy, strike
//      "HTTPServer"   -> http, server
//      "Mana Cost"    -> mana, cost
//
//  Digits stay attached to the word before them ("Rank2" -> rank2).

/// Every keyword `rustc` rejects as a plain identifier (strict + reserved).
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

fn words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in text.split(|c: char| !c.is_ascii_alphanumeric()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = c.is_ascii_uppercase()
                && match prev {
                    Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                    // end of an acronym: "HTTPServer" splits before the `S`
                    Some(p) if p.is_ascii_uppercase() => {
                        next.is_some_and(|n| n.is_ascii_lowercase())
                    }
                    _ => false,
                };
            if boundary && !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            current.push(c.to_ascii_lowercase());
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

fn fix_leading_digit(mut ident: String) -> String {
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.contains(&ident)
}

/// `"Mana Cost"` -> `mana_cost`. Keywords get a trailing `_`.
/// Returns `None` when the text has no usable characters.
pub fn snake_case(text: &str) -> Option<String> {
    let words = words(text);
    if words.is_empty() {
        return None;
    }
    let mut ident = fix_leading_digit(words.join("_"));
    if is_keyword(&ident) {
        ident.push('_');
    }
    Some(ident)
}

/// `"Heavy Strike"` -> `HEAVY_STRIKE`.
pub fn screaming_snake(text: &str) -> Option<String> {
    let words = words(text);
    if words.is_empty() {
        return None;
    }
    Some(fix_leading_digit(words.join("_").to_ascii_uppercase()))
}

/// `"fire spells"` -> `FireSpells`.
pub fn pascal_case(text: &str) -> Option<String> {
    let words = words(text);
    if words.is_empty() {
        return None;
    }
    let ident: String = words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    let ident = fix_leading_digit(ident);
    if is_keyword(&ident) {
        return Some(ident + "_");
    }
    Some(ident)
}

/// Default record type for a module: `spells` -> `Spell`.
pub fn singular_type_name(module: &str) -> Option<String> {
    let pascal = pascal_case(module)?;
    match pascal.strip_suffix('s') {
        Some(stem) if !stem.is_empty() && !stem.ends_with('s') => Some(stem.to_string()),
        _ => Some(pascal),
    }
}
