//! Base-form lookup for inflected words
//!
//! WordNet indexes lemmas only ("dog", "run"). Inflected input ("dogs",
//! "running") is reduced by first consulting the exception lists, then by
//! detaching known suffixes until a form present in the index turns up.

use rustc_hash::FxHashSet;

use super::wordnet::Pos;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => NOUN_RULES,
        Pos::Verb => VERB_RULES,
        Pos::Adj => ADJ_RULES,
        Pos::Adv => &[],
    }
}

/// One round of suffix detachment over every form
fn detach(forms: &[String], pos: Pos) -> Vec<String> {
    let mut out = Vec::new();
    for form in forms {
        for (suffix, replacement) in rules(pos) {
            if let Some(stem) = form.strip_suffix(suffix) {
                out.push(format!("{stem}{replacement}"));
            }
        }
    }
    out
}

/// Keep forms that are indexed, dropping duplicates but preserving order
fn indexed(forms: Vec<String>, in_index: &impl Fn(&str) -> bool) -> Vec<String> {
    let mut seen = FxHashSet::default();
    forms
        .into_iter()
        .filter(|f| in_index(f.as_str()) && seen.insert(f.clone()))
        .collect()
}

/// Candidate lemmas for `word` (already lowercased) under one part of speech
///
/// `exceptions` holds the irregular base forms listed for the word, if any;
/// `in_index` reports whether a form is a known lemma for `pos`.
pub fn base_forms(
    word: &str,
    pos: Pos,
    exceptions: Option<&[String]>,
    in_index: impl Fn(&str) -> bool,
) -> Vec<String> {
    if let Some(bases) = exceptions {
        let mut forms = vec![word.to_string()];
        forms.extend(bases.iter().cloned());
        return indexed(forms, &in_index);
    }

    let mut forms = detach(&[word.to_string()], pos);
    let mut candidates = vec![word.to_string()];
    candidates.extend(forms.iter().cloned());
    let found = indexed(candidates, &in_index);
    if !found.is_empty() {
        return found;
    }

    // Every rule shortens or rewrites a suffix, so this terminates.
    while !forms.is_empty() {
        forms = detach(&forms, pos);
        let found = indexed(forms.clone(), &in_index);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}
