// ============================================================
// Layer 4 — Lemmatizer
// ============================================================
// Reduces a lower-cased word to its dictionary base form.
//
// The approach is dictionary-checked morphology:
//
//   1. A word that is already a known base form is returned as is.
//   2. Irregular forms are looked up directly ("went" → "go").
//   3. Suffix rules for nouns then verbs are tried in order
//      ("policies" → "policy", "returned" → "return"), also
//      undoubling a final consonant ("shipping" → "ship").
//      The first candidate that is a known base form wins.
//   4. Anything else is returned unchanged.
//
// Every result is either the input or a base form, and a base
// form maps to itself, so lemmatizing twice changes nothing.
//
// There are deliberately no adjective rules: "better" stays
// "better" rather than becoming "good".
//
// Reference: Rust Book §8 (Strings, Hash Maps)

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// (suffix, replacement) pairs for plural nouns.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// (suffix, replacement) pairs for inflected verbs.
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

/// The fixed word list the lemmatizer checks candidates against.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Known dictionary base forms
    bases: HashSet<String>,

    /// Irregular inflected form → base form
    irregular: HashMap<String, String>,
}

impl Lexicon {
    /// An empty lexicon. The lemmatizer then returns every word unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base form.
    pub fn add_base(&mut self, word: &str) {
        self.bases.insert(word.to_lowercase());
    }

    /// Register an irregular form. Its base is registered too,
    /// so every irregular target is itself a base form.
    pub fn add_irregular(&mut self, inflected: &str, base: &str) {
        let base = base.to_lowercase();
        self.bases.insert(base.clone());
        self.irregular.insert(inflected.to_lowercase(), base);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.bases.contains(word)
    }

    pub fn irregular(&self, word: &str) -> Option<&str> {
        self.irregular.get(word).map(String::as_str)
    }

    /// Number of base forms plus irregular forms.
    pub fn len(&self) -> usize {
        self.bases.len() + self.irregular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty() && self.irregular.is_empty()
    }
}

/// Maps words to base forms using a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    lexicon: Lexicon,
}

impl Lemmatizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Base form of a lower-cased token.
    /// Borrows the input when the token is returned unchanged.
    pub fn lemmatize<'a>(&'a self, token: &'a str) -> Cow<'a, str> {
        if token.is_empty() || self.lexicon.contains(token) {
            return Cow::Borrowed(token);
        }
        if let Some(base) = self.lexicon.irregular(token) {
            return Cow::Borrowed(base);
        }

        NOUN_RULES
            .iter()
            .chain(VERB_RULES.iter())
            .find_map(|(suffix, replacement)| self.apply_rule(token, suffix, replacement))
            .map_or(Cow::Borrowed(token), Cow::Owned)
    }

    /// Try one detachment rule, returning the candidate only if
    /// it is a known base form.
    fn apply_rule(&self, token: &str, suffix: &str, replacement: &str) -> Option<String> {
        let stem = token.strip_suffix(suffix)?;
        if stem.is_empty() {
            return None;
        }

        let candidate = format!("{stem}{replacement}");
        if self.lexicon.contains(&candidate) {
            return Some(candidate);
        }

        // "shipped" → "shipp" → "ship", "running" → "runn" → "run"
        if replacement.is_empty() && (suffix == "ed" || suffix == "ing") {
            if let Some(undoubled) = undouble(stem) {
                if self.lexicon.contains(undoubled) {
                    return Some(undoubled.to_string());
                }
            }
        }
        None
    }
}

/// Drop the last character of a stem ending in a doubled consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.char_indices().rev();
    let (last_idx, last) = rev.next()?;
    let (_, prev) = rev.next()?;
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u');

    if last == prev && last.is_alphabetic() && !is_vowel(last) {
        Some(&stem[..last_idx])
    } else {
        None
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        let mut lex = Lexicon::new();
        for w in ["run", "ship", "policy", "return", "change", "box", "address", "woman", "make"] {
            lex.add_base(w);
        }
        lex.add_irregular("went", "go");
        lex.add_irregular("is", "be");
        Lemmatizer::new(lex)
    }

    #[test]
    fn test_regular_inflections() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("policies"), "policy");
        assert_eq!(l.lemmatize("returned"), "return");
        assert_eq!(l.lemmatize("returns"), "return");
        assert_eq!(l.lemmatize("changed"), "change");
        assert_eq!(l.lemmatize("making"), "make");
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("addresses"), "address");
        assert_eq!(l.lemmatize("women"), "woman");
    }

    #[test]
    fn test_doubled_consonant() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("running"), "run");
        assert_eq!(l.lemmatize("shipped"), "ship");
    }

    #[test]
    fn test_irregular_forms() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("went"), "go");
        assert_eq!(l.lemmatize("is"), "be");
        // targets of irregular forms are base forms themselves
        assert_eq!(l.lemmatize("go"), "go");
    }

    #[test]
    fn test_unknown_words_are_kept() {
        let l = lemmatizer();
        assert_eq!(l.lemmatize("better"), "better");
        assert_eq!(l.lemmatize("this"), "this");
        assert_eq!(l.lemmatize("s"), "s");
    }

    #[test]
    fn test_lemmatizing_twice_is_stable() {
        let l = lemmatizer();
        for w in ["policies", "running", "went", "better", "addresses", "xyz"] {
            let once = l.lemmatize(w).into_owned();
            assert_eq!(l.lemmatize(&once), once);
        }
    }

    #[test]
    fn test_empty_lexicon_is_identity() {
        let l = Lemmatizer::new(Lexicon::new());
        assert_eq!(l.lemmatize("policies"), "policies");
        assert!(l.lexicon.is_empty());
    }
}
