//! Script-family detection for mixed-script concept names.

use std::collections::BTreeSet;

use unicode_script::{Script, UnicodeScript};

/// Broad script families. Hiragana and Katakana count as one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptFamily {
    Latin,
    Hangul,
    Han,
    Kana,
    Cyrillic,
    Greek,
    Arabic,
    Hebrew,
    Devanagari,
    Thai,
    Other,
}

/// Family of a single char. Digits, punctuation, and combining marks have none.
pub fn script_family(ch: char) -> Option<ScriptFamily> {
    match ch.script() {
        Script::Common | Script::Inherited | Script::Unknown => None,
        Script::Latin => Some(ScriptFamily::Latin),
        Script::Hangul => Some(ScriptFamily::Hangul),
        Script::Han => Some(ScriptFamily::Han),
        Script::Hiragana | Script::Katakana => Some(ScriptFamily::Kana),
        Script::Cyrillic => Some(ScriptFamily::Cyrillic),
        Script::Greek => Some(ScriptFamily::Greek),
        Script::Arabic => Some(ScriptFamily::Arabic),
        Script::Hebrew => Some(ScriptFamily::Hebrew),
        Script::Devanagari => Some(ScriptFamily::Devanagari),
        Script::Thai => Some(ScriptFamily::Thai),
        _ => Some(ScriptFamily::Other),
    }
}

/// Distinct families present in `text`.
pub fn script_families(text: &str) -> BTreeSet<ScriptFamily> {
    text.chars().filter_map(script_family).collect()
}

/// True if `text` mixes at least two script families.
pub fn mixes_scripts(text: &str) -> bool {
    script_families(text).len() >= 2
}
