//! Locale files and `t!` call sites must agree.
//!
//! Every key the editor looks up has to exist in every locale, every locale
//! defines the same keys as `en-US`, and a message keeps the same Fluent
//! variables across translations.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK: &str = "en-US";
const FTL_NAME: &str = "jawmax-ui.ftl";

fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message id -> sorted `$variables` used in its value.
fn parse_ftl(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut messages = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with(['#', ' ', '\t', '.']) || line.trim().is_empty() {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let vars = value
            .split('$')
            .skip(1)
            .map(|rest| {
                rest.chars()
                    .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect::<String>()
            })
            .collect();
        let previous = messages.insert(id.trim().to_string(), vars);
        assert!(previous.is_none(), "duplicate message id `{}`", id.trim());
    }
    messages
}

fn locales() -> BTreeMap<String, BTreeMap<String, BTreeSet<String>>> {
    let root = crate_dir().join("i18n");
    fs::read_dir(&root)
        .expect("i18n directory")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            let tag = entry.file_name().to_string_lossy().into_owned();
            let src = fs::read_to_string(entry.path().join(FTL_NAME))
                .unwrap_or_else(|err| panic!("{tag}/{FTL_NAME}: {err}"));
            (tag, parse_ftl(&src))
        })
        .collect()
}

fn collect_rs(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("readable source dir").filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            collect_rs(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Literal keys passed to `t!(...)` anywhere under `src/`.
fn used_keys() -> BTreeMap<String, PathBuf> {
    let mut files = Vec::new();
    collect_rs(&crate_dir().join("src"), &mut files);

    let mut keys = BTreeMap::new();
    for file in files {
        let src = fs::read_to_string(&file).expect("readable source file");
        for (at, _) in src.match_indices("t!(\"") {
            // Skip `format!("`, `assert!("` and friends.
            let prev = src[..at].chars().next_back();
            if prev.is_some_and(|c| c.is_alphanumeric() || c == '_') {
                continue;
            }
            let rest = &src[at + 4..];
            if let Some(end) = rest.find('"') {
                keys.entry(rest[..end].to_string())
                    .or_insert_with(|| file.clone());
            }
        }
    }
    keys
}

#[test]
fn fallback_and_translation_are_present() {
    let locales = locales();
    assert!(locales.contains_key(FALLBACK));
    assert!(locales.contains_key("es-ES"));
    assert!(!locales[FALLBACK].is_empty());
}

#[test]
fn every_looked_up_key_exists_in_every_locale() {
    let used = used_keys();
    assert!(used.contains_key("control-zoom"), "scanner found no keys");

    let mut missing = Vec::new();
    for (tag, messages) in locales() {
        for (key, file) in &used {
            if !messages.contains_key(key) {
                missing.push(format!("{tag}: `{key}` (used in {})", file.display()));
            }
        }
    }
    assert!(missing.is_empty(), "missing messages:\n{}", missing.join("\n"));
}

#[test]
fn locales_define_the_same_keys() {
    let locales = locales();
    let reference: BTreeSet<&String> = locales[FALLBACK].keys().collect();
    for (tag, messages) in &locales {
        let keys: BTreeSet<&String> = messages.keys().collect();
        let missing: Vec<&str> = reference.difference(&keys).map(|k| k.as_str()).collect();
        let extra: Vec<&str> = keys.difference(&reference).map(|k| k.as_str()).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{tag}: missing {missing:?}, not in {FALLBACK} {extra:?}"
        );
    }
}

#[test]
fn translations_keep_message_variables() {
    let locales = locales();
    let reference = &locales[FALLBACK];
    assert_eq!(
        reference["bar-label"],
        BTreeSet::from(["name".to_string()])
    );
    for (tag, messages) in &locales {
        for (key, vars) in messages {
            if let Some(expected) = reference.get(key) {
                assert_eq!(vars, expected, "{tag}: `{key}` variables differ");
            }
        }
    }
}

#[test]
fn no_unused_messages() {
    let used = used_keys();
    let locales = locales();
    let unused: Vec<&String> = locales[FALLBACK]
        .keys()
        .filter(|key| !used.contains_key(*key))
        .collect();
    assert!(unused.is_empty(), "messages never looked up: {unused:?}");
}
