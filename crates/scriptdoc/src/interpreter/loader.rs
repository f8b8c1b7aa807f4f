//! Loads rule tables from a rules directory and a game installation.
//!
//! Layout of the rules directory:
//!
//! ```text
//! <rules>/operators.txt
//! <rules>/<game>/localisation/*          statement templates
//! <rules>/<game>/lookupRules.txt         value type: type, type, ...
//! <rules>/<game>/namedSections.txt       block: child, child, ...
//! <rules>/<game>/exceptions.txt          block: slot, slot, ...
//! <rules>/<game>/parentExceptions.txt    parent: child, child, ...
//! <rules>/<game>/variations.txt          canonical: game/relative/path, level
//! <rules>/<game>/countries.txt           optional extra localisation
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bon::Builder;
use encoding_rs::WINDOWS_1252;
use scriptdoc_semantics::{Operator, ValueType};

use super::error::LoadError;
use super::modifiers::expand_modifiers;
use super::tables::RuleTables;
use crate::parser::{
    RuleEntry, normalize, parse_localisation_entries, parse_rule_entries, parse_script,
    parse_template, split_list,
};
use crate::types::Diagnostics;

/// Where [`RuleTables::load`] reads its inputs.
///
/// # Example
///
/// ```
/// use scriptdoc::RuleSources;
///
/// let sources = RuleSources::builder()
///     .rules_dir("statements")
///     .game_dir("/games/eu4")
///     .game("EU4")
///     .build();
/// assert_eq!(sources.game(), "eu4");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(PathBuf, into), on(String, into))]
pub struct RuleSources {
    /// Directory holding `operators.txt` and one directory per game.
    rules_dir: PathBuf,
    /// Root of the game installation.
    game_dir: PathBuf,
    /// Game identifier, selecting the per-game rules directory.
    game: String,
}

impl RuleSources {
    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    pub fn game_dir(&self) -> &Path {
        &self.game_dir
    }

    /// Lower-cased game identifier.
    pub fn game(&self) -> String {
        self.game.to_lowercase()
    }

    /// Per-game rules directory.
    pub fn game_rules(&self) -> PathBuf {
        self.rules_dir.join(self.game())
    }

    /// Directory of the event scripts to document.
    pub fn events_dir(&self) -> PathBuf {
        self.game_dir.join("events")
    }
}

impl RuleTables {
    /// Reads every rule table named by `sources`.
    ///
    /// Required rule files must exist. Game data (localisation, regions,
    /// modifier definitions) is optional and skipped when absent.
    pub fn load(sources: &RuleSources) -> Result<RuleTables, LoadError> {
        let game_rules = sources.game_rules();
        let game_dir = sources.game_dir();

        let template_dir = game_rules.join("localisation");
        let mut templates = Vec::new();
        for path in files_under(&template_dir)? {
            for entry in read_entries(&path)? {
                let template = parse_template(&entry.value)
                    .map_err(|error| LoadError::parse(&path, entry.line, error))?;
                templates.push((entry.key, template));
            }
        }

        let mut localisation = Vec::new();
        let game_localisation = game_dir.join("localisation");
        if game_localisation.is_dir() {
            for path in files_under(&game_localisation)? {
                if file_name_contains(&path, "_l_english") {
                    let text = read_text(&path)?;
                    localisation.extend(
                        parse_localisation_entries(&text)
                            .into_iter()
                            .map(|entry| (entry.key, entry.value)),
                    );
                }
            }
        } else {
            tracing::debug!(path = %game_localisation.display(), "no game localisation");
        }
        let countries = game_rules.join("countries.txt");
        if countries.is_file() {
            localisation.extend(
                read_entries(&countries)?
                    .into_iter()
                    .map(|entry| (entry.key, entry.value.trim_matches('"').to_string())),
            );
        }

        let tables = RuleTables::builder()
            .parsed_templates(templates)
            .operator_words(load_operator_words(&sources.rules_dir().join("operators.txt"))?)
            .lookup_rules(load_lookup_rules(&game_rules.join("lookupRules.txt"))?)
            .named_blocks(load_lists(&game_rules.join("namedSections.txt"))?)
            .multi_token(load_lists(&game_rules.join("exceptions.txt"))?)
            .parent_exceptions(load_lists(&game_rules.join("parentExceptions.txt"))?)
            .variations(load_variations(&game_rules.join("variations.txt"), game_dir)?)
            .localisation(localisation)
            .regions(load_regions(game_dir)?)
            .build()
            .map_err(|error| LoadError::parse(&template_dir, error.line(), error))?;

        let modifiers = load_modifiers(game_dir, &tables)?;
        let tables = tables.with_modifiers(modifiers);
        let sizes = tables.summary();
        tracing::info!(
            templates = sizes.templates,
            localisation = sizes.localisation,
            variations = sizes.variations,
            modifiers = sizes.modifiers,
            "loaded rule tables"
        );
        Ok(tables)
    }
}

/// Reads a rule or localisation file, replacing bytes that are not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, LoadError> {
    Ok(String::from_utf8_lossy(&read_bytes(path)?).into_owned())
}

/// Reads a game script. Scripts that are not valid UTF-8 are decoded as
/// Windows-1252.
pub fn read_script(path: &Path) -> Result<String, LoadError> {
    match String::from_utf8(read_bytes(path)?) {
        Ok(text) => Ok(text),
        Err(error) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(error.as_bytes());
            Ok(text.into_owned())
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Every regular file below `path` (or `path` itself), in sorted order.
pub fn files_under(path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let io_error = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(io_error)? {
        entries.push(entry.map_err(io_error)?.path());
    }
    entries.sort();

    let mut files = Vec::new();
    for entry in entries {
        if entry.is_dir() {
            files.extend(files_under(&entry)?);
        } else if entry.is_file() {
            files.push(entry);
        }
    }
    Ok(files)
}

fn file_name_contains(path: &Path, needle: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(needle))
}

fn read_entries(path: &Path) -> Result<Vec<RuleEntry>, LoadError> {
    Ok(parse_rule_entries(&read_text(path)?))
}

fn load_operator_words(path: &Path) -> Result<Vec<(Operator, String)>, LoadError> {
    let mut words = Vec::new();
    for entry in read_entries(path)? {
        match Operator::from_name(&entry.key) {
            Some(operator) => words.push((operator, entry.value)),
            None => {
                return Err(LoadError::Parse {
                    path: path.to_path_buf(),
                    line: entry.line,
                    column: 1,
                    message: format!("unknown operator '{}'", entry.key),
                });
            }
        }
    }
    Ok(words)
}

/// Inverts `type: key1, key2` lines into key → type.
fn load_lookup_rules(path: &Path) -> Result<Vec<(String, ValueType)>, LoadError> {
    let mut rules = Vec::new();
    for entry in read_entries(path)? {
        let value_type =
            ValueType::from_name(&entry.key).ok_or_else(|| LoadError::UnknownValueType {
                path: path.to_path_buf(),
                name: entry.key.clone(),
            })?;
        rules.extend(
            split_list(&entry.value)
                .into_iter()
                .map(|kind| (kind, value_type)),
        );
    }
    Ok(rules)
}

fn load_lists(path: &Path) -> Result<Vec<(String, Vec<String>)>, LoadError> {
    Ok(read_entries(path)?
        .into_iter()
        .map(|entry| (entry.key, split_list(&entry.value)))
        .collect())
}

/// Every block header found at the configured nesting level becomes a
/// variation of its canonical statement.
fn load_variations(path: &Path, game_dir: &Path) -> Result<Vec<(String, String)>, LoadError> {
    let mut variations = Vec::new();
    for entry in read_entries(path)? {
        let invalid = || LoadError::InvalidVariation {
            path: path.to_path_buf(),
            entry: entry.value.clone(),
        };
        let parts = split_list(&entry.value);
        let [relative, level] = parts.as_slice() else {
            return Err(invalid());
        };
        let level = level.parse::<usize>().map_err(|_| invalid())?;
        let source = game_dir.join(relative.trim_start_matches('/'));
        if !source.exists() {
            tracing::debug!(path = %source.display(), "skipping missing variation source");
            continue;
        }
        for header in read_headers(&source, level)? {
            variations.push((header, entry.key.clone()));
        }
    }
    Ok(variations)
}

fn load_regions(game_dir: &Path) -> Result<Vec<String>, LoadError> {
    let mut regions = Vec::new();
    for source in [
        game_dir.join("map").join("region.txt"),
        game_dir.join("map").join("continent.txt"),
        game_dir.join("common").join("colonial_regions"),
    ] {
        if source.exists() {
            regions.extend(read_headers(&source, 0)?);
        } else {
            tracing::debug!(path = %source.display(), "skipping missing region source");
        }
    }
    Ok(regions)
}

fn load_modifiers(
    game_dir: &Path,
    tables: &RuleTables,
) -> Result<BTreeMap<String, Vec<String>>, LoadError> {
    let dir = game_dir.join("common").join("event_modifiers");
    let mut modifiers = BTreeMap::new();
    if !dir.exists() {
        tracing::debug!(path = %dir.display(), "no modifier definitions");
        return Ok(modifiers);
    }
    let mut diagnostics = Diagnostics::new();
    for path in files_under(&dir)? {
        let tree = parse_script(&read_script(&path)?)
            .map_err(|source| LoadError::Script { path: path.clone(), source })?;
        modifiers.extend(expand_modifiers(&tree, tables, &mut diagnostics));
    }
    tracing::debug!(
        modifiers = modifiers.len(),
        unresolved = diagnostics.len(),
        "expanded modifiers"
    );
    Ok(modifiers)
}

/// Lower-cased block headers at nesting `level` of every file under `path`.
///
/// Only brace depth is tracked, so files with stray braces still yield their
/// well-formed headers.
fn read_headers(path: &Path, level: usize) -> Result<Vec<String>, LoadError> {
    let mut headers = Vec::new();
    for file in files_under(path)? {
        let mut nesting = 0_usize;
        for line in normalize(&read_script(&file)?) {
            if let Some(header) = line.strip_suffix('{') {
                if nesting == level {
                    let name = header.split(['=', '<', '>']).next().unwrap_or(header);
                    headers.push(name.trim().to_lowercase());
                }
                nesting += 1;
            } else if line == "}" {
                nesting = nesting.saturating_sub(1);
            }
        }
    }
    Ok(headers)
}
