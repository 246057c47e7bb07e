//! Skills catalog: the SkillsDatabase dictionary and the FieldSkillsMap
//! checklists, built once at startup and passed explicitly to the extractor
//! and scorer.

mod defaults;
pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Comparison key for skill and field names. Every case-insensitive
/// comparison in the crate goes through this, so dedup, lookup and scoring
/// agree on non-ASCII names too.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// SkillsDatabase
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive dictionary of recognised skills.
/// Keeps the first spelling of each skill and its insertion order.
#[derive(Debug, Clone, Default)]
pub struct SkillsDatabase {
    skills: Vec<String>,
    lowered: HashSet<String>,
}

impl SkillsDatabase {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut db = SkillsDatabase::default();
        for skill in skills {
            db.insert(skill.as_ref());
        }
        db
    }

    /// Adds a skill unless an equal (ignoring case) entry exists. Blank input is ignored.
    pub fn insert(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() {
            return false;
        }
        if self.lowered.insert(name_key(skill)) {
            self.skills.push(skill.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.lowered.contains(&name_key(skill))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FieldSkillsMap
// ────────────────────────────────────────────────────────────────────────────

/// One job field and its ordered checklist of relevant skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSkills {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered mapping from field name to its skill checklist. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct FieldSkillsMap {
    fields: Vec<FieldSkills>,
}

impl FieldSkillsMap {
    /// Validates and normalises the fields: names must be unique (ignoring
    /// case) and non-empty, each checklist must hold at least one skill.
    /// Duplicate skills inside a checklist are collapsed.
    pub fn new(fields: Vec<FieldSkills>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalised = Vec::with_capacity(fields.len());

        for field in fields {
            let name = field.name.trim().to_string();
            if name.is_empty() {
                bail!("Field names must not be blank");
            }
            if !seen.insert(name_key(&name)) {
                bail!("Field '{name}' is defined more than once");
            }

            let checklist = SkillsDatabase::new(&field.skills);
            if checklist.is_empty() {
                bail!("Field '{name}' has no skills");
            }

            normalised.push(FieldSkills {
                name,
                skills: checklist.iter().map(str::to_string).collect(),
            });
        }

        Ok(FieldSkillsMap { fields: normalised })
    }

    /// Looks a field up by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&FieldSkills> {
        let key = name_key(name);
        self.fields.iter().find(|f| name_key(&f.name) == key)
    }

    pub fn fields(&self) -> &[FieldSkills] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SkillCatalog
// ────────────────────────────────────────────────────────────────────────────

/// On-disk catalog format for `SKILLS_CONFIG`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub skills: Vec<String>,
    pub fields: Vec<FieldSkills>,
}

/// The dictionary plus the field checklists.
///
/// Every skill named by a field is also present in the dictionary, so any
/// selectable skill can be detected in a resume.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    pub skills: SkillsDatabase,
    pub fields: FieldSkillsMap,
}

impl SkillCatalog {
    pub fn new(base_skills: &[String], fields: Vec<FieldSkills>) -> Result<Self> {
        let fields = FieldSkillsMap::new(fields)?;
        let mut skills = SkillsDatabase::new(base_skills);
        for field in fields.fields() {
            for skill in &field.skills {
                skills.insert(skill);
            }
        }
        if skills.is_empty() {
            bail!("Skills catalog is empty");
        }
        Ok(SkillCatalog { skills, fields })
    }

    /// The tables shipped with the service.
    pub fn builtin() -> Result<Self> {
        let base: Vec<String> = defaults::BASE_SKILLS.iter().map(|s| s.to_string()).collect();
        let fields = defaults::FIELD_SKILLS
            .iter()
            .map(|(name, skills)| FieldSkills {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self::new(&base, fields).context("Built-in skills catalog is invalid")
    }

    pub fn from_file(file: CatalogFile) -> Result<Self> {
        Self::new(&file.skills, file.fields)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills catalog '{}'", path.display()))?;
        let file: CatalogFile = serde_json::from_str(&raw)
            .with_context(|| format!("Skills catalog '{}' is not valid JSON", path.display()))?;
        Self::from_file(file)
            .with_context(|| format!("Skills catalog '{}' is invalid", path.display()))
    }

    /// Loads from `path` when given, otherwise the built-in tables.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }
}
