//! Family dataset loading.
//!
//! A dataset is a JSON object with a designated self ID, a `people` array and
//! a `relationships` array. Loading is forgiving: entries that cannot be used
//! are logged and skipped so one bad row never hides the rest of the family.

use crate::error::{DatasetError, Result};
use crate::person::{Person, PersonId};
use crate::relationship::{Relationship, RelationshipKind};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Keys accepted for the self ID, in lookup order.
const SELF_ID_KEYS: [&str; 4] = ["self_id", "selfId", "ME_ID", "me_id"];

/// What the loader dropped on the way in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub skipped_people: usize,
    pub skipped_relationships: usize,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_people == 0 && self.skipped_relationships == 0
    }
}

/// The people and relationships a query runs against.
#[derive(Debug, Clone, Default)]
pub struct FamilyDataset {
    self_id: Option<PersonId>,
    people: Vec<Person>,
    relationships: Vec<Relationship>,

    /// Maps person IDs to their position in `people`.
    id_index: HashMap<PersonId, usize>,

    report: LoadReport,
}

impl FamilyDataset {
    /// Builds a dataset from already-typed parts.
    ///
    /// Duplicate person IDs keep the first entry.
    pub fn new(
        self_id: Option<PersonId>,
        people: Vec<Person>,
        relationships: Vec<Relationship>,
    ) -> Self {
        let mut dataset = Self {
            self_id,
            relationships,
            ..Self::default()
        };
        for person in people {
            dataset.push_person(person);
        }
        dataset
    }

    /// Reads and parses a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
        let dataset = Self::from_json_str(&source)?;
        debug!(
            "Loaded {} people and {} relationships from {}",
            dataset.people.len(),
            dataset.relationships.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a dataset from a JSON value, skipping unusable entries.
    pub fn from_value(value: Value) -> Result<Self> {
        let root = match value {
            Value::Object(map) => map,
            other => return Err(DatasetError::NotAnObject(json_type(&other))),
        };

        let mut dataset = Self {
            self_id: parse_self_id(&root),
            ..Self::default()
        };

        for entry in collection(&root, "people") {
            match parse_person(entry) {
                Some(person) => dataset.push_person(person),
                None => {
                    warn!("Skipping malformed person entry: {}", entry);
                    dataset.report.skipped_people += 1;
                }
            }
        }

        for entry in collection(&root, "relationships") {
            match parse_relationship(entry) {
                Some(rel) => dataset.relationships.push(rel),
                None => {
                    warn!("Skipping malformed relationship entry: {}", entry);
                    dataset.report.skipped_relationships += 1;
                }
            }
        }

        Ok(dataset)
    }

    fn push_person(&mut self, person: Person) {
        if self.id_index.contains_key(&person.id) {
            warn!("Duplicate person id {}, keeping the first entry", person.id);
            self.report.skipped_people += 1;
            return;
        }
        self.id_index.insert(person.id, self.people.len());
        self.people.push(person);
    }

    /// The designated "you" of every query, if the dataset names one.
    pub fn self_id(&self) -> Option<PersonId> {
        self.self_id
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Gets a person by ID.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        let index = self.id_index.get(&id)?;
        self.people.get(*index)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.id_index.contains_key(&id)
    }

    /// Everyone except the self person, in dataset order.
    pub fn others(&self) -> impl Iterator<Item = &Person> {
        let self_id = self.self_id;
        self.people.iter().filter(move |p| Some(p.id) != self_id)
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn load_report(&self) -> LoadReport {
        self.report
    }
}

fn parse_self_id(root: &Map<String, Value>) -> Option<PersonId> {
    let (key, value) = SELF_ID_KEYS
        .iter()
        .find_map(|key| root.get(*key).map(|v| (*key, v)))?;

    let id = value.as_i64();
    if id.is_none() && !value.is_null() {
        warn!("Ignoring non-integer {}: {}", key, value);
    }
    id
}

/// Returns the entries of an array field, or nothing if the field is absent
/// or not an array.
fn collection<'a>(root: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match root.get(key) {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!("Expected `{}` to be an array, found {}", key, json_type(other));
            &[]
        }
        None => {
            warn!("Dataset has no `{}` collection", key);
            &[]
        }
    }
}

fn parse_person(entry: &Value) -> Option<Person> {
    let id = entry.get("id")?.as_i64()?;
    let name = entry.get("name")?.as_str()?;
    Some(Person::new(id, name))
}

fn parse_relationship(entry: &Value) -> Option<Relationship> {
    let from_id = entry.get("from_id")?.as_i64()?;
    let to_id = entry.get("to_id")?.as_i64()?;

    let kind = match entry.get("type") {
        Some(Value::String(raw)) => {
            let kind = serde_json::from_value(Value::String(raw.clone()))
                .unwrap_or(RelationshipKind::Unknown);
            if kind == RelationshipKind::Unknown {
                warn!("Unrecognised relationship type {:?} ({} - {})", raw, from_id, to_id);
            }
            kind
        }
        _ => {
            warn!("Relationship {} - {} has no type", from_id, to_id);
            RelationshipKind::Unknown
        }
    };

    Some(Relationship::new(from_id, to_id, kind))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
