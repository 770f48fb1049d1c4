// src/record.rs
//! Animal records as delivered by the data API, plus the typed accessors the
//! rest of the pipeline uses to read them.
//!
//! The API is loose about shapes: most characteristics are strings, a few are
//! arrays, and the odd one is a number. Everything is normalized into
//! [`AttrValue`] on decode so lookups never have to care.

use std::{borrow::Cow, collections::BTreeMap, fmt, str::FromStr};

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// One animal.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default, deserialize_with = "loose_map")]
    pub taxonomy: BTreeMap<String, AttrValue>,
    #[serde(default, deserialize_with = "string_list")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "loose_map")]
    pub characteristics: BTreeMap<String, AttrValue>,
}

impl Record {
    pub fn new(name: &str) -> Self {
        Self {
            name: s!(name),
            taxonomy: BTreeMap::new(),
            locations: Vec::new(),
            characteristics: BTreeMap::new(),
        }
    }

    pub fn with_characteristic(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.characteristics.insert(s!(key), value.into());
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    /// Value at `path` if present and not empty. Sequences yield their first element,
    /// which may itself be an empty string.
    pub fn lookup(&self, path: &AttrPath) -> Option<&str> {
        match path {
            AttrPath::Name => Some(self.name.as_str()).filter(|s| !s.is_empty()),
            AttrPath::Locations => self.locations.first().map(String::as_str),
            AttrPath::Characteristic(key) => present(self.characteristics.get(key.as_ref())),
            AttrPath::Taxonomy(key) => present(self.taxonomy.get(key.as_ref())),
        }
    }

    /// Scalar form of the value at `path`, or `None` when it is absent or empty.
    pub fn scalar(&self, path: &AttrPath) -> Option<&str> {
        self.lookup(path).filter(|s| !s.is_empty())
    }

    /// Same as [`Record::scalar`] but absence reads as `""`.
    pub fn scalar_or_empty(&self, path: &AttrPath) -> &str {
        self.scalar(path).unwrap_or("")
    }
}

/// A characteristic or taxonomy value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum AttrValue {
    Text(String),
    List(Vec<String>),
}

impl AttrValue {
    /// The value used for display and matching: the text itself, or the first list item.
    pub fn first(&self) -> &str {
        match self {
            AttrValue::Text(s) => s.as_str(),
            AttrValue::List(items) => items.first().map_or("", String::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Text(s) => s.is_empty(),
            AttrValue::List(items) => items.is_empty(),
        }
    }
}

fn present(v: Option<&AttrValue>) -> Option<&str> {
    v.filter(|v| !v.is_empty()).map(AttrValue::first)
}

impl From<Value> for AttrValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Array(items) => AttrValue::List(items.into_iter().map(value_text).collect()),
            other => AttrValue::Text(value_text(other)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s!(s))
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::List(items.into_iter().map(String::from).collect())
    }
}

/// Text form of a loose JSON scalar. `null` and `false` read as empty.
fn value_text(v: Value) -> String {
    match v {
        Value::Null | Value::Bool(false) => s!(),
        Value::Bool(true) => s!("true"),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn string_list<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        Value::Null => Vec::new(),
        other => vec![value_text(other)],
    })
}

/// `null` reads as an empty section.
fn loose_map<'de, D>(de: D) -> Result<BTreeMap<String, AttrValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, AttrValue>>::deserialize(de)?.unwrap_or_default())
}

/// Dotted reference into a record, e.g. `characteristics.skin_type`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrPath {
    Name,
    Locations,
    Characteristic(Cow<'static, str>),
    Taxonomy(Cow<'static, str>),
}

impl AttrPath {
    pub const SKIN_TYPE: AttrPath = AttrPath::Characteristic(Cow::Borrowed("skin_type"));

    pub const fn characteristic(key: &'static str) -> Self {
        AttrPath::Characteristic(Cow::Borrowed(key))
    }
}

impl FromStr for AttrPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidPath(s!(s));
        let mut parts = s.trim().split('.');
        let head = parts.next().ok_or_else(bad)?;
        let key = parts.next();
        if parts.next().is_some() {
            return Err(bad());
        }

        match (head, key) {
            ("name", None) => Ok(AttrPath::Name),
            ("locations", None) => Ok(AttrPath::Locations),
            ("characteristics", Some(k)) if !k.is_empty() => {
                Ok(AttrPath::Characteristic(Cow::Owned(s!(k))))
            }
            ("taxonomy", Some(k)) if !k.is_empty() => Ok(AttrPath::Taxonomy(Cow::Owned(s!(k)))),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrPath::Name => f.write_str("name"),
            AttrPath::Locations => f.write_str("locations"),
            AttrPath::Characteristic(k) => write!(f, "characteristics.{k}"),
            AttrPath::Taxonomy(k) => write!(f, "taxonomy.{k}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sections_do_not_drop_the_batch() {
        let json = r#"[
            {"name":"Fox","characteristics":{"skin_type":"Fur"}},
            {"name":"Odd","characteristics":null,"taxonomy":null,"locations":null}
        ]"#;
        let rs: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_eq!(rs.len(), 2);
        assert_eq!(rs[0].scalar(&AttrPath::SKIN_TYPE), Some("Fur"));
        assert_eq!(rs[1], Record::new("Odd"));
        assert_eq!(rs[1].scalar(&AttrPath::SKIN_TYPE), None);
    }

    #[test]
    fn decodes_api_shape_with_loose_values() {
        let json = r#"{
            "name": "Fox",
            "taxonomy": { "kingdom": "Animalia", "genus": "Vulpes" },
            "locations": ["Europe", "Asia"],
            "characteristics": {
                "skin_type": "Fur",
                "diet": ["Omnivore", "Carnivore"],
                "number_of_species": 12,
                "nocturnal": false,
                "lifespan": null
            }
        }"#;
        let r: Record = serde_json::from_str(json).unwrap();
        assert_eq!(r.scalar(&AttrPath::SKIN_TYPE), Some("Fur"));
        assert_eq!(r.scalar(&AttrPath::characteristic("diet")), Some("Omnivore"));
        assert_eq!(r.scalar(&AttrPath::characteristic("number_of_species")), Some("12"));
        assert_eq!(r.scalar(&AttrPath::characteristic("nocturnal")), None);
        assert_eq!(r.scalar(&AttrPath::characteristic("lifespan")), None);
        assert_eq!(r.scalar(&AttrPath::Locations), Some("Europe"));
        assert_eq!(r.scalar(&"taxonomy.genus".parse().unwrap()), Some("Vulpes"));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let r: Record = serde_json::from_str(r#"{ "name": "Frog" }"#).unwrap();
        assert!(r.characteristics.is_empty());
        assert!(r.locations.is_empty());
        assert_eq!(r.scalar(&AttrPath::SKIN_TYPE), None);
        assert_eq!(r.scalar_or_empty(&AttrPath::SKIN_TYPE), "");
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_str::<Record>(r#"{ "locations": [] }"#).is_err());
    }

    #[test]
    fn empty_list_and_empty_text_are_empty() {
        assert!(AttrValue::List(vec![]).is_empty());
        assert!(AttrValue::from("").is_empty());
        assert!(!AttrValue::from(vec!["", "x"]).is_empty());
        assert_eq!(AttrValue::from(vec!["", "x"]).first(), "");
        assert_eq!(AttrValue::from(vec!["x", ""]).first(), "x");

        let r = Record::new("Owl").with_characteristic("diet", vec!["", "Mice"]);
        let diet = AttrPath::characteristic("diet");
        assert_eq!(r.lookup(&diet), Some(""));
        assert_eq!(r.scalar(&diet), None);
    }

    #[test]
    fn parses_paths() {
        assert_eq!("name".parse::<AttrPath>().unwrap(), AttrPath::Name);
        assert_eq!("locations".parse::<AttrPath>().unwrap(), AttrPath::Locations);
        assert_eq!("characteristics.skin_type".parse::<AttrPath>().unwrap(), AttrPath::SKIN_TYPE);
        assert_eq!(AttrPath::SKIN_TYPE.to_string(), "characteristics.skin_type");

        for bad in ["", "characteristics", "characteristics.", "a.b.c", "colour", "name.x"] {
            assert!(matches!(bad.parse::<AttrPath>(), Err(Error::InvalidPath(_))), "{bad}");
        }
    }
}
