//! Point-of-interest records and the per-language lookup store.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer};

use crate::geo::LatLng;

/// External ids of the landmarks that make up the yellow walking route.
pub const ITINERARY_POI_IDS: [u32; 9] = [1, 4, 6, 7, 10, 11, 14, 15, 16];

/// Language used when the document has no list for the requested one.
pub const DEFAULT_LANGUAGE: &str = "pt-PT";

/// A landmark as shipped in the POI document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Poi {
    /// External id (1-based, stable for the session).
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Marker position, `[lat, lng]` in the document.
    #[serde(deserialize_with = "deserialize_coords")]
    pub coords: LatLng,
    /// Long descriptive text.
    #[serde(default)]
    pub info: String,
    /// Construction year (number or free text in the document).
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub year: String,
    /// Street address.
    #[serde(default)]
    pub location: String,
    /// Building type.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Carousel images in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Poi {
    /// Whether this landmark belongs to the itinerary route.
    #[must_use]
    pub fn on_itinerary(&self) -> bool {
        ITINERARY_POI_IDS.contains(&self.id)
    }
}

fn deserialize_coords<'de, D>(deserializer: D) -> Result<LatLng, D::Error>
where
    D: Deserializer<'de>,
{
    let pair = <[f64; 2]>::deserialize(deserializer)?;
    Ok(LatLng::from(pair))
}

fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Top-level shape of the POI document.
///
/// Older builds ship a bare array; newer ones key the array by language.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PoiDocument {
    /// One list shared by every language.
    Shared(Vec<Poi>),
    /// One list per language code.
    ByLanguage(BTreeMap<String, Vec<Poi>>),
}

impl Default for PoiDocument {
    fn default() -> Self {
        Self::Shared(Vec::new())
    }
}

/// Immutable id → record lookup, per language.
///
/// Lookups always go through the external id carried by each record, never
/// through the position of the record in the document array.
#[derive(Clone, Debug, Default)]
pub struct PoiStore {
    shared: Vec<Poi>,
    by_language: BTreeMap<String, Vec<Poi>>,
    index: HashMap<String, BTreeMap<u32, usize>>,
    shared_index: BTreeMap<u32, usize>,
}

impl PoiStore {
    /// What: Build the store from a parsed document.
    ///
    /// Inputs:
    /// - `doc`: Parsed POI document in either supported shape
    ///
    /// Output:
    /// - Store with an id index per language
    ///
    /// Details:
    /// - Duplicate ids keep the first record and log a warning.
    #[must_use]
    pub fn from_document(doc: PoiDocument) -> Self {
        let mut store = Self::default();
        match doc {
            PoiDocument::Shared(list) => {
                store.shared_index = build_index("*", &list);
                store.shared = list;
            }
            PoiDocument::ByLanguage(map) => {
                for (lang, list) in &map {
                    store.index.insert(lang.clone(), build_index(lang, list));
                }
                store.by_language = map;
            }
        }
        store
    }

    /// What: Records to show for `language`, in document order.
    ///
    /// Details:
    /// - Falls back to [`DEFAULT_LANGUAGE`], then to the shared list.
    #[must_use]
    pub fn pois(&self, language: &str) -> &[Poi] {
        self.by_language
            .get(language)
            .or_else(|| self.by_language.get(DEFAULT_LANGUAGE))
            .map_or(self.shared.as_slice(), Vec::as_slice)
    }

    /// Look up a record by external id for `language`.
    #[must_use]
    pub fn get(&self, language: &str, id: u32) -> Option<&Poi> {
        let (list, index) = if let Some(list) = self.by_language.get(language) {
            (list.as_slice(), self.index.get(language))
        } else if let Some(list) = self.by_language.get(DEFAULT_LANGUAGE) {
            (list.as_slice(), self.index.get(DEFAULT_LANGUAGE))
        } else {
            (self.shared.as_slice(), Some(&self.shared_index))
        };
        index
            .and_then(|ix| ix.get(&id))
            .and_then(|&pos| list.get(pos))
    }

    /// Whether no records were loaded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.by_language.values().all(Vec::is_empty)
    }
}

fn build_index(lang: &str, list: &[Poi]) -> BTreeMap<u32, usize> {
    let mut index = BTreeMap::new();
    for (pos, poi) in list.iter().enumerate() {
        if index.contains_key(&poi.id) {
            tracing::warn!(language = lang, id = poi.id, "duplicate POI id; keeping first");
            continue;
        }
        index.insert(poi.id, pos);
    }
    index
}
