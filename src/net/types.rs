//! Recipe records and the TheMealDB wire shape.
//!
//! DESIGN
//! ======
//! The API flattens ingredients into forty loosely typed keys
//! (`strIngredient1..20`, `strMeasure1..20`). [`Recipe`] converts them into a
//! fixed array of optional slots exactly once, inside its serde impls, so the
//! rest of the crate never sees the dynamic keys. Slot values are kept as the
//! API sent them, blanks included; [`Recipe::ingredient_lines`] is the only
//! place that trims and skips them. Persisted favorites use the same wire
//! shape, so a stored recipe re-encodes to the payload it came from.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of positional ingredient/measure slots in the API payload.
pub const INGREDIENT_SLOTS: usize = 20;

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Raw `strIngredientN` / `strMeasureN` values of one slot.
///
/// A slot exists when the API sent either key; both keys are written back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// One displayable ingredient line, trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ingredient<'a> {
    /// 1-based slot number.
    pub position: usize,
    pub name: &'a str,
    /// Quantity text such as `"1 tbsp"`, if the API supplied one.
    pub measure: Option<&'a str>,
}

/// A dish as returned by the recipe API. Identity is [`Recipe::id`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireRecipe", into = "WireRecipe")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: Option<String>,
    pub instructions: String,
    /// Image URL.
    pub thumbnail: String,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub youtube: Option<String>,
    /// Slot `i` holds `strIngredient{i+1}` / `strMeasure{i+1}`.
    pub ingredients: [Option<IngredientSlot>; INGREDIENT_SLOTS],
    /// Any other nullable string fields the API sent, kept verbatim.
    pub extra: BTreeMap<String, Option<String>>,
}

impl Recipe {
    /// A recipe with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            area: None,
            instructions: String::new(),
            thumbnail: String::new(),
            tags: None,
            youtube: None,
            ingredients: Default::default(),
            extra: BTreeMap::new(),
        }
    }

    /// Slots with a non-blank ingredient name, in slot order.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = Ingredient<'_>> {
        self.ingredients.iter().enumerate().filter_map(|(i, slot)| {
            let slot = slot.as_ref()?;
            let name = non_blank(slot.name.as_deref())?;
            Some(Ingredient { position: i + 1, name, measure: non_blank(slot.measure.as_deref()) })
        })
    }

    /// Individual tags, trimmed, blanks dropped.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| tags.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Body of `GET /search.php`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// `None` when the API reports no matches with `null` (or omits the key).
    #[serde(default)]
    pub meals: Option<Vec<Recipe>>,
}

/// Exact JSON shape of one meal object.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct WireRecipe {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strCategory")]
    category: String,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, Option<String>>,
}

/// Parse `strIngredient7` style keys into a 0-based slot index.
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let n: usize = key.strip_prefix(prefix)?.parse().ok()?;
    n.checked_sub(1).filter(|i| *i < INGREDIENT_SLOTS)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl From<WireRecipe> for Recipe {
    fn from(wire: WireRecipe) -> Self {
        let mut ingredients: [Option<IngredientSlot>; INGREDIENT_SLOTS] = Default::default();
        let mut extra = BTreeMap::new();

        for (key, value) in wire.rest {
            if let Some(i) = slot_index(&key, INGREDIENT_PREFIX) {
                ingredients[i].get_or_insert_with(IngredientSlot::default).name = value;
            } else if let Some(i) = slot_index(&key, MEASURE_PREFIX) {
                ingredients[i].get_or_insert_with(IngredientSlot::default).measure = value;
            } else {
                extra.insert(key, value);
            }
        }

        Self {
            id: wire.id,
            name: wire.name,
            category: wire.category,
            area: wire.area,
            instructions: wire.instructions,
            thumbnail: wire.thumbnail,
            tags: wire.tags,
            youtube: wire.youtube,
            ingredients,
            extra,
        }
    }
}

impl From<Recipe> for WireRecipe {
    fn from(recipe: Recipe) -> Self {
        let mut rest = recipe.extra;
        for (i, slot) in recipe.ingredients.into_iter().enumerate() {
            if let Some(IngredientSlot { name, measure }) = slot {
                rest.insert(format!("{INGREDIENT_PREFIX}{}", i + 1), name);
                rest.insert(format!("{MEASURE_PREFIX}{}", i + 1), measure);
            }
        }

        Self {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            area: recipe.area,
            instructions: recipe.instructions,
            thumbnail: recipe.thumbnail,
            tags: recipe.tags,
            youtube: recipe.youtube,
            rest,
        }
    }
}
