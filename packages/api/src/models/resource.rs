//! Backend resource collections and a flat, display-ready row shape for them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A REST collection the dashboard can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Branches,
    MenuCategories,
    MenuItems,
    Ingredients,
    Orders,
    Riders,
    Discounts,
    Loyalty,
    Reviews,
    Users,
    Roles,
    Cms,
}

impl Resource {
    pub const ALL: [Resource; 12] = [
        Resource::Branches,
        Resource::MenuCategories,
        Resource::MenuItems,
        Resource::Ingredients,
        Resource::Orders,
        Resource::Riders,
        Resource::Discounts,
        Resource::Loyalty,
        Resource::Reviews,
        Resource::Users,
        Resource::Roles,
        Resource::Cms,
    ];

    /// Collection segment on the backend, e.g. `"menu-items"`.
    pub fn slug(self) -> &'static str {
        match self {
            Resource::Branches => "branches",
            Resource::MenuCategories => "categories",
            Resource::MenuItems => "menu-items",
            Resource::Ingredients => "ingredients",
            Resource::Orders => "orders",
            Resource::Riders => "riders",
            Resource::Discounts => "discounts",
            Resource::Loyalty => "loyalty",
            Resource::Reviews => "reviews",
            Resource::Users => "users",
            Resource::Roles => "roles",
            Resource::Cms => "cms",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.slug() == slug)
    }
}

/// One record, flattened to `(field, text)` pairs sorted by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub id: Option<String>,
    pub fields: Vec<(String, String)>,
}

/// Flatten whatever the backend put in `data` into rows.
///
/// Accepts a bare array, a paginated object (`items`, `docs`, `rows` or `results`)
/// or a single record.
pub fn rows_from_value(data: Value) -> Vec<ResourceRow> {
    match data {
        Value::Array(records) => records.into_iter().filter_map(row_from_record).collect(),
        Value::Object(map) => {
            for key in ["items", "docs", "rows", "results"] {
                if let Some(Value::Array(records)) = map.get(key) {
                    return records.iter().cloned().filter_map(row_from_record).collect();
                }
            }
            row_from_record(Value::Object(map)).into_iter().collect()
        }
        _ => Vec::new(),
    }
}

fn row_from_record(record: Value) -> Option<ResourceRow> {
    let Value::Object(map) = record else {
        return None;
    };

    let id = map.get("id").or_else(|| map.get("_id")).map(cell_text);
    let mut fields: Vec<(String, String)> = map
        .iter()
        .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "_id")
        .map(|(key, value)| (key.clone(), cell_text(value)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    Some(ResourceRow { id, fields })
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(map) => match map.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => value.to_string(),
        },
    }
}
