//! Catalog payload normalization
//!
//! The storefront API has shipped several payload shapes over time. Field
//! lookups go through alias lists in priority order; the first alias holding
//! a usable value wins.

use crate::suggest::domain::models::{Domain, ResultItem};
use serde_json::{Map, Value};

/// Keys under which an object body may carry its record list.
pub const LIST_KEYS: &[&str] = &["data", "items", "results", "content", "products", "services"];

pub const ID_KEYS: &[&str] = &["id", "_id", "codigo", "code"];
pub const NAME_KEYS: &[&str] = &["name", "nome", "title", "titulo", "descricao"];
pub const PRICE_KEYS: &[&str] = &["price", "preco", "valor", "amount"];
pub const IMAGE_KEYS: &[&str] = &[
    "imageRef",
    "image",
    "imagem",
    "imageUrl",
    "image_url",
    "thumbnail",
    "foto",
];

/// Find the record list in a decoded body.
///
/// Accepts a bare array, an object holding an array under one of
/// [`LIST_KEYS`], or the same one level down under `data`.
pub fn extract_records(body: &Value) -> Option<&[Value]> {
    match body {
        Value::Array(records) => Some(records.as_slice()),
        Value::Object(map) => list_in(map).or_else(|| match map.get("data") {
            Some(Value::Object(inner)) => list_in(inner),
            _ => None,
        }),
        _ => None,
    }
}

fn list_in(map: &Map<String, Value>) -> Option<&[Value]> {
    LIST_KEYS.iter().find_map(|key| match map.get(*key) {
        Some(Value::Array(records)) => Some(records.as_slice()),
        _ => None,
    })
}

/// Normalize every record of one domain, preserving source order.
/// Records without a usable id are skipped.
pub fn normalize_records(domain: Domain, records: &[Value]) -> Vec<ResultItem> {
    records
        .iter()
        .filter_map(|record| normalize_record(domain, record))
        .collect()
}

pub fn normalize_record(domain: Domain, record: &Value) -> Option<ResultItem> {
    let map = record.as_object()?;
    let id = ID_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(coerce_id))?;

    let name = NAME_KEYS
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .unwrap_or_default()
        .trim()
        .to_string();

    let price = PRICE_KEYS
        .iter()
        .find_map(|key| map.get(*key).filter(|value| !value.is_null()))
        .map(coerce_price)
        .unwrap_or(0.0);

    let image_ref = IMAGE_KEYS.iter().find_map(|key| {
        map.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    });

    Some(ResultItem {
        domain,
        id,
        name,
        price,
        image_ref,
    })
}

/// Domain A items first, then domain B, each in source order. No de-duplication.
pub fn merge(products: Vec<ResultItem>, services: Vec<ResultItem>) -> Vec<ResultItem> {
    let mut merged = products;
    merged.extend(services);
    merged
}

fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a price value to a finite number; anything unusable becomes `0`.
///
/// Strings may use a decimal comma (`"12,50"`); when a comma is present, dots
/// are read as thousands separators (`"1.234,50"`).
pub fn coerce_price(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.contains(',') {
                s.replace('.', "").replace(',', ".").parse::<f64>().ok()
            } else {
                s.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|p| p.is_finite()).unwrap_or(0.0)
}
