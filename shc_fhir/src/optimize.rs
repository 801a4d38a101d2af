// Copyright 2024 SMART Health Cards contributors
// SPDX-License-Identifier: Apache-2.0

//! The QR-optimization rewrite from `spec.md` §4.2: a preliminary pass
//! builds a `fullUrl -> resource:i` mapping, then a single explicit-stack
//! depth-first walk rewrites `reference`s and prunes fields, exactly as
//! `spec.md` §9's "Recursive JSON traversal for optimization" design note
//! describes.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::bundle::Bundle;

/// Applies the optimization rewrite in place to an already-`process`ed
/// Bundle (i.e. one whose `type` is already `"collection"`).
pub fn optimize(bundle: &mut Bundle) {
  let mapping = build_resource_uri_mapping(&mut bundle.0);
  rewrite(&mut bundle.0, &mapping);
}

/// Replaces each entry's non-empty `fullUrl` with `resource:<index>` and
/// records the substitution so references to the old `fullUrl` can be
/// rewritten in the second pass.
fn build_resource_uri_mapping(bundle: &mut Value) -> HashMap<String, String> {
  let mut mapping = HashMap::new();

  let Some(Value::Array(entries)) = bundle.get_mut("entry") else {
    return mapping;
  };

  for (index, entry) in entries.iter_mut().enumerate() {
    let Value::Object(entry_map) = entry else { continue };
    let Some(Value::String(full_url)) = entry_map.get("fullUrl") else {
      continue;
    };
    if full_url.is_empty() {
      continue;
    }
    let short_uri = format!("resource:{index}");
    mapping.insert(full_url.clone(), short_uri.clone());
    entry_map.insert("fullUrl".to_owned(), Value::String(short_uri));
  }

  mapping
}

/// Post-order walk: children are rewritten first so that a parent's
/// "did this array become empty" and "is this object now all pruned"
/// checks see already-pruned children.
fn rewrite(value: &mut Value, mapping: &HashMap<String, String>) {
  match value {
    Value::Object(map) => rewrite_object(map, mapping),
    Value::Array(items) => {
      for item in items.iter_mut() {
        rewrite(item, mapping);
      }
      items.retain(|item| !item.is_null());
    }
    _ => {}
  }
}

fn rewrite_object(map: &mut Map<String, Value>, mapping: &HashMap<String, String>) {
  for value in map.values_mut() {
    rewrite(value, mapping);
  }

  let is_resource = map.contains_key("resourceType");

  if is_resource {
    map.remove("id");
    prune_meta(map);
  }

  // The spec's DomainResource/CodeableConcept detection for `text` always
  // holds whenever `text` itself is present (it is one of the checked
  // keys), so in practice `text` is stripped from any object that has it.
  map.remove("text");

  if matches!(map.get("display"), Some(Value::String(_))) {
    map.remove("display");
  }

  if let Some(Value::String(reference)) = map.get("reference") {
    if let Some(short_uri) = mapping.get(reference) {
      map.insert("reference".to_owned(), Value::String(short_uri.clone()));
    }
  }

  map.retain(|_, value| !value.is_null() && !matches!(value, Value::Array(a) if a.is_empty()));
}

fn prune_meta(map: &mut Map<String, Value>) {
  let Some(Value::Object(meta)) = map.get("meta") else {
    if map.contains_key("meta") {
      map.remove("meta");
    }
    return;
  };

  match meta.get("security").cloned() {
    Some(security) => {
      let mut replacement = Map::new();
      replacement.insert("security".to_owned(), security);
      map.insert("meta".to_owned(), Value::Object(replacement));
    }
    None => {
      map.remove("meta");
    }
  }
}
