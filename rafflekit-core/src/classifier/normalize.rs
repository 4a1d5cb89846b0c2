//! Field normalization.
//!
//! Every output field is resolved by walking an ordered chain of probes, each
//! naming one source shape and one key. The first probe that yields a
//! non-empty value wins.

use crate::types::{NormalizedAsset, RawObject, PLACEHOLDER_IMAGE};

/// Name given to candidates with no usable name source.
pub const UNNAMED: &str = "Unnamed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Display,
    Fields,
}

#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub source: Source,
    pub key: &'static str,
}

const fn display(key: &'static str) -> Probe {
    Probe {
        source: Source::Display,
        key,
    }
}

const fn fields(key: &'static str) -> Probe {
    Probe {
        source: Source::Fields,
        key,
    }
}

pub const NAME_CHAIN: &[Probe] = &[
    display("name"),
    fields("name"),
    fields("title"),
    display("title"),
];

pub const IMAGE_CHAIN: &[Probe] = &[
    display("image_url"),
    display("url"),
    fields("image_url"),
    fields("url"),
    fields("image"),
    display("image"),
];

pub const DESCRIPTION_CHAIN: &[Probe] = &[
    display("description"),
    fields("description"),
    display("subtitle"),
    fields("subtitle"),
];

pub const COLLECTION_CHAIN: &[Probe] = &[
    display("collection_name"),
    display("collection"),
    fields("collection_name"),
    fields("collection"),
    display("project_name"),
    fields("project_name"),
];

impl Probe {
    pub fn read<'a>(&self, object: &'a RawObject) -> Option<&'a str> {
        match self.source {
            Source::Display => object.display.as_ref()?.get(self.key),
            Source::Fields => object.fields()?.text(self.key),
        }
    }
}

pub fn first_present<'a>(object: &'a RawObject, chain: &[Probe]) -> Option<&'a str> {
    chain.iter().find_map(|probe| probe.read(object))
}

/// `"<Struct> <last 8 chars of id>"`, when both parts exist.
fn synthesized_name(object: &RawObject) -> Option<String> {
    let struct_name = object.struct_name()?;
    if object.id.is_empty() {
        return None;
    }

    let tail = object
        .id
        .char_indices()
        .rev()
        .nth(7)
        .map(|(i, _)| &object.id[i..])
        .unwrap_or(&object.id);

    Some(format!("{} {}", struct_name, tail))
}

pub fn normalize(object: &RawObject) -> NormalizedAsset {
    let name = first_present(object, NAME_CHAIN)
        .map(str::to_string)
        .or_else(|| synthesized_name(object))
        .unwrap_or_else(|| UNNAMED.to_string());

    let image_ref = first_present(object, IMAGE_CHAIN).unwrap_or(PLACEHOLDER_IMAGE);
    let description = first_present(object, DESCRIPTION_CHAIN).unwrap_or_default();
    let collection_label = first_present(object, COLLECTION_CHAIN).map(str::to_string);

    NormalizedAsset {
        id: object.id.clone(),
        name,
        description: description.to_string(),
        image_ref: image_ref.to_string(),
        collection_label,
        origin_tag: object.origin_tag().to_string(),
    }
}

/// Only an asset that is both unnamed and id-less is dropped.
pub fn is_identifiable(asset: &NormalizedAsset) -> bool {
    !(asset.name == UNNAMED && asset.id.is_empty())
}
