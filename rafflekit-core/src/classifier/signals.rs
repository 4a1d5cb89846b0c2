use crate::types::RawObject;

/// Lowercase substrings of a type that mark it as collectible.
pub const TYPE_MARKERS: &[&str] = &["nft", "::nft::", "::collectible::", "::token::"];

const DISPLAY_SIGNALS: &[&str] = &["name", "image_url", "url", "description"];
const FIELD_SIGNALS: &[&str] = &["name", "image_url", "url", "metadata"];

pub fn has_type_signal(object: &RawObject) -> bool {
    object.type_tag.as_deref().is_some_and(|type_tag| {
        let lowered = type_tag.to_lowercase();
        TYPE_MARKERS.iter().any(|marker| lowered.contains(marker))
    })
}

pub fn has_display_signal(object: &RawObject) -> bool {
    object
        .display
        .as_ref()
        .is_some_and(|display| DISPLAY_SIGNALS.iter().any(|key| display.get(key).is_some()))
}

// only structured Move objects carry fields
pub fn has_field_signal(object: &RawObject) -> bool {
    object
        .fields()
        .is_some_and(|fields| FIELD_SIGNALS.iter().any(|key| fields.contains(key)))
}

/// Whether `object` looks like a collectible worth normalizing.
pub fn is_candidate(object: &RawObject) -> bool {
    has_type_signal(object) || has_display_signal(object) || has_field_signal(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisplayMetadata, ObjectContent, StructuredFields};
    use serde_json::json;

    #[test]
    fn test_type_markers_case_insensitive() {
        assert!(is_candidate(&RawObject::new("0x1").with_type("0xABC::nft::NFT")));
        assert!(is_candidate(&RawObject::new("0x1").with_type("0xabc::art::MyNft")));
        assert!(is_candidate(
            &RawObject::new("0x1").with_type("0xabc::collectible::Card")
        ));
        assert!(!is_candidate(
            &RawObject::new("0x1").with_type("0x2::coin::Coin<0x2::sui::SUI>")
        ));
    }

    #[test]
    fn test_display_signal() {
        let display: DisplayMetadata = [("description", "a hat")].into_iter().collect();
        let object = RawObject::new("0x1")
            .with_type("0xabc::wear::Hat")
            .with_display(display);
        assert!(is_candidate(&object));

        let creator_only: DisplayMetadata = [("creator", "bob")].into_iter().collect();
        let object = RawObject::new("0x1")
            .with_type("0xabc::wear::Hat")
            .with_display(creator_only);
        assert!(!is_candidate(&object));
    }

    #[test]
    fn test_field_signal_requires_move_object() {
        let object = RawObject::new("0x1")
            .with_type("0xabc::game::Hero")
            .with_fields(json!({ "metadata": { "fields": {} } }));
        assert!(is_candidate(&object));

        let mut package = RawObject::new("0x1").with_type("0xabc::game::Hero");
        package.content = Some(ObjectContent::Package);
        assert!(!is_candidate(&package));

        let plain = RawObject::new("0x1")
            .with_type("0xabc::game::Hero")
            .with_fields(json!({ "level": 3, "id": { "id": "0x1" } }));
        assert!(!is_candidate(&plain));
        assert!(!has_field_signal(&RawObject {
            content: Some(ObjectContent::MoveObject {
                fields: StructuredFields::from(json!({ "name": null })),
            }),
            ..RawObject::default()
        }));
    }
}
