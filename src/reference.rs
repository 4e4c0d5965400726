use tracing::debug;

use crate::api::media::{parse_data_url, to_data_url};
use crate::types::{GeneratedImage, UploadedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceOrigin {
    Upload,
    Generated,
}

impl ReferenceOrigin {
    pub fn tag(self) -> &'static str {
        match self {
            ReferenceOrigin::Upload => "upload",
            ReferenceOrigin::Generated => "generated",
        }
    }
}

/// Unified, addressable view of an image usable as a generation reference.
/// Ids are namespaced by origin so an upload and a generated image can never
/// collide, and stay stable for the lifetime of the source record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCandidate {
    pub id: String,
    pub origin: ReferenceOrigin,
    pub data: String,
    pub mime_type: String,
    pub preview_url: String,
}

/// Payload pair handed to the generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub data: String,
    pub mime_type: String,
}

/// Pure projection of the two image lists into the candidate list.
///
/// Uploads pass through as-is. Generated entries must carry a parseable
/// base64 data URL; anything else is dropped from the view rather than
/// failing the whole merge.
pub fn candidates(
    uploads: &[UploadedImage],
    generated: &[GeneratedImage],
) -> Vec<ReferenceCandidate> {
    let mut out = Vec::with_capacity(uploads.len() + generated.len());

    for image in uploads {
        out.push(ReferenceCandidate {
            id: format!("upload-{}", image.id),
            origin: ReferenceOrigin::Upload,
            data: image.data.clone(),
            mime_type: image.mime_type.clone(),
            preview_url: to_data_url(&image.mime_type, &image.data),
        });
    }

    for image in generated {
        let Some(payload) = parse_data_url(&image.url) else {
            debug!(
                "Skipping generated image {} with unrecognized payload",
                image.id
            );
            continue;
        };
        out.push(ReferenceCandidate {
            id: format!("generated-{}", image.id),
            origin: ReferenceOrigin::Generated,
            data: payload.data,
            mime_type: payload.mime_type,
            preview_url: image.url.clone(),
        });
    }

    out
}

/// Intersects the selected-id set with the current candidates, in place.
/// Returns whether anything was removed, so callers can skip a store write
/// when the selection was already consistent.
pub fn reconcile(selected: &mut Vec<String>, candidates: &[ReferenceCandidate]) -> bool {
    if selected.is_empty() {
        return false;
    }
    let before = selected.len();
    selected.retain(|id| candidates.iter().any(|candidate| candidate.id == *id));
    selected.len() != before
}

/// Pure toggle: removes the id when present, appends it otherwise.
pub fn toggle(selected: &mut Vec<String>, id: &str) {
    if let Some(position) = selected.iter().position(|entry| entry == id) {
        selected.remove(position);
    } else {
        selected.push(id.to_string());
    }
}

/// Resolves the selected ids back into transmission payloads, preserving
/// candidate order. An empty result is `None`: the collaborator treats the
/// absence of reference images differently from an empty list.
pub fn resolve_selected(
    candidates: &[ReferenceCandidate],
    selected: &[String],
) -> Option<Vec<ReferenceImage>> {
    let resolved: Vec<ReferenceImage> = candidates
        .iter()
        .filter(|candidate| selected.iter().any(|id| *id == candidate.id))
        .map(|candidate| ReferenceImage {
            data: candidate.data.clone(),
            mime_type: candidate.mime_type.clone(),
        })
        .collect();

    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(id: &str) -> UploadedImage {
        UploadedImage {
            id: id.to_string(),
            data: format!("{id}-bytes"),
            mime_type: "image/png".to_string(),
        }
    }

    fn generated(id: &str) -> GeneratedImage {
        GeneratedImage {
            id: id.to_string(),
            url: format!("data:image/jpeg;base64,{id}-bytes"),
            prompt: "a prompt".to_string(),
            model: "test-model".to_string(),
        }
    }

    #[test]
    fn merges_uploads_and_generated_with_namespaced_ids() {
        let list = candidates(&[upload("u1")], &[generated("g1")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "upload-u1");
        assert_eq!(list[0].origin, ReferenceOrigin::Upload);
        assert_eq!(list[0].preview_url, "data:image/png;base64,u1-bytes");
        assert_eq!(list[1].id, "generated-g1");
        assert_eq!(list[1].origin, ReferenceOrigin::Generated);
        assert_eq!(list[1].mime_type, "image/jpeg");
        assert_eq!(list[1].data, "g1-bytes");
    }

    #[test]
    fn malformed_generated_payload_is_dropped_without_error() {
        let broken = GeneratedImage {
            id: "bad".to_string(),
            url: "https://example.com/not-a-data-url.jpg".to_string(),
            prompt: String::new(),
            model: String::new(),
        };
        let list = candidates(&[], &[generated("ok"), broken]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "generated-ok");
    }

    #[test]
    fn reconcile_drops_ids_of_removed_images_and_keeps_the_rest() {
        let mut selected = vec!["upload-u1".to_string(), "upload-u2".to_string()];

        // u1 removed from the upload list
        let remaining = candidates(&[upload("u2")], &[]);
        let changed = reconcile(&mut selected, &remaining);
        assert!(changed);
        assert_eq!(selected, vec!["upload-u2".to_string()]);
    }

    #[test]
    fn reconcile_reports_no_change_for_consistent_selection() {
        let list = candidates(&[upload("u1")], &[]);
        let mut selected = vec!["upload-u1".to_string()];
        assert!(!reconcile(&mut selected, &list));
        assert_eq!(selected, vec!["upload-u1".to_string()]);

        let mut empty: Vec<String> = Vec::new();
        assert!(!reconcile(&mut empty, &list));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selected = Vec::new();
        toggle(&mut selected, "upload-a");
        toggle(&mut selected, "upload-b");
        assert_eq!(selected, vec!["upload-a", "upload-b"]);
        toggle(&mut selected, "upload-a");
        assert_eq!(selected, vec!["upload-b"]);
    }

    #[test]
    fn empty_selection_resolves_to_none() {
        let list = candidates(&[upload("u1")], &[]);
        assert_eq!(resolve_selected(&list, &[]), None);

        let resolved = resolve_selected(&list, &["upload-u1".to_string()]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].mime_type, "image/png");
        assert_eq!(resolved[0].data, "u1-bytes");
    }
}
