use std::collections::HashMap;

use crate::catalog::{self, Category};
use crate::reference::{self, ReferenceCandidate};
use crate::store::{keys, selection_key, StateStore};
use crate::types::{
    AnalysisResult, GeneratedImage, GenerationConfig, PromptFormat, UploadedImage,
};

/// Per-category ordered selections. Values are catalog display strings;
/// insertion order is selection order and duplicates cannot occur.
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    map: HashMap<&'static str, Vec<String>>,
}

impl SelectionState {
    fn load(store: &StateStore) -> Self {
        let mut map = HashMap::new();
        for category in catalog::CATEGORIES {
            let values: Vec<String> = store.get(&selection_key(category.key), Vec::new());
            if !values.is_empty() {
                map.insert(category.key, values);
            }
        }
        SelectionState { map }
    }

    pub fn get(&self, category_key: &str) -> &[String] {
        self.map
            .get(category_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_selected(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    fn toggle(&mut self, category_key: &'static str, value: &str) -> &[String] {
        let values = self.map.entry(category_key).or_default();
        if let Some(position) = values.iter().position(|entry| entry == value) {
            values.remove(position);
        } else {
            values.push(value.to_string());
        }
        self.map[category_key].as_slice()
    }

    fn clear(&mut self) {
        self.map.clear();
    }
}

/// All mutable state of the single client session. Every mutation persists
/// the affected field under its own key; the in-memory copy stays
/// authoritative even if a write silently fails.
pub struct Session {
    store: StateStore,
    pub images: Vec<UploadedImage>,
    pub source_text: String,
    pub analysis: Option<AnalysisResult>,
    pub current_prompt: String,
    pub custom_modifiers: String,
    pub selections: SelectionState,
    pub prompt_format: PromptFormat,
    pub generation: GenerationConfig,
    pub gallery: Vec<GeneratedImage>,
    pub selected_reference_ids: Vec<String>,
}

impl Session {
    pub fn load(store: StateStore) -> Self {
        let mut session = Session {
            images: store.get(keys::IMAGES, Vec::new()),
            source_text: store.get(keys::SOURCE_TEXT, String::new()),
            analysis: store.get(keys::ANALYSIS, None),
            current_prompt: store.get(keys::CURRENT_PROMPT, String::new()),
            custom_modifiers: store.get(keys::CUSTOM_MODIFIERS, String::new()),
            selections: SelectionState::load(&store),
            prompt_format: store.get(keys::PROMPT_FORMAT, PromptFormat::default()),
            generation: store.get(keys::GENERATION, GenerationConfig::default()),
            gallery: store.get(keys::GALLERY, Vec::new()),
            selected_reference_ids: store.get(keys::SELECTED_REFERENCES, Vec::new()),
            store,
        };
        // A crash between writes can leave the selection pointing at images
        // that no longer exist; settle it on load.
        session.reconcile_references();
        session
    }

    pub fn add_images(&mut self, images: Vec<UploadedImage>) {
        self.images.extend(images);
        self.store.set(keys::IMAGES, &self.images);
        self.reconcile_references();
    }

    pub fn clear_images(&mut self) {
        self.images.clear();
        self.store.set(keys::IMAGES, &self.images);
        self.reconcile_references();
    }

    pub fn set_source_text(&mut self, text: &str) {
        self.source_text = text.to_string();
        self.store.set(keys::SOURCE_TEXT, &self.source_text);
    }

    /// Stores a fresh analysis and seeds the working prompt from it.
    pub fn apply_analysis(&mut self, analysis: AnalysisResult) {
        self.current_prompt = analysis.suggested_prompt.clone();
        self.analysis = Some(analysis);
        self.store.set(keys::ANALYSIS, &self.analysis);
        self.store.set(keys::CURRENT_PROMPT, &self.current_prompt);
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        self.current_prompt = prompt.to_string();
        self.store.set(keys::CURRENT_PROMPT, &self.current_prompt);
    }

    pub fn set_custom_modifiers(&mut self, text: &str) {
        self.custom_modifiers = text.to_string();
        self.store.set(keys::CUSTOM_MODIFIERS, &self.custom_modifiers);
    }

    pub fn set_prompt_format(&mut self, format: PromptFormat) {
        self.prompt_format = format;
        self.store.set(keys::PROMPT_FORMAT, &self.prompt_format);
    }

    pub fn set_generation(&mut self, config: GenerationConfig) {
        self.generation = config;
        self.store.set(keys::GENERATION, &self.generation);
    }

    /// Toggles a catalog value in its category's selection set and persists
    /// that category alone. Returns the set after the toggle.
    pub fn toggle_selection(&mut self, category: &Category, value: &str) -> &[String] {
        let values = self.selections.toggle(category.key, value);
        self.store.set(&selection_key(category.key), &values);
        values
    }

    pub fn candidates(&self) -> Vec<ReferenceCandidate> {
        reference::candidates(&self.images, &self.gallery)
    }

    pub fn toggle_reference(&mut self, id: &str) {
        reference::toggle(&mut self.selected_reference_ids, id);
        self.store
            .set(keys::SELECTED_REFERENCES, &self.selected_reference_ids);
    }

    /// Prepends a batch of freshly generated images, newest-first. Earlier
    /// gallery entries keep their order.
    pub fn record_generated(&mut self, batch: Vec<GeneratedImage>) {
        let mut gallery = batch;
        gallery.append(&mut self.gallery);
        self.gallery = gallery;
        self.store.set(keys::GALLERY, &self.gallery);
        self.reconcile_references();
    }

    /// Drops selected reference ids whose candidate no longer exists. A
    /// consistent selection is left untouched, store write included.
    fn reconcile_references(&mut self) {
        let candidates = self.candidates();
        if reference::reconcile(&mut self.selected_reference_ids, &candidates) {
            self.store
                .set(keys::SELECTED_REFERENCES, &self.selected_reference_ids);
        }
    }

    /// Clears every field and every persisted record.
    pub fn reset(&mut self) {
        self.images.clear();
        self.source_text.clear();
        self.analysis = None;
        self.current_prompt.clear();
        self.custom_modifiers.clear();
        self.selections.clear();
        self.prompt_format = PromptFormat::default();
        self.generation = GenerationConfig::default();
        self.gallery.clear();
        self.selected_reference_ids.clear();
        self.store.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::new_record_id;

    fn scratch_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("prism-session-test-{}", new_record_id()))
    }

    fn upload(id: &str) -> UploadedImage {
        UploadedImage {
            id: id.to_string(),
            data: "Zm9v".to_string(),
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn toggling_a_selection_preserves_insertion_order() {
        let mut session = Session::load(StateStore::at(scratch_dir()));
        let category = catalog::find("perspective").unwrap();

        session.toggle_selection(category, "Close-up (CU)");
        session.toggle_selection(category, "Front view");
        assert_eq!(
            session.selections.get("perspective"),
            ["Close-up (CU)", "Front view"]
        );

        // toggling an already selected value removes it
        session.toggle_selection(category, "Close-up (CU)");
        assert_eq!(session.selections.get("perspective"), ["Front view"]);
    }

    #[test]
    fn state_survives_a_reload() {
        let dir = scratch_dir();
        {
            let mut session = Session::load(StateStore::at(dir.clone()));
            session.add_images(vec![upload("u1")]);
            session.set_source_text("a foggy harbor at dawn");
            session.set_prompt("initial prompt");
            let category = catalog::find("lighting").unwrap();
            session.toggle_selection(category, "Golden hour lighting");
            session.set_prompt_format(PromptFormat::Yaml);
            session.toggle_reference("upload-u1");
        }

        let session = Session::load(StateStore::at(dir.clone()));
        assert_eq!(session.images.len(), 1);
        assert_eq!(session.source_text, "a foggy harbor at dawn");
        assert_eq!(session.current_prompt, "initial prompt");
        assert_eq!(
            session.selections.get("lighting"),
            ["Golden hour lighting"]
        );
        assert_eq!(session.prompt_format, PromptFormat::Yaml);
        assert_eq!(session.selected_reference_ids, ["upload-u1"]);
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn clearing_images_reconciles_selected_references() {
        let mut session = Session::load(StateStore::at(scratch_dir()));
        session.add_images(vec![upload("u1"), upload("u2")]);
        session.toggle_reference("upload-u1");
        session.toggle_reference("upload-u2");

        session.clear_images();
        assert!(session.selected_reference_ids.is_empty());
    }

    #[test]
    fn generated_batch_is_prepended_newest_first() {
        let mut session = Session::load(StateStore::at(scratch_dir()));
        session.record_generated(vec![GeneratedImage {
            id: "old".to_string(),
            url: "data:image/png;base64,b2xk".to_string(),
            prompt: "p1".to_string(),
            model: "m".to_string(),
        }]);
        session.record_generated(vec![
            GeneratedImage {
                id: "new-a".to_string(),
                url: "data:image/png;base64,YQ==".to_string(),
                prompt: "p2".to_string(),
                model: "m".to_string(),
            },
            GeneratedImage {
                id: "new-b".to_string(),
                url: "data:image/png;base64,Yg==".to_string(),
                prompt: "p2".to_string(),
                model: "m".to_string(),
            },
        ]);

        let ids: Vec<&str> = session.gallery.iter().map(|img| img.id.as_str()).collect();
        assert_eq!(ids, ["new-a", "new-b", "old"]);
    }

    #[test]
    fn reset_clears_memory_and_disk() {
        let dir = scratch_dir();
        let mut session = Session::load(StateStore::at(dir.clone()));
        session.set_prompt("something");
        session.set_custom_modifiers("extra");
        session.reset();

        assert!(session.current_prompt.is_empty());
        let reloaded = Session::load(StateStore::at(dir));
        assert!(reloaded.current_prompt.is_empty());
        assert!(reloaded.custom_modifiers.is_empty());
    }
}
