use std::fmt;

use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::api::{GenerationRequest, PromptEngine};
use crate::compose::{compose, strip_code_fences};
use crate::credentials::CredentialStore;
use crate::reference::resolve_selected;
use crate::session::Session;
use crate::types::{new_record_id, GeneratedImage, MAX_IMAGE_COUNT, MIN_IMAGE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Analyze,
    Refine,
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Analyze => "analyze",
            Stage::Refine => "refine",
            Stage::Generate => "generate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// Not a failure: the caller should open the credential manager.
    #[error("no active API credential; add one with `keys add <name> <secret>`")]
    MissingCredential,
    #[error("add at least one source image or some source text before analyzing")]
    EmptySource,
    #[error("the current prompt is empty; run `analyze` first or set one with `prompt`")]
    EmptyPrompt,
    #[error("the {0} stage is already running")]
    Busy(Stage),
    #[error("{stage} failed: {source}")]
    Api {
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },
}

/// Drives the three-stage analyze → refine → generate workflow against a
/// [`PromptEngine`].
///
/// Each stage is guarded by its own busy flag inside the orchestrator, not
/// just at the presentation layer, and preconditions are checked before any
/// credential or network work. Failed stages never mutate session state.
pub struct Pipeline<E> {
    engine: E,
    analyzing: bool,
    refining: bool,
    generating: bool,
}

impl<E: PromptEngine> Pipeline<E> {
    pub fn new(engine: E) -> Self {
        Pipeline {
            engine,
            analyzing: false,
            refining: false,
            generating: false,
        }
    }

    pub async fn analyze(
        &mut self,
        session: &mut Session,
        credentials: &CredentialStore,
    ) -> Result<(), StageError> {
        if self.analyzing {
            return Err(StageError::Busy(Stage::Analyze));
        }
        if session.images.is_empty() && session.source_text.trim().is_empty() {
            return Err(StageError::EmptySource);
        }
        let api_key = credentials
            .active_secret()
            .ok_or(StageError::MissingCredential)?
            .to_string();

        self.analyzing = true;
        let result = self
            .engine
            .analyze(&session.images, &session.source_text, &api_key)
            .await;
        self.analyzing = false;

        match result {
            Ok(analysis) => {
                info!(
                    "Analysis complete: subject='{}', style='{}'",
                    analysis.subject, analysis.style
                );
                session.apply_analysis(analysis);
                Ok(())
            }
            Err(source) => {
                warn!("Analyze stage failed: {source:#}");
                Err(StageError::Api {
                    stage: Stage::Analyze,
                    source,
                })
            }
        }
    }

    pub async fn refine(
        &mut self,
        session: &mut Session,
        credentials: &CredentialStore,
    ) -> Result<(), StageError> {
        if self.refining {
            return Err(StageError::Busy(Stage::Refine));
        }
        if session.current_prompt.trim().is_empty() {
            return Err(StageError::EmptyPrompt);
        }
        let api_key = credentials
            .active_secret()
            .ok_or(StageError::MissingCredential)?
            .to_string();

        let modifiers = compose(&session.selections, &session.custom_modifiers);

        self.refining = true;
        let result = self
            .engine
            .refine(
                &session.current_prompt,
                &modifiers,
                &session.images,
                session.prompt_format,
                &api_key,
            )
            .await;
        self.refining = false;

        match result {
            Ok(text) => {
                session.set_prompt(&strip_code_fences(&text));
                info!("Prompt refined ({} chars)", session.current_prompt.len());
                Ok(())
            }
            Err(source) => {
                warn!("Refine stage failed: {source:#}");
                Err(StageError::Api {
                    stage: Stage::Refine,
                    source,
                })
            }
        }
    }

    /// Runs the configured number of generation requests concurrently and
    /// joins them all-or-nothing: if any request fails, no image from the
    /// batch is kept. Returns how many images were added to the gallery.
    pub async fn generate(
        &mut self,
        session: &mut Session,
        credentials: &CredentialStore,
    ) -> Result<usize, StageError> {
        if self.generating {
            return Err(StageError::Busy(Stage::Generate));
        }
        if session.current_prompt.trim().is_empty() {
            return Err(StageError::EmptyPrompt);
        }
        let api_key = credentials
            .active_secret()
            .ok_or(StageError::MissingCredential)?
            .to_string();

        let candidates = session.candidates();
        let request = GenerationRequest {
            prompt: session.current_prompt.clone(),
            aspect_ratio: session.generation.aspect_ratio,
            model: session.generation.model,
            resolution: session.generation.resolution,
            references: resolve_selected(&candidates, &session.selected_reference_ids),
        };
        let count = usize::from(
            session
                .generation
                .count
                .clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT),
        );

        self.generating = true;
        let result = try_join_all(
            (0..count).map(|_| self.engine.generate_one(&request, &api_key)),
        )
        .await;
        self.generating = false;

        match result {
            Ok(urls) => {
                let model_id = request.model.model_id().to_string();
                let batch: Vec<GeneratedImage> = urls
                    .into_iter()
                    .map(|url| GeneratedImage {
                        id: new_record_id(),
                        url,
                        prompt: request.prompt.clone(),
                        model: model_id.clone(),
                    })
                    .collect();
                let added = batch.len();
                session.record_generated(batch);
                info!("Generated {added} image(s)");
                Ok(added)
            }
            Err(source) => {
                warn!("Generate stage failed, discarding the whole batch: {source:#}");
                Err(StageError::Api {
                    stage: Stage::Generate,
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::store::StateStore;
    use crate::types::{AnalysisResult, PromptFormat, UploadedImage};

    #[derive(Default)]
    struct StubEngine {
        analyze_results: Mutex<VecDeque<Result<AnalysisResult>>>,
        refine_results: Mutex<VecDeque<Result<String>>>,
        generate_results: Mutex<VecDeque<Result<String>>>,
        requests: Mutex<Vec<GenerationRequest>>,
        calls: Mutex<usize>,
    }

    impl StubEngine {
        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl PromptEngine for StubEngine {
        async fn analyze(
            &self,
            _images: &[UploadedImage],
            _source_text: &str,
            _api_key: &str,
        ) -> Result<AnalysisResult> {
            *self.calls.lock().unwrap() += 1;
            self.analyze_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("no scripted analyze result")))
        }

        async fn refine(
            &self,
            _prompt: &str,
            _modifiers: &str,
            _images: &[UploadedImage],
            _format: PromptFormat,
            _api_key: &str,
        ) -> Result<String> {
            *self.calls.lock().unwrap() += 1;
            self.refine_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("no scripted refine result")))
        }

        async fn generate_one(
            &self,
            request: &GenerationRequest,
            _api_key: &str,
        ) -> Result<String> {
            *self.calls.lock().unwrap() += 1;
            self.requests.lock().unwrap().push(request.clone());
            self.generate_results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow!("no scripted generate result")))
        }
    }

    fn scratch_session() -> Session {
        let dir = std::env::temp_dir().join(format!("prism-pipeline-test-{}", new_record_id()));
        Session::load(StateStore::at(dir))
    }

    fn scratch_credentials(with_key: bool) -> CredentialStore {
        let dir = std::env::temp_dir().join(format!("prism-pipeline-creds-{}", new_record_id()));
        let mut credentials = CredentialStore::open(StateStore::at(dir));
        if with_key {
            credentials.add("test", "test-secret");
        }
        credentials
    }

    fn sample_analysis() -> AnalysisResult {
        AnalysisResult {
            description: "a narrow alley in the rain".to_string(),
            subject: "alley".to_string(),
            style: "noir".to_string(),
            composition: "low angle".to_string(),
            lighting: "sodium vapor".to_string(),
            suggested_prompt: "rain-slick alley, neon reflections".to_string(),
        }
    }

    #[tokio::test]
    async fn analyze_without_credential_redirects_before_calling_the_engine() {
        let mut pipeline = Pipeline::new(StubEngine::default());
        let mut session = scratch_session();
        session.set_source_text("a lighthouse");
        let credentials = scratch_credentials(false);

        let err = pipeline.analyze(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(err, StageError::MissingCredential));
        assert_eq!(pipeline.engine.call_count(), 0);
    }

    #[tokio::test]
    async fn analyze_requires_some_source_material() {
        let mut pipeline = Pipeline::new(StubEngine::default());
        let mut session = scratch_session();
        let credentials = scratch_credentials(true);

        let err = pipeline.analyze(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(err, StageError::EmptySource));
    }

    #[tokio::test]
    async fn successful_analyze_seeds_the_prompt() {
        let engine = StubEngine::default();
        engine
            .analyze_results
            .lock()
            .unwrap()
            .push_back(Ok(sample_analysis()));
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.set_source_text("a lighthouse");
        let credentials = scratch_credentials(true);

        pipeline.analyze(&mut session, &credentials).await.unwrap();
        assert_eq!(session.current_prompt, "rain-slick alley, neon reflections");
        assert_eq!(session.analysis.as_ref().unwrap().subject, "alley");
    }

    #[tokio::test]
    async fn failed_analyze_leaves_analysis_and_prompt_untouched() {
        let engine = StubEngine::default();
        engine
            .analyze_results
            .lock()
            .unwrap()
            .push_back(Err(anyhow!("boom")));
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.set_source_text("a lighthouse");
        session.set_prompt("keep me");
        let credentials = scratch_credentials(true);

        let err = pipeline.analyze(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(
            err,
            StageError::Api {
                stage: Stage::Analyze,
                ..
            }
        ));
        assert_eq!(session.current_prompt, "keep me");
        assert!(session.analysis.is_none());
    }

    #[tokio::test]
    async fn refine_replaces_the_prompt_with_fence_stripped_text() {
        let engine = StubEngine::default();
        engine
            .refine_results
            .lock()
            .unwrap()
            .push_back(Ok("```json\n{\"subject\": \"fox\"}\n```".to_string()));
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.set_prompt("a fox");
        let credentials = scratch_credentials(true);

        pipeline.refine(&mut session, &credentials).await.unwrap();
        assert_eq!(session.current_prompt, "{\"subject\": \"fox\"}");
    }

    #[tokio::test]
    async fn refine_requires_a_prompt_and_preserves_it_on_failure() {
        let engine = StubEngine::default();
        engine
            .refine_results
            .lock()
            .unwrap()
            .push_back(Err(anyhow!("rate limited")));
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        let credentials = scratch_credentials(true);

        let err = pipeline.refine(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(err, StageError::EmptyPrompt));

        session.set_prompt("original prompt");
        let err = pipeline.refine(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(
            err,
            StageError::Api {
                stage: Stage::Refine,
                ..
            }
        ));
        assert_eq!(session.current_prompt, "original prompt");
    }

    #[tokio::test]
    async fn partial_generate_failure_discards_the_whole_batch() {
        let engine = StubEngine::default();
        {
            let mut results = engine.generate_results.lock().unwrap();
            results.push_back(Ok("data:image/png;base64,YQ==".to_string()));
            results.push_back(Err(anyhow!("model overloaded")));
            results.push_back(Ok("data:image/png;base64,Yg==".to_string()));
        }
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.set_prompt("three lanterns");
        let mut generation = session.generation.clone();
        generation.count = 3;
        session.set_generation(generation);
        let credentials = scratch_credentials(true);

        let err = pipeline.generate(&mut session, &credentials).await.unwrap_err();
        assert!(matches!(
            err,
            StageError::Api {
                stage: Stage::Generate,
                ..
            }
        ));
        assert!(session.gallery.is_empty());
    }

    #[tokio::test]
    async fn successful_generate_prepends_a_full_batch() {
        let engine = StubEngine::default();
        {
            let mut results = engine.generate_results.lock().unwrap();
            results.push_back(Ok("data:image/png;base64,YQ==".to_string()));
            results.push_back(Ok("data:image/png;base64,Yg==".to_string()));
        }
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.set_prompt("two lanterns");
        let mut generation = session.generation.clone();
        generation.count = 2;
        session.set_generation(generation);
        let credentials = scratch_credentials(true);

        let added = pipeline.generate(&mut session, &credentials).await.unwrap();
        assert_eq!(added, 2);
        assert_eq!(session.gallery.len(), 2);
        assert!(session
            .gallery
            .iter()
            .all(|image| image.prompt == "two lanterns"));

        // nothing was selected, so the engine must have seen no references
        let requests = pipeline.engine.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|request| request.references.is_none()));
    }

    #[tokio::test]
    async fn generate_sends_selected_references_with_every_request() {
        let engine = StubEngine::default();
        {
            let mut results = engine.generate_results.lock().unwrap();
            results.push_back(Ok("data:image/png;base64,YQ==".to_string()));
        }
        let mut pipeline = Pipeline::new(engine);
        let mut session = scratch_session();
        session.add_images(vec![UploadedImage {
            id: "u1".to_string(),
            data: "Zm9v".to_string(),
            mime_type: "image/png".to_string(),
        }]);
        session.toggle_reference("upload-u1");
        session.set_prompt("anchored output");
        let credentials = scratch_credentials(true);

        pipeline.generate(&mut session, &credentials).await.unwrap();
        let requests = pipeline.engine.requests.lock().unwrap();
        let references = requests[0].references.as_ref().unwrap();
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].mime_type, "image/png");
    }
}
