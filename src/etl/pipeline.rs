//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use eyre::Result;
use std::fmt;

/// One of the three pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extract,
    Transform,
    Load,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extract => write!(f, "extract"),
            Self::Transform => write!(f, "transform"),
            Self::Load => write!(f, "load"),
        }
    }
}

/// Progress of a pipeline run
///
/// `Idle -> Extracting -> Transforming -> Loading -> Done`, or `Failed` from
/// any in-progress state. `Done` and `Failed` are terminal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Extracting,
    Transforming,
    Loading,
    Done,
    Failed { stage: Stage },
}

impl PipelineState {
    /// The stage currently executing, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Extracting => Some(Stage::Extract),
            Self::Transforming => Some(Stage::Transform),
            Self::Loading => Some(Stage::Load),
            _ => None,
        }
    }
}

/// ETL facade that runs an Extractor, a Transformer and a Loader in sequence
///
/// # Type Parameters
/// - `E`: Extractor type
/// - `T`: Transformer type (must transform `E::Output`)
/// - `L`: Loader type (must load `T::Output`)
///
/// # Example
/// ```no_run
/// use keycount::etl::Pipeline;
/// use keycount::{FileExtractor, JsonFileLoader, KeyCounter};
///
/// # async fn example() -> eyre::Result<()> {
/// let mut pipeline = Pipeline::new(
///     FileExtractor::new("input.txt"),
///     KeyCounter::new(),
///     JsonFileLoader::new("output.json"),
/// );
///
/// let count = pipeline.run().await?;
/// println!("Wrote {} keys", count);
/// # Ok(())
/// # }
/// ```
pub struct Pipeline<E, T, L> {
    extractor: E,
    transformer: T,
    loader: L,
    state: PipelineState,
}

impl<E, T, L> Pipeline<E, T, L>
where
    E: Extractor,
    T: Transformer<Input = E::Output>,
    L: Loader<Input = T::Output>,
{
    /// Create a new pipeline
    pub fn new(extractor: E, transformer: T, loader: L) -> Self {
        Self {
            extractor,
            transformer,
            loader,
            state: PipelineState::Idle,
        }
    }

    /// State reached by the most recent run
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run the complete ETL pipeline
    ///
    /// Steps:
    /// 1. Extract the raw value from the source
    /// 2. Transform it
    /// 3. Load the result to the destination
    ///
    /// Returns the number of entries the loader wrote
    ///
    /// # Errors
    /// Returns the first failing stage's error unchanged. Later stages do not run.
    pub async fn run(&mut self) -> Result<usize> {
        log::info!("Starting ETL pipeline");

        // Extract
        self.enter(PipelineState::Extracting);
        let extracted = self.extractor.extract().await;
        let raw = match extracted {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(e)),
        };

        // Transform
        self.enter(PipelineState::Transforming);
        let result = self.transformer.transform(raw);
        let transformed = match result {
            Ok(transformed) => transformed,
            Err(e) => return Err(self.fail(e)),
        };

        // Load
        self.enter(PipelineState::Loading);
        let loaded = self.loader.load(transformed).await;
        let count = match loaded {
            Ok(count) => count,
            Err(e) => return Err(self.fail(e)),
        };
        log::info!("Loaded {} entries", count);

        self.state = PipelineState::Done;
        Ok(count)
    }

    fn enter(&mut self, state: PipelineState) {
        if let Some(stage) = state.stage() {
            log::debug!("Entering {} stage", stage);
        }
        self.state = state;
    }

    fn fail(&mut self, err: eyre::Report) -> eyre::Report {
        // fail() is only reached from an in-progress state
        let stage = self.state.stage().unwrap_or(Stage::Extract);
        log::debug!("Pipeline failed during {} stage: {}", stage, err);
        self.state = PipelineState::Failed { stage };
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::Result;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    struct MockExtractor(Option<&'static str>);

    impl Extractor for MockExtractor {
        type Output = String;
        async fn extract(&self) -> Result<Self::Output> {
            match self.0 {
                Some(text) => Ok(text.to_string()),
                None => eyre::bail!("source gone"),
            }
        }
    }

    struct LineCounter(Arc<Mutex<bool>>);

    impl Transformer for LineCounter {
        type Input = String;
        type Output = Vec<String>;
        fn transform(&self, input: Self::Input) -> Result<Self::Output> {
            *self.0.lock().unwrap() = true;
            Ok(input.lines().map(str::to_string).collect())
        }
    }

    struct RecordingLoader {
        loaded: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl Loader for RecordingLoader {
        type Input = Vec<String>;
        async fn load(&self, input: Self::Input) -> Result<usize> {
            if self.fail {
                eyre::bail!("destination gone");
            }
            let count = input.len();
            *self.loaded.lock().unwrap() = input;
            Ok(count)
        }
    }

    fn recording(fail: bool) -> (RecordingLoader, Arc<Mutex<Vec<String>>>) {
        let loaded = Arc::new(Mutex::new(Vec::new()));
        (
            RecordingLoader {
                loaded: loaded.clone(),
                fail,
            },
            loaded,
        )
    }

    #[tokio::test]
    async fn test_pipeline() {
        let transformed = Arc::new(Mutex::new(false));
        let (loader, loaded) = recording(false);

        let mut pipeline = Pipeline::new(
            MockExtractor(Some("a\nb\nc")),
            LineCounter(transformed.clone()),
            loader,
        );
        assert_eq!(pipeline.state(), PipelineState::Idle);

        let count = pipeline.run().await.unwrap();
        assert_eq!(count, 3);
        assert!(*transformed.lock().unwrap());
        assert_eq!(*loaded.lock().unwrap(), vec!["a", "b", "c"]);
        assert_eq!(pipeline.state(), PipelineState::Done);
    }

    #[tokio::test]
    async fn test_empty_input_still_loads() {
        let (loader, loaded) = recording(false);
        let mut pipeline = Pipeline::new(
            MockExtractor(Some("")),
            LineCounter(Arc::new(Mutex::new(false))),
            loader,
        );

        let count = pipeline.run().await.unwrap();
        assert_eq!(count, 0);
        assert!(loaded.lock().unwrap().is_empty());
        assert_eq!(pipeline.state(), PipelineState::Done);
    }

    #[tokio::test]
    async fn test_extract_failure_skips_later_stages() {
        let transformed = Arc::new(Mutex::new(false));
        let (loader, _) = recording(false);
        let mut pipeline =
            Pipeline::new(MockExtractor(None), LineCounter(transformed.clone()), loader);

        let err = pipeline.run().await.unwrap_err();
        assert_eq!(err.to_string(), "source gone");
        assert!(!*transformed.lock().unwrap());
        assert_eq!(
            pipeline.state(),
            PipelineState::Failed {
                stage: Stage::Extract
            }
        );
    }

    #[tokio::test]
    async fn test_load_failure_after_transform() {
        let transformed = Arc::new(Mutex::new(false));
        let (loader, _) = recording(true);
        let mut pipeline = Pipeline::new(
            MockExtractor(Some("x")),
            LineCounter(transformed.clone()),
            loader,
        );

        let err = pipeline.run().await.unwrap_err();
        assert_eq!(err.to_string(), "destination gone");
        assert!(*transformed.lock().unwrap());
        assert_eq!(pipeline.state(), PipelineState::Failed { stage: Stage::Load });
    }

    struct RejectingTransformer;

    impl Transformer for RejectingTransformer {
        type Input = String;
        type Output = Vec<String>;
        fn transform(&self, _input: Self::Input) -> Result<Self::Output> {
            eyre::bail!("malformed input")
        }
    }

    struct CountingLoader(Arc<AtomicUsize>);

    impl Loader for CountingLoader {
        type Input = Vec<String>;
        async fn load(&self, input: Self::Input) -> Result<usize> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(input.len())
        }
    }

    #[tokio::test]
    async fn test_transform_failure_skips_load() {
        let load_calls = Arc::new(AtomicUsize::new(0));
        let mut pipeline = Pipeline::new(
            MockExtractor(Some("a\nb")),
            RejectingTransformer,
            CountingLoader(load_calls.clone()),
        );

        let err = pipeline.run().await.unwrap_err();
        assert_eq!(err.to_string(), "malformed input");
        assert_eq!(load_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            pipeline.state(),
            PipelineState::Failed {
                stage: Stage::Transform
            }
        );
    }
}
