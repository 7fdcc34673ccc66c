//! Optimize Route use case.
//!
//! The single entry point for a route submission:
//!
//! 1. Validate the raw form. Invalid input never reaches a backend.
//! 2. Ask the [`RouteReasoner`] once. A failure here is the only one the
//!    caller sees, and only as a static message.
//! 3. Ask the [`RouteVisualizer`] for a visual, best-effort.
//! 4. Merge into an [`OptimizedRoute`].

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::route_reasoner::RouteReasoner;
use crate::ports::route_visualizer::{RetiredVisualizer, RouteVisualizer};
use mobility_domain::{
    FieldErrors, IllustrationRequest, OptimizedRoute, PipelineStage, RouteForm,
    validate_route_form,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please check the fields.";
pub const REASONING_FAILED_MESSAGE: &str =
    "An unexpected error occurred while optimizing the route. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Route optimized successfully.";

/// Tracing target for backend failure detail. The binary keeps it off the
/// console and sends it to the log file only.
pub const OPERATOR_LOG_TARGET: &str = "operator";

/// What the caller gets back. Exactly one variant per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizeRouteOutcome {
    /// Field-level validation errors; no backend was contacted
    Rejected { message: String, errors: FieldErrors },
    /// Form-level error; the backend detail is only in the logs
    Failed { message: String },
    /// Merged route, illustration present or absent
    Optimized { message: String, data: OptimizedRoute },
}

impl OptimizeRouteOutcome {
    pub fn message(&self) -> &str {
        match self {
            OptimizeRouteOutcome::Rejected { message, .. }
            | OptimizeRouteOutcome::Failed { message }
            | OptimizeRouteOutcome::Optimized { message, .. } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OptimizeRouteOutcome::Optimized { .. })
    }

    pub fn route(&self) -> Option<&OptimizedRoute> {
        match self {
            OptimizeRouteOutcome::Optimized { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            OptimizeRouteOutcome::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }

    fn rejected(errors: FieldErrors) -> Self {
        OptimizeRouteOutcome::Rejected {
            message: INVALID_INPUT_MESSAGE.to_string(),
            errors,
        }
    }
}

/// Validate a form without building a pipeline.
///
/// Lets a caller report field errors before it wires any backend.
pub fn reject_invalid(form: &RouteForm) -> Option<OptimizeRouteOutcome> {
    validate_route_form(form)
        .err()
        .map(OptimizeRouteOutcome::rejected)
}

/// Walks a single request through [`PipelineStage`]s
struct StageTracker<'a> {
    stage: PipelineStage,
    progress: &'a dyn ProgressNotifier,
}

impl<'a> StageTracker<'a> {
    fn start(progress: &'a dyn ProgressNotifier) -> Self {
        progress.on_stage(PipelineStage::Received);
        Self {
            stage: PipelineStage::Received,
            progress,
        }
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.stage.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.stage,
            next
        );
        debug!("Route pipeline: {} -> {}", self.stage.as_str(), next.as_str());
        self.stage = next;
        self.progress.on_stage(next);
    }
}

/// Use case for optimizing a route
#[derive(Clone)]
pub struct OptimizeRouteUseCase {
    reasoner: Arc<dyn RouteReasoner>,
    visualizer: Arc<dyn RouteVisualizer>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl OptimizeRouteUseCase {
    /// Create with the retired (always unavailable) visualizer
    pub fn new(reasoner: Arc<dyn RouteReasoner>) -> Self {
        Self {
            reasoner,
            visualizer: Arc::new(RetiredVisualizer),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_visualizer(mut self, visualizer: Arc<dyn RouteVisualizer>) -> Self {
        self.visualizer = visualizer;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, form: RouteForm) -> OptimizeRouteOutcome {
        self.execute_with_progress(form, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        form: RouteForm,
        progress: &dyn ProgressNotifier,
    ) -> OptimizeRouteOutcome {
        let mut tracker = StageTracker::start(progress);

        // Step 1: validation
        tracker.advance(PipelineStage::Validating);
        let request = match validate_route_form(&form) {
            Ok(request) => request,
            Err(errors) => {
                info!("Route request rejected: {} invalid field(s)", errors.len());
                tracker.advance(PipelineStage::Rejected);
                return OptimizeRouteOutcome::rejected(errors);
            }
        };
        tracker.advance(PipelineStage::Validated);

        info!(
            "Optimizing route: {} -> {}",
            request.start_location(),
            request.end_location()
        );

        // Step 2: reasoning (fatal on failure, never retried)
        tracker.advance(PipelineStage::ReasoningInFlight);
        let route = match self.reasoner.optimize(&request).await {
            Ok(route) => route,
            Err(e) => {
                error!("Route reasoning failed");
                error!(target: OPERATOR_LOG_TARGET, "Route reasoning failed: {:?}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "reasoning_failed",
                    serde_json::json!({
                        "start": request.start_location(),
                        "end": request.end_location(),
                        "error": e.to_string(),
                    }),
                ));
                tracker.advance(PipelineStage::ReasoningFailed);
                return OptimizeRouteOutcome::Failed {
                    message: REASONING_FAILED_MESSAGE.to_string(),
                };
            }
        };
        tracker.advance(PipelineStage::ReasoningSucceeded);

        // Step 3: illustration (best-effort)
        tracker.advance(PipelineStage::IllustrationInFlight);
        let illustration_request = IllustrationRequest::new(
            request.start_location(),
            request.end_location(),
            route.route_summary.as_str(),
        );
        let illustration = match self.visualizer.illustrate(&illustration_request).await {
            Ok(illustration) => Some(illustration),
            Err(e) => {
                warn!("Route visual unavailable, continuing without it");
                warn!(target: OPERATOR_LOG_TARGET, "Map generation failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "illustration_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                None
            }
        };
        tracker.advance(PipelineStage::IllustrationDone);

        // Step 4: merge
        let data = OptimizedRoute::new(route, illustration);
        info!(
            "Route optimized (illustration: {})",
            if data.has_illustration() { "present" } else { "absent" }
        );

        OptimizeRouteOutcome::Optimized {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::route_reasoner::ReasoningError;
    use crate::ports::route_visualizer::IllustrationError;
    use async_trait::async_trait;
    use mobility_domain::{FormField, Illustration, ReplyParseError, RouteRequest, RouteResult};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    enum ReasonerBehavior {
        Succeed,
        FailBackend(&'static str),
        FailShape,
    }

    struct MockReasoner {
        behavior: ReasonerBehavior,
        calls: AtomicUsize,
        seen: Mutex<Vec<RouteRequest>>,
    }

    impl MockReasoner {
        fn new(behavior: ReasonerBehavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    /// Each call returns a different answer, like the real backend
    fn canned_route(call: usize) -> RouteResult {
        RouteResult {
            optimal_route: format!(
                "1. Walk to Central Secretariat\n2. Yellow Line to Qutub Minar (variant {})",
                call
            ),
            estimated_travel_time: format!("{} minutes", 40 + call),
            cost_estimate: "₹50".to_string(),
            route_summary: "Yellow Line metro".to_string(),
        }
    }

    #[async_trait]
    impl RouteReasoner for MockReasoner {
        async fn optimize(&self, request: &RouteRequest) -> Result<RouteResult, ReasoningError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            match self.behavior {
                ReasonerBehavior::Succeed => Ok(canned_route(call)),
                ReasonerBehavior::FailBackend(detail) => Err(ReasoningError::Backend(
                    GatewayError::ConnectionError(detail.to_string()),
                )),
                ReasonerBehavior::FailShape => Err(ReasoningError::InvalidReply {
                    error: ReplyParseError::MissingField("costEstimate"),
                    raw: "{}".to_string(),
                }),
            }
        }
    }

    enum VisualizerBehavior {
        Reference(&'static str),
        Unavailable,
        NoMedia,
        Throw,
    }

    struct MockVisualizer {
        behavior: VisualizerBehavior,
        calls: AtomicUsize,
        seen: Mutex<Vec<IllustrationRequest>>,
    }

    impl MockVisualizer {
        fn new(behavior: VisualizerBehavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RouteVisualizer for MockVisualizer {
        async fn illustrate(
            &self,
            request: &IllustrationRequest,
        ) -> Result<Illustration, IllustrationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            match self.behavior {
                VisualizerBehavior::Reference(r) => Ok(Illustration::new(r)),
                VisualizerBehavior::Unavailable => Ok(Illustration::unavailable()),
                VisualizerBehavior::NoMedia => Err(IllustrationError::NoMedia),
                VisualizerBehavior::Throw => Err(IllustrationError::Backend(
                    GatewayError::HttpStatus {
                        status: 500,
                        body: "image backend exploded".to_string(),
                    },
                )),
            }
        }
    }

    struct RecordingProgress {
        stages: Mutex<Vec<PipelineStage>>,
    }

    impl RecordingProgress {
        fn new() -> Self {
            Self {
                stages: Mutex::new(Vec::new()),
            }
        }
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_stage(&self, stage: PipelineStage) {
            self.stages.lock().unwrap().push(stage);
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl RecordingLogger {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case(
        reasoner: &Arc<MockReasoner>,
        visualizer: &Arc<MockVisualizer>,
    ) -> OptimizeRouteUseCase {
        OptimizeRouteUseCase::new(reasoner.clone()).with_visualizer(visualizer.clone())
    }

    fn delhi_form() -> RouteForm {
        RouteForm::new("India Gate, New Delhi", "Qutub Minar, New Delhi")
    }

    fn assert_route_contract(route: &OptimizedRoute) {
        assert!(!route.route.route_summary.is_empty());
        assert!(!route.route.estimated_travel_time.is_empty());
        assert!(!route.route.cost_estimate.is_empty());
        assert!(!route.route.optimal_route.is_empty());
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_short_start_is_rejected_without_backend_calls() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));

        let outcome = use_case(&reasoner, &visualizer)
            .execute(RouteForm::new("AB", "Qutub Minar, New Delhi"))
            .await;

        let errors = outcome.field_errors().expect("Expected Rejected");
        assert!(errors.contains(FormField::StartLocation));
        assert!(!errors.contains(FormField::EndLocation));
        assert_eq!(outcome.message(), INVALID_INPUT_MESSAGE);
        assert_eq!(reasoner.calls(), 0);
        assert_eq!(visualizer.calls(), 0);
    }

    #[test]
    fn test_reject_invalid_reports_field_errors() {
        let outcome =
            reject_invalid(&RouteForm::new("AB", "Qutub Minar")).expect("Expected Rejected");

        assert_eq!(outcome.message(), INVALID_INPUT_MESSAGE);
        let errors = outcome.field_errors().unwrap();
        assert!(errors.contains(FormField::StartLocation));
        assert!(!errors.contains(FormField::EndLocation));
        assert!(reject_invalid(&delhi_form()).is_none());
    }

    #[tokio::test]
    async fn test_every_short_input_is_rejected() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));
        let uc = use_case(&reasoner, &visualizer);

        for (start, end) in [("", "Saket"), ("Saket", "ab"), ("x", "y"), ("  ", "Hauz Khas")] {
            let outcome = uc.execute(RouteForm::new(start, end)).await;
            assert!(outcome.field_errors().is_some(), "{:?} -> {:?}", start, end);
        }
        assert_eq!(reasoner.calls(), 0);
        assert_eq!(visualizer.calls(), 0);
    }

    // ==================== Reasoning ====================

    #[tokio::test]
    async fn test_delhi_scenario_succeeds() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.message(), SUCCESS_MESSAGE);
        assert_route_contract(outcome.route().unwrap());
        assert_eq!(reasoner.calls(), 1);

        let seen = reasoner.seen.lock().unwrap();
        assert_eq!(seen[0].start_location(), "India Gate, New Delhi");
        assert_eq!(seen[0].end_location(), "Qutub Minar, New Delhi");
    }

    #[tokio::test]
    async fn test_backend_failure_yields_generic_message_only() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::FailBackend(
            "api key leaked-secret-123 rejected",
        )));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        assert_eq!(
            outcome,
            OptimizeRouteOutcome::Failed {
                message: REASONING_FAILED_MESSAGE.to_string()
            }
        );
        let rendered = serde_json::to_string(&outcome).unwrap();
        assert!(!rendered.contains("leaked-secret-123"));
        assert_eq!(reasoner.calls(), 1);
        assert_eq!(visualizer.calls(), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_detail_goes_to_transcript() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::FailBackend(
            "api key leaked-secret-123 rejected",
        )));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));
        let logger = Arc::new(RecordingLogger::new());

        let outcome = use_case(&reasoner, &visualizer)
            .with_conversation_logger(logger.clone())
            .execute(delhi_form())
            .await;

        assert_eq!(outcome.message(), REASONING_FAILED_MESSAGE);
        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "reasoning_failed");
        assert!(events[0].1["error"]
            .as_str()
            .unwrap()
            .contains("leaked-secret-123"));
    }

    #[tokio::test]
    async fn test_shape_failure_is_not_retried() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::FailShape));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        assert_eq!(outcome.message(), REASONING_FAILED_MESSAGE);
        assert_eq!(reasoner.calls(), 1);
        assert_eq!(visualizer.calls(), 0);
    }

    #[tokio::test]
    async fn test_resubmission_is_independent() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));
        let uc = use_case(&reasoner, &visualizer);

        let first = uc.execute(delhi_form()).await;
        let second = uc.execute(delhi_form()).await;

        // Same input may give different answers; only the contract is stable
        assert_route_contract(first.route().unwrap());
        assert_route_contract(second.route().unwrap());
        assert_eq!(reasoner.calls(), 2);
    }

    // ==================== Illustration ====================

    #[tokio::test]
    async fn test_illustration_uses_route_summary() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Reference(
            "https://maps.example/route.png",
        )));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        let route = outcome.route().unwrap();
        assert_eq!(
            route.illustration.as_deref(),
            Some("https://maps.example/route.png")
        );
        let seen = visualizer.seen.lock().unwrap();
        assert_eq!(seen[0].route_summary, "Yellow Line metro");
        assert_eq!(seen[0].start_location, "India Gate, New Delhi");
        assert_eq!(seen[0].end_location, "Qutub Minar, New Delhi");
    }

    #[tokio::test]
    async fn test_illustration_failure_keeps_route() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Throw));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        assert!(outcome.is_success());
        let route = outcome.route().unwrap();
        assert_route_contract(route);
        assert_eq!(route.route, canned_route(0));
        assert!(route.illustration.is_none());
        assert_eq!(visualizer.calls(), 1);
    }

    #[tokio::test]
    async fn test_illustration_failure_detail_goes_to_transcript() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Throw));
        let logger = Arc::new(RecordingLogger::new());

        let outcome = use_case(&reasoner, &visualizer)
            .with_conversation_logger(logger.clone())
            .execute(delhi_form())
            .await;

        assert!(outcome.is_success());
        let events = logger.events.lock().unwrap();
        assert_eq!(events[0].0, "illustration_failed");
        assert!(events[0].1["error"]
            .as_str()
            .unwrap()
            .contains("image backend exploded"));
    }

    #[tokio::test]
    async fn test_no_media_leaves_illustration_absent() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::NoMedia));

        let outcome = use_case(&reasoner, &visualizer).execute(delhi_form()).await;

        let route = outcome.route().unwrap();
        assert_route_contract(route);
        assert!(!route.has_illustration());
    }

    #[tokio::test]
    async fn test_default_visualizer_is_retired() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));

        let outcome = OptimizeRouteUseCase::new(reasoner).execute(delhi_form()).await;

        assert!(outcome.route().unwrap().illustration.is_none());
    }

    // ==================== Progress ====================

    #[tokio::test]
    async fn test_progress_follows_state_machine() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Throw));
        let progress = RecordingProgress::new();

        use_case(&reasoner, &visualizer)
            .execute_with_progress(delhi_form(), &progress)
            .await;

        assert_eq!(
            *progress.stages.lock().unwrap(),
            vec![
                PipelineStage::Received,
                PipelineStage::Validating,
                PipelineStage::Validated,
                PipelineStage::ReasoningInFlight,
                PipelineStage::ReasoningSucceeded,
                PipelineStage::IllustrationInFlight,
                PipelineStage::IllustrationDone,
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_stops_at_rejected() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::Succeed));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));
        let progress = RecordingProgress::new();

        use_case(&reasoner, &visualizer)
            .execute_with_progress(RouteForm::new("AB", "CD"), &progress)
            .await;

        let stages = progress.stages.lock().unwrap();
        assert_eq!(stages.last(), Some(&PipelineStage::Rejected));
        assert!(stages.last().unwrap().is_terminal());
    }

    #[tokio::test]
    async fn test_progress_stops_at_reasoning_failed() {
        let reasoner = Arc::new(MockReasoner::new(ReasonerBehavior::FailShape));
        let visualizer = Arc::new(MockVisualizer::new(VisualizerBehavior::Unavailable));
        let progress = RecordingProgress::new();

        use_case(&reasoner, &visualizer)
            .execute_with_progress(delhi_form(), &progress)
            .await;

        assert_eq!(
            progress.stages.lock().unwrap().last(),
            Some(&PipelineStage::ReasoningFailed)
        );
    }

    #[test]
    fn test_outcome_serialization_tags() {
        let outcome = OptimizeRouteOutcome::Failed {
            message: REASONING_FAILED_MESSAGE.to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["message"], REASONING_FAILED_MESSAGE);
    }
}
