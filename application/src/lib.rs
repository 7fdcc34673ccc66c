//! Application layer for city-mobility
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{
        GatewayError, ImageGateway, ImageGenerationRequest, LlmGateway, SafetySetting,
        TextGenerationRequest,
    },
    progress::{NoProgress, ProgressNotifier},
    route_reasoner::{ReasoningError, RouteReasoner},
    route_visualizer::{IllustrationError, RetiredVisualizer, RouteVisualizer},
};
pub use use_cases::illustrate_route::GeneratedImageVisualizer;
pub use use_cases::optimize_route::{
    INVALID_INPUT_MESSAGE, OPERATOR_LOG_TARGET, OptimizeRouteOutcome, OptimizeRouteUseCase,
    REASONING_FAILED_MESSAGE, SUCCESS_MESSAGE, reject_invalid,
};
pub use use_cases::predict_parking::{
    PredictParkingError, PredictParkingInput, PredictParkingUseCase,
};
pub use use_cases::reason_route::GatewayRouteReasoner;
