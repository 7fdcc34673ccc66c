//! Pipeline state machine
//!
//! One instance per submission. There are no retry edges: a resubmission
//! starts a fresh instance at [`PipelineStage::Received`].

use serde::{Deserialize, Serialize};

/// Stage of a single route-optimization request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Received,
    Validating,
    /// Terminal: field errors returned, no backend contacted
    Rejected,
    Validated,
    ReasoningInFlight,
    /// Terminal: generic form error returned
    ReasoningFailed,
    ReasoningSucceeded,
    IllustrationInFlight,
    /// Terminal: route returned, illustration present or absent
    IllustrationDone,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::Validating => "validating",
            PipelineStage::Rejected => "rejected",
            PipelineStage::Validated => "validated",
            PipelineStage::ReasoningInFlight => "reasoning_in_flight",
            PipelineStage::ReasoningFailed => "reasoning_failed",
            PipelineStage::ReasoningSucceeded => "reasoning_succeeded",
            PipelineStage::IllustrationInFlight => "illustration_in_flight",
            PipelineStage::IllustrationDone => "illustration_done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::Received => "Received",
            PipelineStage::Validating => "Validating locations",
            PipelineStage::Rejected => "Rejected",
            PipelineStage::Validated => "Locations validated",
            PipelineStage::ReasoningInFlight => "Optimizing route",
            PipelineStage::ReasoningFailed => "Route optimization failed",
            PipelineStage::ReasoningSucceeded => "Route optimized",
            PipelineStage::IllustrationInFlight => "Preparing route visual",
            PipelineStage::IllustrationDone => "Done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineStage::Rejected | PipelineStage::ReasoningFailed | PipelineStage::IllustrationDone
        )
    }

    /// Whether `next` is a legal successor of this stage
    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        matches!(
            (self, next),
            (Received, Validating)
                | (Validating, Rejected)
                | (Validating, Validated)
                | (Validated, ReasoningInFlight)
                | (ReasoningInFlight, ReasoningFailed)
                | (ReasoningInFlight, ReasoningSucceeded)
                | (ReasoningSucceeded, IllustrationInFlight)
                | (IllustrationInFlight, IllustrationDone)
        )
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PipelineStage::*;

    const ALL: [PipelineStage; 9] = [
        Received,
        Validating,
        Rejected,
        Validated,
        ReasoningInFlight,
        ReasoningFailed,
        ReasoningSucceeded,
        IllustrationInFlight,
        IllustrationDone,
    ];

    #[test]
    fn test_terminal_stages() {
        let terminal: Vec<_> = ALL.iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, [&Rejected, &ReasoningFailed, &IllustrationDone]);
    }

    #[test]
    fn test_terminal_stages_have_no_successor() {
        for stage in ALL.iter().filter(|s| s.is_terminal()) {
            assert!(ALL.iter().all(|next| !stage.can_transition_to(*next)));
        }
    }

    #[test]
    fn test_no_retry_edges() {
        assert!(!ReasoningFailed.can_transition_to(ReasoningInFlight));
        assert!(!ReasoningInFlight.can_transition_to(ReasoningInFlight));
        assert!(!IllustrationInFlight.can_transition_to(ReasoningInFlight));
        assert!(!Rejected.can_transition_to(Validating));
    }

    #[test]
    fn test_happy_path() {
        let path = [
            Received,
            Validating,
            Validated,
            ReasoningInFlight,
            ReasoningSucceeded,
            IllustrationInFlight,
            IllustrationDone,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{:?}", pair);
        }
    }

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&ReasoningInFlight).unwrap();
        assert_eq!(json, "\"reasoning_in_flight\"");
    }
}
