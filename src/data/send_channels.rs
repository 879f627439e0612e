use crate::common::{DetectionOutcome, FusionInput};

/// Worker side of a fusion channel pair.
#[derive(Debug)]
pub struct FusionState {
    pub input_rx: crossbeam_channel::Receiver<Box<FusionInput>>,
    pub outcome_tx: crossbeam_channel::Sender<Box<DetectionOutcome>>,
}

/// Caller side of a fusion channel pair.
#[derive(Debug)]
pub struct SendState {
    pub input_tx: crossbeam_channel::Sender<Box<FusionInput>>,
    pub outcome_rx: crossbeam_channel::Receiver<Box<DetectionOutcome>>,
}

/// Creates a connected pair of unbounded channels for one worker.
pub fn fusion_channels() -> (SendState, FusionState) {
    let (input_tx, input_rx) = crossbeam_channel::unbounded();
    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();

    (
        SendState { input_tx, outcome_rx },
        FusionState { input_rx, outcome_tx },
    )
}
