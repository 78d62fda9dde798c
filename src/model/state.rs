/// Marker for a model that is **still being trained**.
///
/// `LinearModel<T, Unfitted>` exposes its parameters mutably to the trainer but has
/// no `predict`, so an untrained model cannot be used for inference by accident.
pub struct Unfitted;

/// Marker for a model whose training has finished.
///
/// Produced by [`Trainer::fit`](crate::trainer::Trainer::fit). A fitted model holds
/// only the learned parameters, no hyperparameters or optimizer state.
pub struct Fitted;
