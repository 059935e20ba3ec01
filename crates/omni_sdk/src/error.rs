use omni_chain::{ChainError, ChainFamily, Network};
use omni_rpc_client::RpcClientError;

/// Configuration errors raised while creating an [`crate::Sdk`] handle.
///
/// These are the only errors the SDK ever raises; per-call failures are
/// captured in the [`omni_rpc_client::RpcResult`] envelope instead.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The network could not be resolved.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// The client could not be constructed.
    #[error(transparent)]
    Client(#[from] RpcClientError),

    /// The network belongs to a different chain family than the requested
    /// handle.
    #[error("network '{network}' belongs to family '{}', not '{expected}'", network.family())]
    FamilyMismatch {
        /// The configured network.
        network: Network,
        /// The family of the requested handle.
        expected: ChainFamily,
    },
}
