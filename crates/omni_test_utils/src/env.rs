//! Endpoint lookups for the `test-remote` suites.
//!
//! Every URL can be overridden through an environment variable so CI can
//! point the live suites at dedicated nodes; the public endpoints are the
//! fallback.

fn env_var_or(name: &'static str, default: &'static str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Tron mainnet node URL (`TRON_RPC_URL` override).
pub fn tron_mainnet_url() -> String {
    env_var_or("TRON_RPC_URL", "https://api.trongrid.io")
}

/// Tron Shasta testnet node URL (`TRON_SHASTA_RPC_URL` override).
pub fn tron_shasta_url() -> String {
    env_var_or("TRON_SHASTA_RPC_URL", "https://api.shasta.trongrid.io")
}

/// Flare mainnet node URL (`FLARE_RPC_URL` override).
pub fn flare_mainnet_url() -> String {
    env_var_or("FLARE_RPC_URL", "https://flare-api.flare.network/ext/C/rpc")
}

/// Flare Coston testnet node URL (`FLARE_COSTON_RPC_URL` override).
pub fn flare_coston_url() -> String {
    env_var_or(
        "FLARE_COSTON_RPC_URL",
        "https://coston-api.flare.network/ext/C/rpc",
    )
}
