//! Server configuration sourced from environment variables.

/// Runtime configuration for the server and its collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// The single accepted caller token for the plan gateway.
    pub api_token: String,
    /// Path to the contract script handed to the interpreter.
    pub contract_script: String,
    /// Interpreter binary for the contract script.
    pub contract_interpreter: String,
    /// Deadline for a single engine invocation, in seconds.
    pub engine_timeout_secs: u64,
    /// Feature vector length for the CRM scorer.
    pub scorer_inputs: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            listen_addr: env_or("INVESTRA_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("INVESTRA_DB_PATH", "investra.db"),
            api_token: env_or("INVESTRA_API_TOKEN", "valid_token"),
            contract_script: env_or("INVESTRA_CONTRACT_SCRIPT", "investment_contract.lua"),
            contract_interpreter: env_or("INVESTRA_CONTRACT_INTERPRETER", "lua"),
            engine_timeout_secs: env_or("INVESTRA_ENGINE_TIMEOUT_SECS", "30")
                .parse()
                .unwrap_or(30),
            scorer_inputs: env_or("INVESTRA_SCORER_INPUTS", "3").parse().unwrap_or(3),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
