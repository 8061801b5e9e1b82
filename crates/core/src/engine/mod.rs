//! External contract engine invocation.

mod script_engine;

pub use script_engine::{ContractEngine, ScriptContractEngine, ScriptEngineConfig};
