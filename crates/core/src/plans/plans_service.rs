use std::sync::Arc;

use async_trait::async_trait;

use crate::engine::ContractEngine;
use crate::errors::Result;
use crate::plans::plans_model::{AddPlanRequest, InvestRequest};
use crate::plans::token::TokenVerifier;

/// Contract function names understood by the engine script.
const FN_ADD_PLAN: &str = "add_plan";
const FN_INVEST: &str = "invest";

/// Trait for plan gateway operations.
#[async_trait]
pub trait PlanServiceTrait: Send + Sync {
    async fn add_plan(&self, request: AddPlanRequest) -> Result<String>;
    async fn invest(&self, request: InvestRequest) -> Result<String>;
}

/// Gateway between HTTP callers and the external contract engine.
///
/// Both operations verify the caller token before dispatch; on success the
/// engine's output is relayed verbatim, never parsed or restructured.
pub struct PlanService {
    verifier: Arc<dyn TokenVerifier>,
    engine: Arc<dyn ContractEngine>,
}

impl PlanService {
    pub fn new(verifier: Arc<dyn TokenVerifier>, engine: Arc<dyn ContractEngine>) -> Self {
        PlanService { verifier, engine }
    }
}

#[async_trait]
impl PlanServiceTrait for PlanService {
    async fn add_plan(&self, request: AddPlanRequest) -> Result<String> {
        self.verifier.verify(&request.token)?;
        log::info!("Dispatching add_plan for '{}'", request.plan_name);
        self.engine
            .execute(
                FN_ADD_PLAN,
                &[
                    request.plan_name,
                    request.initial_investment.to_string(),
                ],
            )
            .await
    }

    async fn invest(&self, request: InvestRequest) -> Result<String> {
        self.verifier.verify(&request.token)?;
        log::info!("Dispatching invest for '{}'", request.plan_name);
        self.engine
            .execute(
                FN_INVEST,
                &[
                    request.plan_name,
                    request.amount.to_string(),
                    request.investor_address,
                ],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::plans::token::StaticTokenVerifier;
    use std::sync::Mutex;

    /// Engine double that records every invocation.
    struct RecordingEngine {
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl RecordingEngine {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ContractEngine for RecordingEngine {
        async fn execute(&self, function: &str, args: &[String]) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((function.to_string(), args.to_vec()));
            Ok(format!("ok:{}", function))
        }
    }

    fn service(engine: Arc<RecordingEngine>) -> PlanService {
        PlanService::new(Arc::new(StaticTokenVerifier::new("valid_token")), engine)
    }

    #[tokio::test]
    async fn add_plan_forwards_function_and_args_in_order() {
        let engine = RecordingEngine::new();
        let output = service(engine.clone())
            .add_plan(AddPlanRequest {
                token: "valid_token".to_string(),
                plan_name: "growth".to_string(),
                initial_investment: 1000,
            })
            .await
            .unwrap();

        assert_eq!(output, "ok:add_plan");
        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "add_plan");
        assert_eq!(calls[0].1, vec!["growth".to_string(), "1000".to_string()]);
    }

    #[tokio::test]
    async fn invest_forwards_function_and_args_in_order() {
        let engine = RecordingEngine::new();
        service(engine.clone())
            .invest(InvestRequest {
                token: "valid_token".to_string(),
                plan_name: "growth".to_string(),
                amount: 250,
                investor_address: "0xabc".to_string(),
            })
            .await
            .unwrap();

        let calls = engine.calls.lock().unwrap();
        assert_eq!(calls[0].0, "invest");
        assert_eq!(
            calls[0].1,
            vec![
                "growth".to_string(),
                "250".to_string(),
                "0xabc".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn bad_token_never_reaches_the_engine() {
        let engine = RecordingEngine::new();
        let result = service(engine.clone())
            .add_plan(AddPlanRequest {
                token: "wrong".to_string(),
                plan_name: "growth".to_string(),
                initial_investment: 1000,
            })
            .await;

        assert!(matches!(result, Err(Error::Unauthorized(_))));
        assert!(engine.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invest_verifies_the_token_too() {
        let engine = RecordingEngine::new();
        let result = service(engine.clone())
            .invest(InvestRequest {
                token: "wrong".to_string(),
                plan_name: "growth".to_string(),
                amount: 250,
                investor_address: "0xabc".to_string(),
            })
            .await;

        assert!(matches!(result, Err(Error::Unauthorized(_))));
        assert!(engine.calls.lock().unwrap().is_empty());
    }
}
