//! Plan gateway - token verification and contract dispatch.

mod plans_model;
mod plans_service;
mod token;

pub use plans_model::{AddPlanRequest, InvestRequest};
pub use plans_service::{PlanService, PlanServiceTrait};
pub use token::{StaticTokenVerifier, TokenVerifier};
