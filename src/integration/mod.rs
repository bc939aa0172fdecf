//! Razorpay Standard Checkout integration plans
//!
//! [`IntegrationGenerator`] turns an [`IntegrationRequest`] into an
//! [`IntegrationPlan`] using the backend and frontend families of the
//! [`catalog`].

pub mod catalog;
pub mod generator;
pub mod plan;
pub mod procedure;
pub mod request;

pub use generator::{IntegrationGenerator, TEST_INSTRUCTIONS};
pub use plan::{
    CodeChange, Dependency, EditItem, EnvVar, FileAction, Instruction, IntegrationPlan,
    PlanBuilder, DISCOVER_PATH,
};
pub use request::{BackendFramework, ExistingHints, FrontendFramework, IntegrationRequest, Language};
