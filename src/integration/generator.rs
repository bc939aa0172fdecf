use super::catalog::{backend_template, frontend_template, BackendTemplate, FrontendArtifact};
use super::plan::{FileAction, IntegrationPlan};
use super::procedure::{
    frontend_wiring_instructions, project_hints, wire_payment_procedure, ProcedureKind,
};
use super::request::{BackendFramework, FrontendFramework, IntegrationRequest};
use crate::credentials::ResolvedCredentials;
use tracing::debug;

pub const TEST_INSTRUCTIONS: &str =
    "Use test card: 4111 1111 1111 1111, any future expiry, any CVV. UPI: success@razorpay";

const WIRE_PAYMENT_DESCRIPTION: &str =
    "CRITICAL: Discover and modify the actual checkout flow - DO NOT assume file names";

/// Produces integration plans for a fixed set of credentials.
///
/// Generation is total and deterministic: the same request always yields the
/// same plan, and every request yields one.
#[derive(Debug, Clone)]
pub struct IntegrationGenerator {
    credentials: ResolvedCredentials,
}

impl IntegrationGenerator {
    pub fn new(credentials: ResolvedCredentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &ResolvedCredentials {
        &self.credentials
    }

    pub fn generate(&self, request: &IntegrationRequest) -> IntegrationPlan {
        let template = backend_template(request.backend);
        let frontend_id = Self::frontend_for(request);
        let frontend = frontend_template(frontend_id).render(request.language);

        debug!(
            language = %request.language,
            backend = %request.backend,
            frontend = %frontend_id,
            "Generating integration plan"
        );

        let kind = if request.backend == BackendFramework::Express
            && frontend_id == FrontendFramework::Vanilla
        {
            ProcedureKind::BrowserScript
        } else {
            ProcedureKind::Generic
        };

        let mut builder = IntegrationPlan::builder(format!(
            "Complete Razorpay Standard Checkout integration for {} + {}",
            template.display_name(),
            frontend.display_name()
        ))
        .with_files(template.files(request.language))
        .with_file(frontend.to_action())
        .with_files(template.wiring(request.language))
        .with_file(FileAction::wire_payment(
            wire_payment_procedure(kind, &request.hints),
            WIRE_PAYMENT_DESCRIPTION,
        ));

        let hint = request.hints.package_manager.as_ref();
        for package in template.packages() {
            builder = builder.with_dependency(
                package.name,
                template.ecosystem().install_command(package.source, hint),
            );
        }

        let plan = builder
            .with_env_var("RAZORPAY_KEY_ID", &self.credentials.key_id)
            .with_env_var("RAZORPAY_KEY_SECRET", &self.credentials.key_secret)
            .with_test_instructions(TEST_INSTRUCTIONS)
            .with_ai_instructions(Self::ai_instructions(template, request, &frontend))
            .build();

        debug!(
            files = plan.files.len(),
            dependencies = plan.dependencies.len(),
            "Integration plan ready"
        );
        plan
    }

    /// A Next.js backend always pairs with the Next.js client component
    fn frontend_for(request: &IntegrationRequest) -> FrontendFramework {
        match request.backend {
            BackendFramework::NextJs => FrontendFramework::NextJs,
            _ => request.frontend,
        }
    }

    fn ai_instructions(
        template: &dyn BackendTemplate,
        request: &IntegrationRequest,
        frontend: &FrontendArtifact,
    ) -> String {
        let sources: Vec<&str> = template.packages().iter().map(|p| p.source).collect();
        let install = template
            .ecosystem()
            .install_all(&sources, request.hints.package_manager.as_ref());

        let mut steps = vec![install];
        steps.extend(template.setup_steps(request.language, frontend));

        let backend = steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}) {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");

        let keys = match template.env_file() {
            Some(file) => format!(
                "Keep RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET in {} and out of version control.",
                file
            ),
            None => "Export RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET in the server environment before starting it.".to_string(),
        };

        format!(
            "BACKEND SETUP:\n{}\n\n{}\n\n{}{}",
            backend,
            frontend_wiring_instructions(frontend),
            keys,
            project_hints(&request.hints)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::request::{ExistingHints, Language};

    fn generator() -> IntegrationGenerator {
        IntegrationGenerator::new(ResolvedCredentials::placeholders())
    }

    fn request(language: Language, backend: BackendFramework, frontend: FrontendFramework) -> IntegrationRequest {
        IntegrationRequest::new(language, backend, frontend)
    }

    #[test]
    fn test_express_vanilla_file_order() {
        let plan = generator().generate(&request(
            Language::JavaScript,
            BackendFramework::Express,
            FrontendFramework::Vanilla,
        ));

        let actions: Vec<(&str, &str)> = plan.files.iter().map(|f| (f.action(), f.path())).collect();
        assert_eq!(
            actions,
            vec![
                ("create", "routes/razorpay.js"),
                ("create", "public/js/razorpay.js"),
                ("insert_code", "server.js"),
                ("wire_payment", "DISCOVER"),
            ]
        );
        assert_eq!(
            plan.summary,
            "Complete Razorpay Standard Checkout integration for Express + Vanilla JS"
        );
        assert!(plan.files[3].code().unwrap().contains("BEFORE the checkout script"));
    }

    #[test]
    fn test_nextjs_backend_forces_client_component() {
        let plan = generator().generate(&request(
            Language::TypeScript,
            BackendFramework::NextJs,
            FrontendFramework::Vue,
        ));
        assert!(plan.find_file("components/RazorpayCheckout.tsx").is_some());
        assert!(plan.files.iter().all(|f| f.edits().is_empty()));
        assert!(plan.ai_instructions.contains(".env.local"));
    }

    #[test]
    fn test_package_manager_hint_changes_install_commands() {
        let req = request(Language::Python, BackendFramework::FastApi, FrontendFramework::React)
            .with_hints(ExistingHints::default().with_package_manager("poetry"));
        let plan = generator().generate(&req);
        assert!(plan
            .dependencies
            .iter()
            .all(|d| d.install_command.starts_with("poetry add ")));
        assert!(plan.ai_instructions.starts_with("BACKEND SETUP:\n1) poetry add razorpay python-dotenv"));
    }

    #[test]
    fn test_env_vars_carry_credentials() {
        let creds = ResolvedCredentials {
            key_id: "rzp_test_abc".to_string(),
            key_secret: "s3cr3t-value".to_string(),
        };
        let plan = IntegrationGenerator::new(creds).generate(&request(
            Language::Go,
            BackendFramework::Gin,
            FrontendFramework::Svelte,
        ));
        assert_eq!(plan.env_vars[0].value, "rzp_test_abc");
        assert_eq!(plan.env_vars[1].value, "s3cr3t-value");
        assert!(plan
            .files
            .iter()
            .filter_map(|f| f.code())
            .all(|code| !code.contains("s3cr3t-value")));
    }

    #[test]
    fn test_go_backends_take_keys_from_server_environment() {
        for backend in [BackendFramework::Gin, BackendFramework::Echo, BackendFramework::Fiber] {
            let plan = generator().generate(&request(Language::Go, backend, FrontendFramework::React));
            assert!(plan.ai_instructions.contains("in the server environment"));
            assert!(!plan.ai_instructions.contains(".env"), "{}", backend);
        }
    }

    #[test]
    fn test_hints_reach_procedure_and_instructions() {
        let req = request(Language::JavaScript, BackendFramework::Express, FrontendFramework::React)
            .with_hints(ExistingHints::default().with_payment_function("placeOrder"));
        let plan = generator().generate(&req);
        let wire = plan.instructions().next().unwrap();
        assert!(wire.code().unwrap().contains("placeOrder"));
        assert!(plan.ai_instructions.contains("PROJECT HINTS:"));
    }
}
