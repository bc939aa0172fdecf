use super::vue::{BUTTON, SCRIPT_SETUP};
use crate::integration::catalog::{FrontendArtifact, FrontendTemplate};
use crate::integration::request::{FrontendFramework, Language};

/// Nuxt auto-imports `ref` and `onMounted`; the `.client.vue` suffix keeps
/// the component out of server rendering
pub struct NuxtTemplate;

impl FrontendTemplate for NuxtTemplate {
    fn id(&self) -> FrontendFramework {
        FrontendFramework::Nuxt
    }

    fn render(&self, _language: Language) -> FrontendArtifact {
        FrontendArtifact {
            framework: self.id(),
            file_name: "components/RazorpayButton.client.vue".to_string(),
            code: format!("{}\n<script setup>\n{}</script>\n", BUTTON, SCRIPT_SETUP),
            usage: "Use <RazorpayButton :amount=\"total\" @success=\"...\" /> in the checkout page (components are auto-imported)".to_string(),
            description: "Nuxt client-only component for Razorpay payments".to_string(),
        }
    }
}
