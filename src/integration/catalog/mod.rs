//! Template catalog
//!
//! One backend family per [`BackendFramework`] and one frontend artifact per
//! [`FrontendFramework`], looked up through enum-indexed tables. Every
//! template is a pure function of the requested language; credentials are
//! never rendered into code, generated sources read them from the target's
//! runtime environment.

pub mod backend;
pub mod frontend;

use super::plan::FileAction;
use super::request::{BackendFramework, FrontendFramework, Language};
use crate::stack::PackageManagerId;

/// Replaces `__TOKEN__` markers in a template
///
/// ```
/// use checkout_pilot::integration::catalog::render;
///
/// assert_eq!(render("const x = __VALUE__;", &[("VALUE", "1")]), "const x = 1;");
/// ```
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (token, value)| {
        acc.replace(&format!("__{}__", token), value)
    })
}

/// Package ecosystem of a backend family; decides install commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Node,
    Python,
    Go,
}

impl Ecosystem {
    /// Install command for `package`, honoring a package-manager hint that
    /// belongs to this ecosystem and ignoring one that does not
    pub fn install_command(self, package: &str, hint: Option<&PackageManagerId>) -> String {
        match (self, hint) {
            (Self::Node, Some(PackageManagerId::Yarn)) => format!("yarn add {}", package),
            (Self::Node, Some(PackageManagerId::Pnpm)) => format!("pnpm add {}", package),
            (Self::Node, Some(PackageManagerId::Bun)) => format!("bun add {}", package),
            (Self::Node, _) => format!("npm install {}", package),
            (Self::Python, Some(PackageManagerId::Poetry)) => format!("poetry add {}", package),
            (Self::Python, Some(PackageManagerId::Pipenv)) => {
                format!("pipenv install {}", package)
            }
            (Self::Python, Some(PackageManagerId::Uv)) => format!("uv add {}", package),
            (Self::Python, _) => format!("pip install {}", package),
            (Self::Go, _) => format!("go get {}", package),
        }
    }

    /// Single command installing every package at once
    pub fn install_all(self, packages: &[&str], hint: Option<&PackageManagerId>) -> String {
        self.install_command(&packages.join(" "), hint)
    }
}

/// External package required by a backend family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    /// Name reported in the plan
    pub name: &'static str,
    /// Argument handed to the install command
    pub source: &'static str,
}

impl Package {
    pub const fn new(name: &'static str) -> Self {
        Self { name, source: name }
    }

    pub const fn with_source(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Rendered frontend integration file plus how to use it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendArtifact {
    pub framework: FrontendFramework,
    pub file_name: String,
    pub code: String,
    /// How to load or import the artifact from the checkout page
    pub usage: String,
    pub description: String,
}

impl FrontendArtifact {
    pub fn display_name(&self) -> &'static str {
        self.framework.name()
    }

    pub fn to_action(&self) -> FileAction {
        FileAction::create(&self.file_name, &self.code, &self.description)
    }
}

pub trait FrontendTemplate: Send + Sync {
    fn id(&self) -> FrontendFramework;
    fn render(&self, language: Language) -> FrontendArtifact;
}

pub trait BackendTemplate: Send + Sync {
    fn id(&self) -> BackendFramework;

    fn ecosystem(&self) -> Ecosystem;

    fn packages(&self) -> Vec<Package>;

    /// `create` actions for the route and handler sources
    fn files(&self, language: Language) -> Vec<FileAction>;

    /// Ordered edits mounting the new routes into the existing entry point
    fn wiring(&self, language: Language) -> Vec<FileAction>;

    /// Numbered setup steps following the install step
    fn setup_steps(&self, language: Language, frontend: &FrontendArtifact) -> Vec<String>;

    /// File the generated code loads the keys from; `None` when they must
    /// come from the server environment
    fn env_file(&self) -> Option<&'static str> {
        Some(".env")
    }

    fn display_name(&self) -> &'static str {
        self.id().name()
    }
}

pub fn backend_template(id: BackendFramework) -> &'static dyn BackendTemplate {
    match id {
        BackendFramework::Express => &backend::express::ExpressTemplate,
        BackendFramework::NextJs => &backend::nextjs::NextJsTemplate,
        BackendFramework::Django => &backend::django::DjangoTemplate,
        BackendFramework::Flask => &backend::flask::FlaskTemplate,
        BackendFramework::FastApi => &backend::fastapi::FastApiTemplate,
        BackendFramework::Gin => &backend::gin::GinTemplate,
        BackendFramework::Echo => &backend::echo::EchoTemplate,
        BackendFramework::Fiber => &backend::fiber::FiberTemplate,
    }
}

pub fn frontend_template(id: FrontendFramework) -> &'static dyn FrontendTemplate {
    match id {
        FrontendFramework::Vanilla => &frontend::vanilla::VanillaTemplate,
        FrontendFramework::React => &frontend::react::ReactTemplate,
        FrontendFramework::NextJs => &frontend::nextjs::NextJsClientTemplate,
        FrontendFramework::Vue => &frontend::vue::VueTemplate,
        FrontendFramework::Nuxt => &frontend::nuxt::NuxtTemplate,
        FrontendFramework::Angular => &frontend::angular::AngularTemplate,
        FrontendFramework::Svelte => &frontend::svelte::SvelteTemplate,
        FrontendFramework::Solid => &frontend::solid::SolidTemplate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_occurrence() {
        let out = render("__A__ + __A__ = __B__", &[("A", "1"), ("B", "2")]);
        assert_eq!(out, "1 + 1 = 2");
    }

    #[test]
    fn test_install_commands_follow_hint() {
        let yarn = PackageManagerId::Yarn;
        let poetry = PackageManagerId::Poetry;

        assert_eq!(Ecosystem::Node.install_command("razorpay", None), "npm install razorpay");
        assert_eq!(Ecosystem::Node.install_command("razorpay", Some(&yarn)), "yarn add razorpay");
        assert_eq!(
            Ecosystem::Python.install_command("razorpay", Some(&poetry)),
            "poetry add razorpay"
        );
        assert_eq!(
            Ecosystem::Python.install_command("razorpay", Some(&yarn)),
            "pip install razorpay"
        );
        assert_eq!(
            Ecosystem::Go.install_command("github.com/razorpay/razorpay-go", Some(&yarn)),
            "go get github.com/razorpay/razorpay-go"
        );
    }

    #[test]
    fn test_tables_are_keyed_consistently() {
        for id in BackendFramework::ALL {
            assert_eq!(backend_template(*id).id(), *id);
        }
        for id in FrontendFramework::ALL {
            assert_eq!(frontend_template(*id).id(), *id);
        }
    }

    #[test]
    fn test_every_frontend_renders_code() {
        for id in FrontendFramework::ALL {
            for language in Language::ALL {
                let artifact = frontend_template(*id).render(*language);
                assert!(!artifact.code.trim().is_empty(), "{} has no code", id);
                assert!(!artifact.file_name.is_empty());
                assert!(artifact.code.contains("/api/razorpay/order"));
                assert!(artifact.code.contains("/api/razorpay/verify"));
                assert!(!artifact.code.contains("__"), "{} left a marker", id);
            }
        }
    }
}
