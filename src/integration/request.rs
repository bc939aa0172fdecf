//! Integration request types
//!
//! Languages and frameworks accepted by the generator are closed enums.
//! `parse` is strict; `resolve` never fails and falls back to the default
//! variant, logging the closest known name.

use crate::detection::StackProfile;
use crate::stack::{FrameworkId, FrontendId, LanguageId, PackageManagerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $( $variant:ident => $id:literal : $display:literal $( | $alias:literal )* ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $id $(, alias = $alias)*)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
            pub const DEFAULT: Self = Self::$default;

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)*
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value.trim().to_lowercase().as_str() {
                    $($id $(| $alias)* => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub fn resolve(value: &str) -> Self {
                Self::parse(value).unwrap_or_else(|| {
                    let known: &[&str] = &[$($id),*];
                    warn!(
                        kind = stringify!($name),
                        value,
                        fallback = Self::DEFAULT.as_str(),
                        suggestion = closest_match(value, known).unwrap_or("-"),
                        "Unknown value, using default"
                    );
                    Self::DEFAULT
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Source language of the generated backend code
    Language (default = JavaScript) {
        JavaScript => "javascript" : "JavaScript" | "js",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Python => "python" : "Python" | "py",
        Go => "go" : "Go" | "golang",
    }
}

choice_enum! {
    /// Backend family a plan is generated for
    BackendFramework (default = Express) {
        Express => "express" : "Express",
        NextJs => "nextjs" : "Next.js" | "next",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        FastApi => "fastapi" : "FastAPI",
        Gin => "gin" : "Gin",
        Echo => "echo" : "Echo",
        Fiber => "fiber" : "Fiber",
    }
}

choice_enum! {
    /// UI framework receiving the checkout button or helper
    FrontendFramework (default = Vanilla) {
        Vanilla => "vanilla" : "Vanilla JS" | "javascript" | "html",
        React => "react" : "React",
        NextJs => "nextjs" : "Next.js" | "next",
        Vue => "vue" : "Vue",
        Nuxt => "nuxt" : "Nuxt",
        Angular => "angular" : "Angular",
        Svelte => "svelte" : "Svelte",
        Solid => "solid" : "Solid" | "solid-js",
    }
}

impl Language {
    /// Whether typed source (`.ts`/`.tsx`) should be generated
    pub fn is_typed(self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

/// Returns the known value most similar to `value`, if any is close enough
pub fn closest_match<'a>(value: &str, known: &[&'a str]) -> Option<&'a str> {
    let value = value.trim().to_lowercase();
    known
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(&value, candidate)))
        .filter(|(_, score)| *score >= 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| candidate)
}

/// Facts about the target project that refine the generated procedure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManagerId>,
}

impl ExistingHints {
    pub fn with_order_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.order_endpoint = non_blank(endpoint.into());
        self
    }

    pub fn with_payment_function(mut self, function: impl Into<String>) -> Self {
        self.payment_function = non_blank(function.into());
        self
    }

    pub fn with_package_manager(mut self, manager: &str) -> Self {
        self.package_manager = non_blank(manager.to_string()).map(|m| {
            PackageManagerId::from_id(&m.to_lowercase()).unwrap_or(PackageManagerId::Custom(m))
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.order_endpoint.is_none()
            && self.payment_function.is_none()
            && self.package_manager.is_none()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Everything the generator needs to produce a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRequest {
    pub language: Language,
    pub backend: BackendFramework,
    pub frontend: FrontendFramework,
    #[serde(default)]
    pub hints: ExistingHints,
}

impl IntegrationRequest {
    pub fn new(language: Language, backend: BackendFramework, frontend: FrontendFramework) -> Self {
        Self {
            language,
            backend,
            frontend,
            hints: ExistingHints::default(),
        }
    }

    /// Builds a request from loose names, falling back to defaults
    pub fn resolve(language: &str, backend: &str, frontend: &str) -> Self {
        Self::new(
            Language::resolve(language),
            BackendFramework::resolve(backend),
            FrontendFramework::resolve(frontend),
        )
    }

    pub fn with_hints(mut self, hints: ExistingHints) -> Self {
        self.hints = hints;
        self
    }

    /// Best-effort request for a detected stack.
    ///
    /// Frameworks without a dedicated template map onto the nearest family of
    /// the same ecosystem; the detected package manager becomes a hint.
    pub fn from_profile(profile: &StackProfile) -> Self {
        let language = match profile.language {
            LanguageId::TypeScript => Language::TypeScript,
            LanguageId::Python => Language::Python,
            LanguageId::Go => Language::Go,
            _ => Language::JavaScript,
        };

        let backend = match profile.framework {
            FrameworkId::NextJs => BackendFramework::NextJs,
            FrameworkId::Django => BackendFramework::Django,
            FrameworkId::Flask | FrameworkId::PythonStdlib => BackendFramework::Flask,
            FrameworkId::FastApi | FrameworkId::Starlette => BackendFramework::FastApi,
            FrameworkId::Gin | FrameworkId::GoStdlib => BackendFramework::Gin,
            FrameworkId::Echo => BackendFramework::Echo,
            FrameworkId::Fiber => BackendFramework::Fiber,
            _ => BackendFramework::Express,
        };

        let frontend = match (&profile.framework, &profile.frontend) {
            (FrameworkId::NextJs, _) => FrontendFramework::NextJs,
            (FrameworkId::Nuxt, _) => FrontendFramework::Nuxt,
            (_, Some(FrontendId::React)) => FrontendFramework::React,
            (_, Some(FrontendId::Vue)) => FrontendFramework::Vue,
            (_, Some(FrontendId::Angular)) => FrontendFramework::Angular,
            (_, Some(FrontendId::Svelte)) => FrontendFramework::Svelte,
            (_, Some(FrontendId::Solid)) => FrontendFramework::Solid,
            _ => FrontendFramework::Vanilla,
        };

        let hints = match &profile.package_manager {
            PackageManagerId::Unknown => ExistingHints::default(),
            manager => ExistingHints {
                package_manager: Some(manager.clone()),
                ..Default::default()
            },
        };

        Self::new(language, backend, frontend).with_hints(hints)
    }
}
