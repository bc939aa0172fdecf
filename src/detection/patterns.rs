//! Ordered detection tables
//!
//! Every table is scanned front to back and the first matching entry wins, so
//! a project declaring two competing frameworks always resolves the same way.
//! Meta-frameworks are listed before the servers they embed, and mobile
//! toolkits before the web libraries they depend on.

use crate::stack::{FrameworkId, FrontendId, PackageManagerId};
use regex::Regex;
use std::sync::OnceLock;

/// How a pattern is compared against a candidate dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyPatternType {
    /// Exact package name from `package.json`
    NpmPackage,
    /// Go module path prefix (`github.com/labstack/echo` matches `.../echo/v4`)
    GoModule,
    /// Case-insensitive substring of a requirements file
    PythonRequirement,
}

#[derive(Debug, Clone)]
pub struct DependencyPattern<T> {
    pub pattern_type: DependencyPatternType,
    pub pattern: &'static str,
    pub target: T,
}

impl<T> DependencyPattern<T> {
    fn new(pattern_type: DependencyPatternType, pattern: &'static str, target: T) -> Self {
        Self {
            pattern_type,
            pattern,
            target,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self.pattern_type {
            DependencyPatternType::NpmPackage => candidate == self.pattern,
            DependencyPatternType::GoModule => candidate.starts_with(self.pattern),
            DependencyPatternType::PythonRequirement => {
                candidate.to_lowercase().contains(self.pattern)
            }
        }
    }
}

/// Returns the target of the first pattern matching any candidate
pub fn first_match<'a, T, I>(
    patterns: &'a [DependencyPattern<T>],
    candidates: I,
) -> Option<&'a DependencyPattern<T>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    I::IntoIter: Clone,
{
    let candidates = candidates.into_iter();
    patterns
        .iter()
        .find(|pattern| candidates.clone().any(|c| pattern.matches(c.as_ref())))
}

pub fn go_framework_patterns() -> Vec<DependencyPattern<FrameworkId>> {
    use DependencyPatternType::GoModule;
    vec![
        DependencyPattern::new(GoModule, "github.com/gin-gonic/gin", FrameworkId::Gin),
        DependencyPattern::new(GoModule, "github.com/labstack/echo", FrameworkId::Echo),
        DependencyPattern::new(GoModule, "github.com/gofiber/fiber", FrameworkId::Fiber),
    ]
}

pub fn python_framework_patterns() -> Vec<DependencyPattern<FrameworkId>> {
    use DependencyPatternType::PythonRequirement;
    vec![
        DependencyPattern::new(PythonRequirement, "django", FrameworkId::Django),
        DependencyPattern::new(PythonRequirement, "flask", FrameworkId::Flask),
        DependencyPattern::new(PythonRequirement, "fastapi", FrameworkId::FastApi),
        DependencyPattern::new(PythonRequirement, "starlette", FrameworkId::Starlette),
    ]
}

pub fn node_backend_patterns() -> Vec<DependencyPattern<FrameworkId>> {
    use DependencyPatternType::NpmPackage;
    vec![
        DependencyPattern::new(NpmPackage, "next", FrameworkId::NextJs),
        DependencyPattern::new(NpmPackage, "nuxt", FrameworkId::Nuxt),
        DependencyPattern::new(NpmPackage, "@nestjs/core", FrameworkId::NestJs),
        DependencyPattern::new(NpmPackage, "express", FrameworkId::Express),
        DependencyPattern::new(NpmPackage, "fastify", FrameworkId::Fastify),
        DependencyPattern::new(NpmPackage, "koa", FrameworkId::Koa),
        DependencyPattern::new(NpmPackage, "hono", FrameworkId::Hono),
    ]
}

pub fn node_frontend_patterns() -> Vec<DependencyPattern<FrontendId>> {
    use DependencyPatternType::NpmPackage;
    vec![
        DependencyPattern::new(NpmPackage, "react-native", FrontendId::ReactNative),
        DependencyPattern::new(NpmPackage, "expo", FrontendId::ReactNative),
        DependencyPattern::new(NpmPackage, "@angular/core", FrontendId::Angular),
        DependencyPattern::new(NpmPackage, "vue", FrontendId::Vue),
        DependencyPattern::new(NpmPackage, "svelte", FrontendId::Svelte),
        DependencyPattern::new(NpmPackage, "solid-js", FrontendId::Solid),
        DependencyPattern::new(NpmPackage, "react", FrontendId::React),
    ]
}

/// Node lock files in priority order; npm is the default when none is present
pub fn node_lockfiles() -> Vec<(&'static str, PackageManagerId)> {
    vec![
        ("yarn.lock", PackageManagerId::Yarn),
        ("pnpm-lock.yaml", PackageManagerId::Pnpm),
        ("bun.lockb", PackageManagerId::Bun),
        ("bun.lock", PackageManagerId::Bun),
    ]
}

/// Python lock files in priority order; pip is the default
pub fn python_lockfiles() -> Vec<(&'static str, PackageManagerId)> {
    vec![
        ("poetry.lock", PackageManagerId::Poetry),
        ("Pipfile.lock", PackageManagerId::Pipenv),
        ("Pipfile", PackageManagerId::Pipenv),
        ("uv.lock", PackageManagerId::Uv),
    ]
}

/// Bootstrap files that identify a Python framework regardless of requirements
pub const DJANGO_ENTRYPOINT: &str = "manage.py";
pub const FLASK_ENTRYPOINT: &str = "app.py";

fn require_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^require\s+([^\s(]+)\s").expect("valid require regex"))
}

fn block_entry() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^\s)]+)\s+v").expect("valid require block regex"))
}

/// Extracts the module paths declared in `require` directives of a go.mod file
pub fn parse_go_requires(go_mod: &str) -> Vec<String> {
    let mut modules = Vec::new();
    let mut in_block = false;

    for raw in go_mod.lines() {
        let line = raw.split("//").next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if in_block {
            if line.starts_with(')') {
                in_block = false;
            } else if let Some(caps) = block_entry().captures(line) {
                modules.push(caps[1].to_string());
            }
            continue;
        }

        if line.starts_with("require") && line.trim_start_matches("require").trim() == "(" {
            in_block = true;
        } else if let Some(caps) = require_line().captures(line) {
            modules.push(caps[1].to_string());
        }
    }

    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_requires_single_and_block() {
        let go_mod = r#"module example.com/shop

go 1.21

require github.com/gin-gonic/gin v1.9.1

require (
	github.com/labstack/echo/v4 v4.11.4 // indirect
	golang.org/x/crypto v0.17.0
)
"#;
        let modules = parse_go_requires(go_mod);
        assert_eq!(
            modules,
            vec![
                "github.com/gin-gonic/gin",
                "github.com/labstack/echo/v4",
                "golang.org/x/crypto",
            ]
        );
    }

    #[test]
    fn test_go_requires_ignores_comments_and_module_line() {
        let go_mod = "module github.com/gin-gonic/example\n// require github.com/gofiber/fiber/v2 v2.0.0\n";
        assert!(parse_go_requires(go_mod).is_empty());
    }

    #[test]
    fn test_table_order_decides_between_competitors() {
        let patterns = node_backend_patterns();
        let found = first_match(&patterns, ["express", "next"]).unwrap();
        assert_eq!(found.target, FrameworkId::NextJs);
        assert_eq!(found.pattern, "next");
    }

    #[test]
    fn test_react_native_listed_before_react() {
        let patterns = node_frontend_patterns();
        let found = first_match(&patterns, ["react", "react-native"]).unwrap();
        assert_eq!(found.target, FrontendId::ReactNative);
    }

    #[test]
    fn test_go_module_prefix_match() {
        let patterns = go_framework_patterns();
        let found = first_match(&patterns, ["github.com/gofiber/fiber/v2"]).unwrap();
        assert_eq!(found.target, FrameworkId::Fiber);
    }

    #[test]
    fn test_python_requirement_is_case_insensitive() {
        let patterns = python_framework_patterns();
        let found = first_match(&patterns, ["Django==5.0\ngunicorn"]).unwrap();
        assert_eq!(found.target, FrameworkId::Django);
    }

    #[test]
    fn test_npm_package_requires_exact_name() {
        let patterns = node_backend_patterns();
        assert!(first_match(&patterns, ["next-auth", "express-session"]).is_none());
    }
}
