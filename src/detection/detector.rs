use super::evidence::Evidence;
use super::patterns::{
    first_match, go_framework_patterns, node_backend_patterns, node_frontend_patterns,
    node_lockfiles, parse_go_requires, python_framework_patterns, python_lockfiles,
    DJANGO_ENTRYPOINT, FLASK_ENTRYPOINT,
};
use super::profile::StackProfile;
use crate::stack::{FrameworkId, FrontendId, LanguageId, PackageManagerId};
use tracing::debug;

pub const MOBILE_CONFIDENCE: f64 = 0.95;
pub const GO_CONFIDENCE: f64 = 0.9;
pub const PYTHON_CONFIDENCE: f64 = 0.85;
pub const NODE_CONFIDENCE: f64 = 0.9;
pub const UNKNOWN_CONFIDENCE: f64 = 0.1;

/// Precedence-ordered stack classifier.
///
/// Ecosystems are checked in a fixed order (Flutter, Go, Python, Node) and the
/// first one whose marker is present decides the profile; later ecosystems are
/// never consulted even when their evidence is also present.
#[derive(Debug, Default, Clone, Copy)]
pub struct StackDetector;

impl StackDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, evidence: &Evidence) -> StackProfile {
        let profile = self
            .detect_flutter(evidence)
            .or_else(|| self.detect_go(evidence))
            .or_else(|| self.detect_python(evidence))
            .or_else(|| self.detect_node(evidence))
            .unwrap_or_else(|| StackProfile::unknown(UNKNOWN_CONFIDENCE));

        debug!(
            language = %profile.language,
            framework = %profile.framework,
            confidence = profile.confidence,
            "Stack detected"
        );
        profile
    }

    fn detect_flutter(&self, evidence: &Evidence) -> Option<StackProfile> {
        if evidence.pubspec_yaml.is_none() && !evidence.any_file_ends_with("pubspec.yaml") {
            return None;
        }

        Some(StackProfile {
            language: LanguageId::Dart,
            framework: FrameworkId::Flutter,
            frontend: None,
            package_manager: PackageManagerId::Pub,
            is_full_stack: false,
            confidence: MOBILE_CONFIDENCE,
            notes: vec!["Found pubspec.yaml - Flutter project".to_string()],
        })
    }

    fn detect_go(&self, evidence: &Evidence) -> Option<StackProfile> {
        if evidence.go_mod.is_none() && !evidence.any_file_ends_with("go.mod") {
            return None;
        }

        let mut notes = vec!["Found go.mod - Go project".to_string()];
        let modules = evidence
            .go_mod
            .as_deref()
            .map(parse_go_requires)
            .unwrap_or_default();

        let patterns = go_framework_patterns();
        let framework = match first_match(&patterns, &modules) {
            Some(found) => {
                notes.push(format!("Found {} in go.mod", found.target.name()));
                found.target.clone()
            }
            None => FrameworkId::GoStdlib,
        };

        Some(StackProfile {
            language: LanguageId::Go,
            framework,
            frontend: None,
            package_manager: PackageManagerId::GoMod,
            is_full_stack: true,
            confidence: GO_CONFIDENCE,
            notes,
        })
    }

    fn detect_python(&self, evidence: &Evidence) -> Option<StackProfile> {
        if evidence.requirements_txt.is_none()
            && !evidence.any_file_ends_with("requirements.txt")
            && !evidence.any_file_ends_with("pyproject.toml")
        {
            return None;
        }

        let mut notes = vec!["Found Python dependency manifest".to_string()];
        let patterns = python_framework_patterns();
        let mut framework = evidence
            .requirements_txt
            .as_deref()
            .and_then(|text| first_match(&patterns, [text]))
            .map(|found| {
                notes.push(format!("Found {} in requirements", found.pattern));
                found.target.clone()
            })
            .unwrap_or(FrameworkId::PythonStdlib);

        if evidence.has_file_named(DJANGO_ENTRYPOINT) {
            if framework != FrameworkId::Django {
                notes.push(format!("{} present - Django project", DJANGO_ENTRYPOINT));
            }
            framework = FrameworkId::Django;
        } else if framework == FrameworkId::PythonStdlib
            && evidence.has_file_named(FLASK_ENTRYPOINT)
        {
            notes.push(format!("{} present - assuming Flask", FLASK_ENTRYPOINT));
            framework = FrameworkId::Flask;
        }

        let package_manager = python_lockfiles()
            .into_iter()
            .find(|(lockfile, _)| evidence.has_file_named(lockfile))
            .map(|(lockfile, manager)| {
                notes.push(format!("Found {}", lockfile));
                manager
            })
            .unwrap_or(PackageManagerId::Pip);

        Some(StackProfile {
            language: LanguageId::Python,
            framework,
            frontend: None,
            package_manager,
            is_full_stack: true,
            confidence: PYTHON_CONFIDENCE,
            notes,
        })
    }

    fn detect_node(&self, evidence: &Evidence) -> Option<StackProfile> {
        if !evidence.has_package_manifest() {
            return None;
        }

        let mut notes = vec!["Found package.json - Node.js project".to_string()];

        let typed = evidence.any_file_ends_with(".ts")
            || evidence.any_file_ends_with(".tsx")
            || evidence.has_dependency("typescript");
        let language = if typed {
            notes.push("TypeScript detected".to_string());
            LanguageId::TypeScript
        } else {
            LanguageId::JavaScript
        };

        let package_manager = node_lockfiles()
            .into_iter()
            .find(|(lockfile, _)| evidence.has_file_named(lockfile))
            .map(|(lockfile, manager)| {
                notes.push(format!("Found {}", lockfile));
                manager
            })
            .unwrap_or(PackageManagerId::Npm);

        let names: Vec<&str> = evidence
            .dependencies
            .as_ref()
            .map(|deps| deps.keys().map(String::as_str).collect())
            .unwrap_or_default();

        let frontend_patterns = node_frontend_patterns();
        let frontend = first_match(&frontend_patterns, &names).map(|found| {
            notes.push(format!("Found {} in dependencies", found.pattern));
            found.target.clone()
        });

        if frontend.as_ref().map(FrontendId::is_mobile).unwrap_or(false) {
            notes.push("React Native project".to_string());
            return Some(StackProfile {
                language,
                framework: FrameworkId::ReactNative,
                frontend: None,
                package_manager,
                is_full_stack: false,
                confidence: MOBILE_CONFIDENCE,
                notes,
            });
        }

        let backend_patterns = node_backend_patterns();
        let framework = match first_match(&backend_patterns, &names) {
            Some(found) => {
                notes.push(format!("Found {} in dependencies", found.pattern));
                found.target.clone()
            }
            None => FrameworkId::Node,
        };

        let is_full_stack = framework.is_meta_framework()
            || (framework != FrameworkId::Node && frontend.is_none());

        Some(StackProfile {
            language,
            framework,
            frontend,
            package_manager,
            is_full_stack,
            confidence: NODE_CONFIDENCE,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn package_json(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("package.json must be an object"),
        }
    }

    fn detect(evidence: Evidence) -> StackProfile {
        StackDetector::new().detect(&evidence)
    }

    #[test]
    fn test_flutter_wins_over_go() {
        let profile = detect(Evidence::new(["pubspec.yaml", "go.mod"]));
        assert_eq!(profile.language, LanguageId::Dart);
        assert_eq!(profile.framework, FrameworkId::Flutter);
        assert_eq!(profile.package_manager, PackageManagerId::Pub);
        assert!(!profile.is_full_stack);
        assert_eq!(profile.confidence, MOBILE_CONFIDENCE);
    }

    #[test]
    fn test_flutter_from_pubspec_content() {
        let profile = detect(Evidence::new(["lib/main.dart"]).with_pubspec("name: shop"));
        assert_eq!(profile.framework, FrameworkId::Flutter);
    }

    #[test]
    fn test_go_gin_from_go_mod() {
        let profile = detect(
            Evidence::new(["main.go"])
                .with_go_mod("module shop\n\nrequire github.com/gin-gonic/gin v1.9.1\n"),
        );
        assert_eq!(profile.language, LanguageId::Go);
        assert_eq!(profile.framework, FrameworkId::Gin);
        assert_eq!(profile.package_manager, PackageManagerId::GoMod);
        assert!(profile.is_full_stack);
        assert_eq!(profile.confidence, GO_CONFIDENCE);
    }

    #[test]
    fn test_go_stdlib_without_content() {
        let profile = detect(Evidence::new(["go.mod", "main.go"]));
        assert_eq!(profile.framework, FrameworkId::GoStdlib);
    }

    #[test]
    fn test_go_takes_precedence_over_node() {
        let profile = detect(
            Evidence::new(["go.mod", "web/package.json"])
                .with_package_json(&package_json(json!({"dependencies": {"express": "4"}}))),
        );
        assert_eq!(profile.language, LanguageId::Go);
    }

    #[test]
    fn test_python_substring_match() {
        let profile =
            detect(Evidence::new(["main.py"]).with_requirements("fastapi==0.110\nuvicorn\n"));
        assert_eq!(profile.language, LanguageId::Python);
        assert_eq!(profile.framework, FrameworkId::FastApi);
        assert_eq!(profile.package_manager, PackageManagerId::Pip);
        assert_eq!(profile.confidence, PYTHON_CONFIDENCE);
    }

    #[test]
    fn test_manage_py_is_authoritative() {
        let profile = detect(
            Evidence::new(["requirements.txt", "manage.py"]).with_requirements("flask\n"),
        );
        assert_eq!(profile.framework, FrameworkId::Django);
    }

    #[test]
    fn test_app_py_only_refines_stdlib() {
        let flask = detect(Evidence::new(["requirements.txt", "app.py"]));
        assert_eq!(flask.framework, FrameworkId::Flask);

        let fastapi = detect(
            Evidence::new(["requirements.txt", "app.py"]).with_requirements("fastapi\n"),
        );
        assert_eq!(fastapi.framework, FrameworkId::FastApi);
    }

    #[test]
    fn test_python_package_manager_from_lockfile() {
        let profile = detect(Evidence::new(["pyproject.toml", "poetry.lock"]));
        assert_eq!(profile.package_manager, PackageManagerId::Poetry);
        assert_eq!(profile.framework, FrameworkId::PythonStdlib);
    }

    #[test]
    fn test_node_typescript_express_with_yarn() {
        let profile = detect(
            Evidence::new(["package.json", "yarn.lock", "src/index.ts"]).with_package_json(
                &package_json(json!({"dependencies": {"express": "^4.18.2"}})),
            ),
        );
        assert_eq!(profile.language, LanguageId::TypeScript);
        assert_eq!(profile.framework, FrameworkId::Express);
        assert_eq!(profile.package_manager, PackageManagerId::Yarn);
        assert!(profile.frontend.is_none());
        assert!(profile.is_full_stack);
        assert_eq!(profile.confidence, NODE_CONFIDENCE);
    }

    #[test]
    fn test_node_typescript_from_dev_dependency() {
        let profile = detect(Evidence::new(["index.js"]).with_package_json(&package_json(
            json!({"devDependencies": {"typescript": "^5"}}),
        )));
        assert_eq!(profile.language, LanguageId::TypeScript);
        assert_eq!(profile.framework, FrameworkId::Node);
        assert!(!profile.is_full_stack);
    }

    #[test]
    fn test_next_beats_express() {
        let profile = detect(Evidence::new(["package.json"]).with_package_json(&package_json(
            json!({"dependencies": {"express": "4", "next": "14", "react": "18"}}),
        )));
        assert_eq!(profile.framework, FrameworkId::NextJs);
        assert_eq!(profile.frontend, Some(FrontendId::React));
        assert!(profile.is_full_stack);
    }

    #[test]
    fn test_react_native_short_circuits() {
        let profile = detect(Evidence::new(["package.json"]).with_package_json(&package_json(
            json!({"dependencies": {"react": "18", "react-native": "0.73", "express": "4"}}),
        )));
        assert_eq!(profile.framework, FrameworkId::ReactNative);
        assert!(profile.frontend.is_none());
        assert!(!profile.is_full_stack);
        assert_eq!(profile.confidence, MOBILE_CONFIDENCE);
    }

    #[test]
    fn test_backend_with_frontend_is_not_full_stack() {
        let profile = detect(Evidence::new(["package.json", "pnpm-lock.yaml"]).with_package_json(
            &package_json(json!({"dependencies": {"express": "4", "vue": "3"}})),
        ));
        assert_eq!(profile.framework, FrameworkId::Express);
        assert_eq!(profile.frontend, Some(FrontendId::Vue));
        assert_eq!(profile.package_manager, PackageManagerId::Pnpm);
        assert!(!profile.is_full_stack);
    }

    #[test]
    fn test_unknown_fallback() {
        let profile = detect(Evidence::new(["README.md"]));
        assert!(profile.is_unknown());
        assert_eq!(profile.framework, FrameworkId::Unknown);
        assert_eq!(profile.package_manager, PackageManagerId::Unknown);
        assert_eq!(profile.confidence, UNKNOWN_CONFIDENCE);
        assert_eq!(profile.notes, vec!["Could not detect project stack"]);
    }
}
