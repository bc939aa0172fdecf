use crate::stack::{FrameworkId, FrontendId, LanguageId, PackageManagerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a project's technology stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProfile {
    pub language: LanguageId,
    pub framework: FrameworkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<FrontendId>,
    pub package_manager: PackageManagerId,
    pub is_full_stack: bool,
    pub confidence: f64,
    pub notes: Vec<String>,
}

impl StackProfile {
    pub fn unknown(confidence: f64) -> Self {
        Self {
            language: LanguageId::Unknown,
            framework: FrameworkId::Unknown,
            frontend: None,
            package_manager: PackageManagerId::Unknown,
            is_full_stack: false,
            confidence,
            notes: vec!["Could not detect project stack".to_string()],
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language == LanguageId::Unknown
    }
}

impl fmt::Display for StackProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.language.name(), self.framework.name())?;
        if let Some(frontend) = &self.frontend {
            write!(f, " + {}", frontend.name())?;
        }
        write!(
            f,
            " ({}, confidence {:.2})",
            self.package_manager, self.confidence
        )
    }
}
