//! Integration plan data model
//!
//! A plan is an ordered list of [`FileAction`]s plus the metadata needed to
//! apply them. Nothing here touches the filesystem; plans only describe
//! changes for an external actor to carry out.

use serde::{Deserialize, Serialize};

/// Path sentinel of instructional actions whose target must be discovered
pub const DISCOVER_PATH: &str = "DISCOVER";

/// One ordered step within an edit sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditItem {
    /// Human-readable locator of where the edit goes
    pub line: String,
    /// Literal code to add
    pub add: String,
    /// Why the step is needed and what it must come after
    pub why: String,
}

impl EditItem {
    pub fn new(line: impl Into<String>, add: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            add: add.into(),
            why: why.into(),
        }
    }
}

/// A change with a machine-checkable effect on one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CodeChange {
    Create {
        path: String,
        code: String,
        description: String,
    },
    InsertCode {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        description: String,
        edits: Vec<EditItem>,
    },
    ManualEdit {
        path: String,
        description: String,
        edits: Vec<EditItem>,
    },
}

/// Free-form procedure for a step that cannot be addressed from the
/// evidence alone; it carries no machine-checkable effect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Instruction {
    WirePayment {
        path: String,
        #[serde(rename = "code")]
        procedure: String,
        description: String,
    },
}

/// One unit of change in a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileAction {
    Change(CodeChange),
    Instructional(Instruction),
}

impl FileAction {
    pub fn create(
        path: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Change(CodeChange::Create {
            path: path.into(),
            code: code.into(),
            description: description.into(),
        })
    }

    pub fn insert_code(
        path: impl Into<String>,
        code: Option<String>,
        description: impl Into<String>,
        edits: Vec<EditItem>,
    ) -> Self {
        Self::Change(CodeChange::InsertCode {
            path: path.into(),
            code,
            description: description.into(),
            edits,
        })
    }

    pub fn manual_edit(
        path: impl Into<String>,
        description: impl Into<String>,
        edits: Vec<EditItem>,
    ) -> Self {
        Self::Change(CodeChange::ManualEdit {
            path: path.into(),
            description: description.into(),
            edits,
        })
    }

    pub fn wire_payment(procedure: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Instructional(Instruction::WirePayment {
            path: DISCOVER_PATH.to_string(),
            procedure: procedure.into(),
            description: description.into(),
        })
    }

    /// Wire name of the action (`create`, `insert_code`, ...)
    pub fn action(&self) -> &'static str {
        match self {
            Self::Change(CodeChange::Create { .. }) => "create",
            Self::Change(CodeChange::InsertCode { .. }) => "insert_code",
            Self::Change(CodeChange::ManualEdit { .. }) => "manual_edit",
            Self::Instructional(Instruction::WirePayment { .. }) => "wire_payment",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Change(CodeChange::Create { path, .. })
            | Self::Change(CodeChange::InsertCode { path, .. })
            | Self::Change(CodeChange::ManualEdit { path, .. })
            | Self::Instructional(Instruction::WirePayment { path, .. }) => path,
        }
    }

    /// Code body; for instructional actions this is the procedure text
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Change(CodeChange::Create { code, .. }) => Some(code),
            Self::Change(CodeChange::InsertCode { code, .. }) => code.as_deref(),
            Self::Change(CodeChange::ManualEdit { .. }) => None,
            Self::Instructional(Instruction::WirePayment { procedure, .. }) => Some(procedure),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Change(CodeChange::Create { description, .. })
            | Self::Change(CodeChange::InsertCode { description, .. })
            | Self::Change(CodeChange::ManualEdit { description, .. })
            | Self::Instructional(Instruction::WirePayment { description, .. }) => description,
        }
    }

    pub fn edits(&self) -> &[EditItem] {
        match self {
            Self::Change(CodeChange::InsertCode { edits, .. })
            | Self::Change(CodeChange::ManualEdit { edits, .. }) => edits,
            _ => &[],
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Self::Change(CodeChange::Create { .. }))
    }

    pub fn is_instructional(&self) -> bool {
        matches!(self, Self::Instructional(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    pub install_command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

/// Complete, ready-to-apply description of an integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationPlan {
    pub summary: String,
    pub files: Vec<FileAction>,
    pub dependencies: Vec<Dependency>,
    pub env_vars: Vec<EnvVar>,
    pub test_instructions: String,
    pub ai_instructions: String,
}

impl IntegrationPlan {
    pub fn builder(summary: impl Into<String>) -> PlanBuilder {
        PlanBuilder::new(summary)
    }

    pub fn creates(&self) -> impl Iterator<Item = &FileAction> {
        self.files.iter().filter(|f| f.is_create())
    }

    pub fn instructions(&self) -> impl Iterator<Item = &FileAction> {
        self.files.iter().filter(|f| f.is_instructional())
    }

    pub fn find_file(&self, path: &str) -> Option<&FileAction> {
        self.files.iter().find(|f| f.path() == path)
    }
}

/// Assembles an [`IntegrationPlan`]; dependencies are de-duplicated by name
/// and keep their first insertion position
#[derive(Debug, Clone, Default)]
pub struct PlanBuilder {
    summary: String,
    files: Vec<FileAction>,
    dependencies: Vec<Dependency>,
    env_vars: Vec<EnvVar>,
    test_instructions: String,
    ai_instructions: String,
}

impl PlanBuilder {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, action: FileAction) -> Self {
        self.files.push(action);
        self
    }

    pub fn with_files(mut self, actions: impl IntoIterator<Item = FileAction>) -> Self {
        self.files.extend(actions);
        self
    }

    pub fn with_dependency(
        mut self,
        name: impl Into<String>,
        install_command: impl Into<String>,
    ) -> Self {
        let name = name.into();
        if !self.dependencies.iter().any(|d| d.name == name) {
            self.dependencies.push(Dependency {
                name,
                install_command: install_command.into(),
            });
        }
        self
    }

    pub fn with_env_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push(EnvVar {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_test_instructions(mut self, text: impl Into<String>) -> Self {
        self.test_instructions = text.into();
        self
    }

    pub fn with_ai_instructions(mut self, text: impl Into<String>) -> Self {
        self.ai_instructions = text.into();
        self
    }

    pub fn build(self) -> IntegrationPlan {
        IntegrationPlan {
            summary: self.summary,
            files: self.files,
            dependencies: self.dependencies,
            env_vars: self.env_vars,
            test_instructions: self.test_instructions,
            ai_instructions: self.ai_instructions,
        }
    }
}
