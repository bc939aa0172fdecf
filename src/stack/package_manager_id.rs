crate::define_id_enum! {
    /// Package manager used to install dependencies
    PackageManagerId {
        Npm => "npm" : "npm",
        Yarn => "yarn" : "Yarn",
        Pnpm => "pnpm" : "pnpm",
        Bun => "bun" : "Bun",
        Pip => "pip" : "pip",
        Poetry => "poetry" : "Poetry",
        Pipenv => "pipenv" : "Pipenv",
        Uv => "uv" : "uv",
        GoMod => "go-mod" : "Go modules" | "go",
        Pub => "pub" : "pub",
        Unknown => "unknown" : "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_manager_serialization() {
        assert_eq!(
            serde_json::to_string(&PackageManagerId::GoMod).unwrap(),
            "\"go-mod\""
        );
        assert_eq!(PackageManagerId::from_id("go"), Some(PackageManagerId::GoMod));
        assert_eq!(PackageManagerId::Pnpm.to_string(), "pnpm");
    }
}
