crate::define_id_enum! {
    /// Primary language of a detected project
    LanguageId {
        JavaScript => "javascript" : "JavaScript" | "js",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Python => "python" : "Python",
        Go => "go" : "Go" | "golang",
        Dart => "dart" : "Dart",
        Unknown => "unknown" : "Unknown",
    }
}
