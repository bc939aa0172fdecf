crate::define_id_enum! {
    /// Backend or application framework of a detected project
    FrameworkId {
        NextJs => "nextjs" : "Next.js" | "next",
        Nuxt => "nuxt" : "Nuxt",
        NestJs => "nestjs" : "NestJS",
        Express => "express" : "Express",
        Fastify => "fastify" : "Fastify",
        Koa => "koa" : "Koa",
        Hono => "hono" : "Hono",
        Node => "node" : "Node.js",
        Django => "django" : "Django",
        Flask => "flask" : "Flask",
        FastApi => "fastapi" : "FastAPI",
        Starlette => "starlette" : "Starlette",
        PythonStdlib => "python-stdlib" : "Python (standard library)",
        Gin => "gin" : "Gin",
        Echo => "echo" : "Echo",
        Fiber => "fiber" : "Fiber",
        GoStdlib => "go-stdlib" : "Go (standard library)",
        Flutter => "flutter" : "Flutter",
        ReactNative => "react-native" : "React Native",
        Unknown => "unknown" : "Unknown",
    }
}

impl FrameworkId {
    /// Frameworks that serve both the API and the UI from one project
    pub fn is_meta_framework(&self) -> bool {
        matches!(self, Self::NextJs | Self::Nuxt | Self::NestJs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_serialization() {
        assert_eq!(
            serde_json::to_string(&FrameworkId::GoStdlib).unwrap(),
            "\"go-stdlib\""
        );
        assert_eq!(
            serde_json::to_string(&FrameworkId::NextJs).unwrap(),
            "\"nextjs\""
        );
    }

    #[test]
    fn test_framework_id_name() {
        assert_eq!(FrameworkId::FastApi.name(), "FastAPI");
        assert_eq!(FrameworkId::NextJs.name(), "Next.js");
        assert_eq!(FrameworkId::from_name("NestJS"), Some(FrameworkId::NestJs));
    }

    #[test]
    fn test_meta_frameworks() {
        assert!(FrameworkId::NextJs.is_meta_framework());
        assert!(FrameworkId::NestJs.is_meta_framework());
        assert!(!FrameworkId::Express.is_meta_framework());
    }

    #[test]
    fn test_custom_framework_round_trip() {
        let deserialized: FrameworkId = serde_json::from_str("\"remix\"").unwrap();
        assert_eq!(deserialized, FrameworkId::Custom("remix".to_string()));
        assert_eq!(serde_json::to_string(&deserialized).unwrap(), "\"remix\"");
    }
}
