crate::define_id_enum! {
    /// UI framework detected alongside (or instead of) a backend
    FrontendId {
        React => "react" : "React",
        Vue => "vue" : "Vue",
        Angular => "angular" : "Angular",
        Svelte => "svelte" : "Svelte",
        Solid => "solid" : "Solid",
        ReactNative => "react-native" : "React Native",
    }
}

impl FrontendId {
    /// Native mobile toolkits; a project using one is not a web checkout target
    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::ReactNative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_id_serialization() {
        assert_eq!(
            serde_json::to_string(&FrontendId::ReactNative).unwrap(),
            "\"react-native\""
        );
        assert!(FrontendId::ReactNative.is_mobile());
        assert!(!FrontendId::Vue.is_mobile());
    }
}
