/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }

    /// 環境変数が設定されているか（空文字列は未設定扱い）
    pub fn is_set(key: &str) -> bool {
        Self::get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_existing_var() {
        std::env::set_var("MBB_TEST_ENV_VAR", "test_value");
        assert_eq!(EnvVar::get("MBB_TEST_ENV_VAR"), Some("test_value".to_string()));
        assert!(EnvVar::is_set("MBB_TEST_ENV_VAR"));
        std::env::remove_var("MBB_TEST_ENV_VAR");
    }

    #[test]
    #[serial]
    fn test_get_empty_var() {
        std::env::set_var("MBB_TEST_EMPTY_VAR", "");
        assert_eq!(EnvVar::get("MBB_TEST_EMPTY_VAR"), None);
        assert!(!EnvVar::is_set("MBB_TEST_EMPTY_VAR"));
        std::env::remove_var("MBB_TEST_EMPTY_VAR");
    }

    #[test]
    fn test_get_nonexistent_var() {
        assert_eq!(EnvVar::get("MBB_NONEXISTENT_VAR_12345"), None);
    }
}
