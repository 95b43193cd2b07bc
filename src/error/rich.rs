use std::fmt;
use std::path::PathBuf;

use super::code::ErrorCode;

/// エラー表示に添える文脈（追加順に表示）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextItem {
    /// 関連ファイル
    File(PathBuf),
    /// 解決できなかったナビゲーションパス
    Route(String),
    /// 対象レコードの ID
    Record(String),
    /// 補足情報（ラベルと値）
    Field(&'static str, String),
}

impl fmt::Display for ContextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextItem::File(path) => write!(f, "{}", path.display()),
            ContextItem::Route(route) => write!(f, "route: {}", route),
            ContextItem::Record(id) => write!(f, "record: {}", id),
            ContextItem::Field(label, value) => write!(f, "{}: {}", label, value),
        }
    }
}

/// コード・メッセージ・文脈を持つ表示用エラー
#[derive(Debug)]
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: Vec<ContextItem>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RichError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
            source: None,
        }
    }

    pub fn with(mut self, item: ContextItem) -> Self {
        self.context.push(item);
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &[ContextItem] {
        &self.context
    }
}

impl fmt::Display for RichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for RichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn rich_error_display() {
        let error = RichError::new(ErrorCode::Cat001, "Duplicate record id: mb-bookings");
        assert_eq!(
            error.to_string(),
            "error[CAT001]: Duplicate record id: mb-bookings"
        );
        assert!(error.context().is_empty());
    }

    #[test]
    fn context_keeps_insertion_order() {
        let error = RichError::new(ErrorCode::Cat002, "Undeclared category")
            .with(ContextItem::Record("mb-x".to_string()))
            .with(ContextItem::Field("category", "games".to_string()));

        assert_eq!(
            error.context(),
            &[
                ContextItem::Record("mb-x".to_string()),
                ContextItem::Field("category", "games".to_string()),
            ]
        );
    }

    #[test]
    fn context_item_display() {
        assert_eq!(
            ContextItem::File(PathBuf::from("/tmp/catalog.json")).to_string(),
            "/tmp/catalog.json"
        );
        assert_eq!(
            ContextItem::Route("/settings".to_string()).to_string(),
            "route: /settings"
        );
        assert_eq!(ContextItem::Record("x".to_string()).to_string(), "record: x");
        assert_eq!(
            ContextItem::Field("key", "bookings.default_date".to_string()).to_string(),
            "key: bookings.default_date"
        );
    }

    #[test]
    fn rich_error_with_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = RichError::new(ErrorCode::Io001, "Failed to read file").with_source(io_error);
        assert!(error.source().is_some());
    }
}
