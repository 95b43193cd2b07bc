//! エラー型
//!
//! - `MbbError`: 内部で伝播する統一エラー型
//! - `RichError`: CLI 表示用のコード付きエラー
//! - `ErrorFormatter`: RichError の整形

mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ContextItem, RichError};

use crate::catalog::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// MBB統一エラー型
#[derive(Debug, Error)]
pub enum MbbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value for '{key}': {message}")]
    ConfigValue { key: String, message: String },

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

pub type Result<T> = std::result::Result<T, MbbError>;

impl MbbError {
    /// 表示用エラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            MbbError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
            MbbError::Json(_) | MbbError::Yaml(_) => ErrorCode::Int001,
            MbbError::Catalog(CatalogError::DuplicateId(_)) => ErrorCode::Cat001,
            MbbError::Catalog(CatalogError::UnknownCategory { .. }) => ErrorCode::Cat002,
            MbbError::Catalog(_) => ErrorCode::Cat003,
            MbbError::ConfigParse { .. } => ErrorCode::Cfg001,
            MbbError::ConfigValue { .. } => ErrorCode::Cfg002,
            MbbError::Terminal(_) => ErrorCode::Tui001,
            MbbError::InvalidArgument(_) => ErrorCode::Val001,
            MbbError::UnknownRoute(_) => ErrorCode::Val002,
        }
    }
}

impl From<MbbError> for RichError {
    fn from(err: MbbError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            MbbError::ConfigParse { path, source } => RichError::new(code, message)
                .with(ContextItem::File(path))
                .with_source(source),
            MbbError::ConfigValue { key, .. } => {
                RichError::new(code, message).with(ContextItem::Field("key", key))
            }
            MbbError::Catalog(CatalogError::DuplicateId(id))
            | MbbError::Catalog(CatalogError::EmptyLabel { id }) => {
                RichError::new(code, message).with(ContextItem::Record(id))
            }
            MbbError::Catalog(CatalogError::UnknownCategory { id, category }) => {
                RichError::new(code, message)
                    .with(ContextItem::Record(id))
                    .with(ContextItem::Field("category", category))
            }
            MbbError::UnknownRoute(path) => {
                RichError::new(code, message).with(ContextItem::Route(path))
            }
            MbbError::Io(source) | MbbError::Terminal(source) => {
                RichError::new(code, message).with_source(source)
            }
            MbbError::Json(source) => RichError::new(code, message).with_source(source),
            MbbError::Yaml(source) => RichError::new(code, message).with_source(source),
            other => RichError::new(code, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn catalog_errors_map_to_cat_codes() {
        let err = MbbError::from(CatalogError::DuplicateId("x".to_string()));
        assert_eq!(err.code(), ErrorCode::Cat001);

        let err = MbbError::from(CatalogError::UnknownCategory {
            id: "x".to_string(),
            category: "games".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::Cat002);

        let err = MbbError::from(CatalogError::EmptyId);
        assert_eq!(err.code(), ErrorCode::Cat003);
    }

    #[test]
    fn io_not_found_maps_to_io001() {
        let err = MbbError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.code(), ErrorCode::Io001);
    }

    #[test]
    fn rich_error_carries_record_context() {
        let rich = RichError::from(MbbError::from(CatalogError::UnknownCategory {
            id: "mb-x".to_string(),
            category: "games".to_string(),
        }));
        assert_eq!(rich.code(), ErrorCode::Cat002);
        assert_eq!(
            rich.context(),
            &[
                ContextItem::Record("mb-x".to_string()),
                ContextItem::Field("category", "games".to_string()),
            ]
        );
    }

    #[test]
    fn rich_error_keeps_io_source() {
        let rich = RichError::from(MbbError::Terminal(std::io::Error::other("no tty")));
        assert_eq!(rich.code(), ErrorCode::Tui001);
        assert!(rich.source().is_some());
    }

    #[test]
    fn unknown_route_has_route_context() {
        let rich = RichError::from(MbbError::UnknownRoute("/settings".to_string()));
        assert_eq!(rich.code(), ErrorCode::Val002);
        assert_eq!(rich.context(), &[ContextItem::Route("/settings".to_string())]);
    }
}
