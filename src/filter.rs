//! フィルタロジック
//!
//! カタログレコードをフリーテキストとカテゴリで絞り込む共通モジュール。
//! 入力は変更せず、定義順を保ったまま新しい Vec を返す。

use crate::catalog::CatalogRecord;
use std::convert::Infallible;
use std::str::FromStr;

/// カテゴリ選択（`all` センチネルまたは特定カテゴリ）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(String),
}

impl CategorySelector {
    /// 「カテゴリ制限なし」を表すセンチネル
    pub const ALL: &'static str = "all";

    /// 文字列から選択を作成（`all` 以外はそのままカテゴリIDとして扱う）
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            CategorySelector::All
        } else {
            CategorySelector::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => Self::ALL,
            CategorySelector::Only(id) => id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelector::All)
    }

    /// カテゴリが選択に一致するか（大文字小文字を区別する完全一致）
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(id) => id == category,
        }
    }
}

impl FromStr for CategorySelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl std::fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フィルタ条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// 部分一致検索テキスト（空なら全件一致）
    pub query: String,
    /// カテゴリ選択
    pub category: CategorySelector,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: CategorySelector) -> Self {
        self.category = category;
        self
    }

    /// 制限なし（全件一致）かどうか
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }
}

/// 小文字化済みクエリでラベルと説明文を検索
fn matches_query<T: CatalogRecord>(record: &T, query: &str) -> bool {
    query.is_empty()
        || record.label().to_lowercase().contains(query)
        || record.description().to_lowercase().contains(query)
}

/// 条件でレコードを絞り込む
///
/// - カテゴリが `all` なら制限なし、それ以外は完全一致
/// - クエリが空なら全件一致、それ以外は case-insensitive な部分一致で
///   ラベルと説明文を検索（正規表現としては解釈しない）
/// - 出力は入力の相対順序を保つ
pub fn filter<'a, T: CatalogRecord>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    if criteria.is_unrestricted() {
        return records.iter().collect();
    }

    let query = criteria.query.to_lowercase();
    let result: Vec<&T> = records
        .iter()
        .filter(|r| criteria.category.matches(r.category()) && matches_query(*r, &query))
        .collect();

    tracing::trace!(
        query = %criteria.query,
        category = %criteria.category,
        matched = result.len(),
        total = records.len(),
        "filter applied"
    );
    result
}

/// 条件に一致するレコード数（見出しの件数表示用）
pub fn count<T: CatalogRecord>(records: &[T], criteria: &FilterCriteria) -> usize {
    filter(records, criteria).len()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod filter_proptests;
