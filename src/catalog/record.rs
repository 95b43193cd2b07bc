//! カタログレコードの共通インターフェース

/// フィルタ・ルーティング対象となるレコード
///
/// アプリと予約の両方がこのトレイトを実装し、同じフィルタロジックを共有する。
pub trait CatalogRecord {
    /// コレクション内で一意な識別子（ルーティングパラメータにも使用）
    fn id(&self) -> &str;

    /// 表示ラベル（アプリ名・顧客名）
    fn label(&self) -> &str;

    /// 等価比較で絞り込むカテゴリ（アプリのカテゴリ・予約のステータス）
    fn category(&self) -> &str;

    /// 部分一致検索の対象となる説明文
    fn description(&self) -> &str;
}
