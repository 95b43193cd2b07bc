use super::*;
use proptest::prelude::*;

/// プロパティテスト用の最小レコード
#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: String,
    name: String,
    category: String,
    description: String,
}

impl CatalogRecord for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// 一致判定を定義どおりに書き下したもの
fn expected_match(criteria: &FilterCriteria, item: &Item) -> bool {
    let query = criteria.query.to_lowercase();
    let category_ok = match &criteria.category {
        CategorySelector::All => true,
        CategorySelector::Only(id) => *id == item.category,
    };
    category_ok
        && (query.is_empty()
            || item.name.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query))
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["business", "analytics", "communication", "productivity"])
        .prop_map(|s| s.to_string())
}

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        ("[a-zA-Z ]{1,12}", category_strategy(), "[a-zA-Z .+*]{0,24}"),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, description))| Item {
                id: format!("item-{i}"),
                name,
                category,
                description,
            })
            .collect()
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        "[a-zA-Z .+*]{0,4}",
        prop_oneof![
            Just(CategorySelector::All),
            category_strategy().prop_map(CategorySelector::Only),
            Just(CategorySelector::Only("unknown".to_string())),
        ],
    )
        .prop_map(|(query, category)| FilterCriteria::new(query, category))
}

proptest! {
    /// 制限なしの条件では入力そのものを返す
    #[test]
    fn prop_unrestricted_is_identity(items in items_strategy()) {
        let result = filter(&items, &FilterCriteria::default());
        let expected: Vec<&Item> = items.iter().collect();
        prop_assert_eq!(result, expected);
    }

    /// 出力は入力の部分列（順序保持）
    #[test]
    fn prop_result_is_ordered_subsequence(
        items in items_strategy(),
        criteria in criteria_strategy()
    ) {
        let result = filter(&items, &criteria);
        let mut cursor = items.iter();
        for picked in &result {
            prop_assert!(cursor.any(|item| std::ptr::eq(item, *picked)));
        }
    }

    /// 含まれる要素はすべて条件を満たし、除外された要素は満たさない
    #[test]
    fn prop_included_iff_matches(
        items in items_strategy(),
        criteria in criteria_strategy()
    ) {
        let result = filter(&items, &criteria);
        for item in &items {
            let included = result.iter().any(|r| std::ptr::eq(*r, item));
            prop_assert_eq!(included, expected_match(&criteria, item));
        }
    }

    /// 冪等性: 同じ条件で再フィルタしても結果は変わらない
    #[test]
    fn prop_idempotent(
        items in items_strategy(),
        criteria in criteria_strategy()
    ) {
        let once: Vec<Item> = filter(&items, &criteria).into_iter().cloned().collect();
        let twice: Vec<Item> = filter(&once, &criteria).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// クエリの大文字小文字は結果に影響しない
    #[test]
    fn prop_query_case_insensitive(
        items in items_strategy(),
        criteria in criteria_strategy()
    ) {
        let upper = criteria.clone().with_query(criteria.query.to_uppercase());
        let lower = criteria.clone().with_query(criteria.query.to_lowercase());
        prop_assert_eq!(filter(&items, &upper), filter(&items, &lower));
    }

    /// 件数は常にフィルタ結果の長さと一致する
    #[test]
    fn prop_count_equals_len(
        items in items_strategy(),
        criteria in criteria_strategy()
    ) {
        prop_assert_eq!(count(&items, &criteria), filter(&items, &criteria).len());
    }
}
