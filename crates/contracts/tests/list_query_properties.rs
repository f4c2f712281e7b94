use contracts::enums::{Role, RoleSet};
use contracts::shared::label::Label;
use contracts::shared::list_query::{query, FilterSpec, FilterValue, Filterable, PageSize, SortSpec};
use contracts::shared::menu::{resolve_menu, MenuCatalog, MenuItem};
use proptest::prelude::*;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: usize,
    kind: &'static str,
}

impl Filterable for Row {
    fn filter_value(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "kind" => Some(Cow::Borrowed(self.kind)),
            _ => None,
        }
    }
}

fn rows(kinds: &[u8]) -> Vec<Row> {
    kinds
        .iter()
        .enumerate()
        .map(|(id, k)| Row {
            id,
            kind: if k % 2 == 0 { "even" } else { "odd" },
        })
        .collect()
}

proptest! {
    #[test]
    fn page_stays_within_bounds(
        kinds in prop::collection::vec(any::<u8>(), 0..60),
        page in 0usize..100,
        size in 1usize..15,
    ) {
        let data = rows(&kinds);
        let filters = FilterSpec::with_keys(&["kind"]);
        prop_assert_eq!(filters.active_count(), 0);
        let result = query(&data, &filters, None, page, PageSize::new(size));

        prop_assert!(result.page >= 1 && result.page <= result.total_pages);
        prop_assert!(result.items.len() <= size);
        prop_assert_eq!(result.total_count, data.len());
        if result.total_count == 0 {
            prop_assert_eq!(result.start_index, 0);
            prop_assert_eq!(result.end_index, 0);
        } else {
            prop_assert_eq!(result.end_index - result.start_index + 1, result.items.len());
        }
    }

    #[test]
    fn pages_partition_the_filtered_set(
        kinds in prop::collection::vec(any::<u8>(), 0..60),
        size in 1usize..15,
    ) {
        let data = rows(&kinds);
        let filters = FilterSpec::new().with("kind", FilterValue::exact("odd"));
        let first = query(&data, &filters, None, 1, PageSize::new(size));

        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(query(&data, &filters, None, page, PageSize::new(size)).items);
        }
        let expected: Vec<Row> = data.iter().filter(|r| r.kind == "odd").cloned().collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn repeated_query_returns_the_same_page(
        kinds in prop::collection::vec(any::<u8>(), 0..60),
        odd_only in any::<bool>(),
        page in 0usize..10,
        size in 1usize..15,
    ) {
        let data = rows(&kinds);
        let filters = if odd_only {
            FilterSpec::with_keys(&["kind"]).with("kind", FilterValue::exact("odd"))
        } else {
            FilterSpec::with_keys(&["kind"])
        };
        let sort = SortSpec::new(|a: &Row, b: &Row| a.kind.cmp(b.kind).then(b.id.cmp(&a.id)));

        let first = query(&data, &filters, Some(&sort), page, PageSize::new(size));
        let second = query(&data, &filters, Some(&sort), page, PageSize::new(size));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolved_menu_never_shows_foreign_role_items(mask in 0u8..16) {
        let catalog = MenuCatalog::new(
            vec![MenuItem::link("home", Label::new("Inicio", "Home"), "/")],
            Role::all()
                .into_iter()
                .map(|role| {
                    MenuItem::link(role.code(), Label::new(role.code(), role.code()), "/x")
                        .with_roles([role])
                })
                .collect(),
        )
        .unwrap();
        let active: RoleSet = Role::all()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, role)| role)
            .collect();

        let menu = resolve_menu(&catalog, &active);
        prop_assert_eq!(&menu[0].name, "home");
        for item in &menu[1..] {
            let roles = item.roles.as_ref().unwrap();
            prop_assert!(roles.iter().any(|r| active.contains(r)));
        }
    }
}
