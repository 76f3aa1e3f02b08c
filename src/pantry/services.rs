use std::cmp::Ordering;

use time::{Duration, OffsetDateTime};

use crate::pantry::dto::{CategorySummary, PantrySummary};
use crate::pantry::repo_types::{PantryItem, DEFAULT_CATEGORY};

pub const DEFAULT_EXPIRING_DAYS: u32 = 3;

/// Soonest expiry first, undated items last, then by name.
pub fn sort_for_listing(items: &mut [PantryItem]) {
    items.sort_by(|a, b| {
        let by_expiry = match (a.expires_at, b.expires_at) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_expiry.then_with(|| a.name.cmp(&b.name))
    });
}

/// Items expiring at or before `now + days`, soonest first. Already expired
/// items are included.
pub fn expiring(items: Vec<PantryItem>, days: u32, now: OffsetDateTime) -> Vec<PantryItem> {
    let limit = now.checked_add(Duration::days(i64::from(days)));
    let mut out: Vec<PantryItem> = items
        .into_iter()
        .filter(|it| match (it.expires_at, limit) {
            (Some(exp), Some(limit)) => exp <= limit,
            (Some(_), None) => true,
            (None, _) => false,
        })
        .collect();
    out.sort_by_key(|it| it.expires_at);
    out
}

pub fn category_key(category: Option<&str>) -> String {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_uppercase()
}

pub fn summarize(items: &[PantryItem]) -> PantrySummary {
    let mut summary = PantrySummary {
        total_items: items.len(),
        ..Default::default()
    };
    for it in items {
        let entry: &mut CategorySummary = summary
            .categories
            .entry(category_key(it.category.as_deref()))
            .or_default();
        entry.count += 1;
        entry.total_qty += it.quantity.unwrap_or(0.0);
        if let Some(unit) = it.unit.as_deref().filter(|u| !u.is_empty()) {
            if !entry.units.iter().any(|u| u == unit) {
                entry.units.push(unit.to_string());
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    const NOW: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

    fn item(name: &str) -> PantryItem {
        PantryItem {
            id: Uuid::new_v4(),
            owner_id: Uuid::nil(),
            name: name.into(),
            normalized: crate::matching::normalize(Some(name)),
            synonyms: None,
            quantity: None,
            unit: None,
            category: None,
            purchased_at: None,
            expires_at: None,
            notes: None,
            created_at: NOW,
            updated_at: NOW,
        }
    }

    fn expires(name: &str, at: OffsetDateTime) -> PantryItem {
        PantryItem {
            expires_at: Some(at),
            ..item(name)
        }
    }

    fn names(items: &[PantryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn listing_puts_undated_last_then_sorts_by_name() {
        let mut items = vec![
            item("Zanahoria"),
            expires("Yogur", NOW + Duration::days(5)),
            item("Arroz"),
            expires("Leche", NOW + Duration::days(1)),
            expires("Carne", NOW + Duration::days(5)),
        ];
        sort_for_listing(&mut items);
        assert_eq!(names(&items), ["Leche", "Carne", "Yogur", "Arroz", "Zanahoria"]);
    }

    #[test]
    fn expiring_window_is_inclusive_of_days() {
        let items = vec![expires("Pollo", NOW + Duration::days(2))];
        assert_eq!(expiring(items.clone(), 3, NOW).len(), 1);
        assert!(expiring(items, 1, NOW).is_empty());
    }

    #[test]
    fn expiring_skips_undated_and_orders_by_expiry() {
        let items = vec![
            expires("Queso", NOW + Duration::days(3)),
            item("Arroz"),
            expires("Leche", NOW - Duration::days(1)),
            expires("Pan", NOW + Duration::hours(6)),
            expires("Atún", NOW + Duration::days(30)),
        ];
        let out = expiring(items, DEFAULT_EXPIRING_DAYS, NOW);
        assert_eq!(names(&out), ["Leche", "Pan", "Queso"]);
    }

    #[test]
    fn expiring_with_zero_days_keeps_past_and_now() {
        let items = vec![
            expires("Hoy", NOW),
            expires("Mañana", NOW + Duration::days(1)),
        ];
        assert_eq!(names(&expiring(items, 0, NOW)), ["Hoy"]);
    }

    #[test]
    fn expiring_huge_window_does_not_overflow() {
        let items = vec![expires("Miel", NOW + Duration::days(3650))];
        assert_eq!(expiring(items, u32::MAX, NOW).len(), 1);
    }

    #[test]
    fn summary_defaults_missing_category() {
        let s = summarize(&[item("Arroz"), item("Fideos")]);
        assert_eq!(s.total_items, 2);
        assert_eq!(s.categories.len(), 1);
        assert_eq!(s.categories["OTROS"].count, 2);
    }

    #[test]
    fn summary_groups_case_insensitively_and_sums() {
        let items = vec![
            PantryItem {
                category: Some("carnes".into()),
                quantity: Some(1.5),
                unit: Some("kg".into()),
                ..item("Pollo")
            },
            PantryItem {
                category: Some("Carnes".into()),
                quantity: None,
                unit: Some("g".into()),
                ..item("Res")
            },
            PantryItem {
                category: Some("CARNES".into()),
                quantity: Some(2.0),
                unit: Some("kg".into()),
                ..item("Cerdo")
            },
            PantryItem {
                category: Some("lácteos".into()),
                quantity: Some(1.0),
                unit: Some("l".into()),
                ..item("Leche")
            },
        ];
        let s = summarize(&items);
        assert_eq!(s.total_items, 4);
        assert_eq!(
            s.categories["CARNES"],
            CategorySummary {
                count: 3,
                total_qty: 3.5,
                units: vec!["kg".into(), "g".into()],
            }
        );
        assert_eq!(s.categories["LÁCTEOS"].count, 1);
    }

    #[test]
    fn empty_inventory_summary() {
        let s = summarize(&[]);
        assert_eq!(s.total_items, 0);
        assert!(s.categories.is_empty());
    }

    #[test]
    fn summary_serializes_with_category_keys() {
        let v = serde_json::to_value(summarize(&[item("Arroz")])).unwrap();
        assert_eq!(v["total_items"], 1);
        assert_eq!(v["categories"]["OTROS"]["count"], 1);
        assert_eq!(v["categories"]["OTROS"]["total_qty"], 0.0);
    }
}
