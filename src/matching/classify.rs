use std::collections::HashSet;

use serde::Serialize;

use super::tokens::{item_tokens, list_tokens, Ingredient};
use crate::nutrition::repo_types::NutritionProfile;

/// Token sets derived from one pet's nutrition profile.
#[derive(Debug, Default, Clone)]
pub struct Restrictions {
    pub forbidden: HashSet<String>,
    pub preferred: HashSet<String>,
}

impl Restrictions {
    /// Forbidden foods, allergies and intolerances are merged here only.
    pub fn from_profile(profile: &NutritionProfile) -> Self {
        let mut forbidden = list_tokens(&profile.forbidden_foods);
        forbidden.extend(list_tokens(&profile.food_allergies));
        forbidden.extend(list_tokens(&profile.intolerances));
        Self {
            forbidden,
            preferred: list_tokens(&profile.preferred_foods),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AptItem<T> {
    #[serde(flatten)]
    pub item: T,
    pub preferred: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Classification<T> {
    pub apt: Vec<AptItem<T>>,
    pub forbidden: Vec<T>,
}

/// Splits `items` into apt and forbidden, keeping input order in both.
///
/// Any token overlap with the forbidden set wins over a preference match, so a
/// forbidden item is never reported as preferred.
pub fn classify<T: Ingredient>(restrictions: &Restrictions, items: Vec<T>) -> Classification<T> {
    let mut apt = Vec::new();
    let mut forbidden = Vec::new();

    for item in items {
        let toks = item_tokens(&item);
        if !toks.is_disjoint(&restrictions.forbidden) {
            forbidden.push(item);
            continue;
        }
        let preferred = !toks.is_disjoint(&restrictions.preferred);
        apt.push(AptItem { item, preferred });
    }

    Classification { apt, forbidden }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        name: String,
        synonyms: Option<String>,
    }

    impl Ingredient for Item {
        fn name(&self) -> &str {
            &self.name
        }
        fn synonyms(&self) -> Option<&str> {
            self.synonyms.as_deref()
        }
    }

    fn item(name: &str, synonyms: Option<&str>) -> Item {
        Item {
            name: name.into(),
            synonyms: synonyms.map(Into::into),
        }
    }

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    fn profile() -> NutritionProfile {
        NutritionProfile {
            pet_id: Uuid::new_v4(),
            diet_type: "RAW".into(),
            meals_per_day: 2,
            activity_level: "MODERATE".into(),
            goal: "MAINTENANCE".into(),
            preferred_foods: vec![],
            forbidden_foods: vec![],
            intolerances: vec![],
            food_allergies: vec![],
            supplements: vec![],
            daily_calories: None,
            water_intake_ml: None,
            notes: None,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn forbidden_food_matches_word_of_name() {
        let mut p = profile();
        p.forbidden_foods = strings(&["chocolate"]);
        let out = classify(
            &Restrictions::from_profile(&p),
            vec![item("Chocolate amargo", None)],
        );
        assert!(out.apt.is_empty());
        assert_eq!(out.forbidden, vec![item("Chocolate amargo", None)]);
    }

    #[test]
    fn preferred_via_synonym() {
        let mut p = profile();
        p.preferred_foods = strings(&["pollo"]);
        let out = classify(
            &Restrictions::from_profile(&p),
            vec![item("Pechuga", Some("pollo, ave"))],
        );
        assert!(out.forbidden.is_empty());
        assert_eq!(out.apt.len(), 1);
        assert!(out.apt[0].preferred);
    }

    #[test]
    fn empty_restrictions_make_everything_apt() {
        let items = vec![
            item("Chocolate", None),
            item("Uvas", Some("pasas")),
            item("Cebolla", None),
        ];
        let out = classify(&Restrictions::from_profile(&profile()), items.clone());
        assert!(out.forbidden.is_empty());
        let apt: Vec<Item> = out.apt.iter().map(|a| a.item.clone()).collect();
        assert_eq!(apt, items);
        assert!(out.apt.iter().all(|a| !a.preferred));
    }

    #[test]
    fn allergies_and_intolerances_also_forbid() {
        let mut p = profile();
        p.food_allergies = strings(&["Pescado"]);
        p.intolerances = strings(&["lácteos, leche"]);
        let out = classify(
            &Restrictions::from_profile(&p),
            vec![
                item("Atún", Some("pescado")),
                item("Leche", None),
                item("Arroz", None),
            ],
        );
        assert_eq!(out.forbidden, vec![item("Atún", Some("pescado")), item("Leche", None)]);
        assert_eq!(out.apt.len(), 1);
        assert_eq!(out.apt[0].item.name, "Arroz");
    }

    #[test]
    fn forbidden_beats_preferred() {
        let mut p = profile();
        p.forbidden_foods = strings(&["res"]);
        p.preferred_foods = strings(&["carne", "res"]);
        let out = classify(
            &Restrictions::from_profile(&p),
            vec![item("Carne", Some("res")), item("Carne molida", None)],
        );
        assert_eq!(out.forbidden, vec![item("Carne", Some("res"))]);
        assert_eq!(out.apt.len(), 1);
        assert!(out.apt[0].preferred);
        for a in &out.apt {
            assert!(!out.forbidden.contains(&a.item));
        }
    }

    #[test]
    fn keeps_input_order_and_duplicates() {
        let mut p = profile();
        p.forbidden_foods = strings(&["ajo"]);
        let items = vec![
            item("Zanahoria", None),
            item("Ajo", None),
            item("Arroz", None),
            item("Zanahoria", None),
            item("Ajo", None),
        ];
        let out = classify(&Restrictions::from_profile(&p), items);
        let apt: Vec<&str> = out.apt.iter().map(|a| a.item.name.as_str()).collect();
        assert_eq!(apt, ["Zanahoria", "Arroz", "Zanahoria"]);
        assert_eq!(out.forbidden.len(), 2);
    }

    #[test]
    fn matching_is_exact_after_normalization() {
        let mut p = profile();
        p.forbidden_foods = strings(&["choco"]);
        let out = classify(
            &Restrictions::from_profile(&p),
            vec![item("Chocolate", Some("chocolates"))],
        );
        assert!(out.forbidden.is_empty());
    }

    #[test]
    fn apt_item_serializes_flat() {
        let out = classify(&Restrictions::default(), vec![item("Arroz", None)]);
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["apt"][0]["name"], "Arroz");
        assert_eq!(v["apt"][0]["preferred"], false);
        assert_eq!(v["forbidden"].as_array().unwrap().len(), 0);
    }
}
