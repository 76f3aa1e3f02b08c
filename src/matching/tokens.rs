use std::collections::HashSet;

use super::normalize::normalize;

/// Something in the pantry that can be matched against a pet's food lists.
pub trait Ingredient {
    fn name(&self) -> &str;
    fn synonyms(&self) -> Option<&str>;
}

/// Comma-separated free text into a set of normalized tokens.
pub fn tokens_of(csv: Option<&str>) -> HashSet<String> {
    normalize(csv)
        .split(',')
        .map(|piece| normalize(Some(piece)))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Tokens of a stored list; each entry may itself hold several comma-separated foods.
pub fn list_tokens(entries: &[String]) -> HashSet<String> {
    entries
        .iter()
        .flat_map(|e| tokens_of(Some(e.as_str())))
        .collect()
}

/// The full normalized name, each word of it, and every synonym.
pub fn item_tokens<I: Ingredient + ?Sized>(item: &I) -> HashSet<String> {
    let name = normalize(Some(item.name()));
    let mut toks: HashSet<String> = name.split_whitespace().map(str::to_owned).collect();
    toks.extend(tokens_of(item.synonyms()));
    if !name.is_empty() {
        toks.insert(name);
    }
    toks
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, Option<&'static str>);

    impl Ingredient for Item {
        fn name(&self) -> &str {
            self.0
        }
        fn synonyms(&self) -> Option<&str> {
            self.1
        }
    }

    fn set(xs: &[&str]) -> HashSet<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_trims_and_dedups() {
        assert_eq!(
            tokens_of(Some(" Pollo, AVE ,, pollo , Árroz ")),
            set(&["pollo", "ave", "arroz"])
        );
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokens_of(None).is_empty());
        assert!(tokens_of(Some(" , ,")).is_empty());
    }

    #[test]
    fn list_tokens_unions_entries() {
        let entries = vec!["Chocolate".to_string(), "uvas, pasas".to_string()];
        assert_eq!(list_tokens(&entries), set(&["chocolate", "uvas", "pasas"]));
    }

    #[test]
    fn item_name_counts_without_synonyms() {
        assert_eq!(item_tokens(&Item("Pechuga", None)), set(&["pechuga"]));
    }

    #[test]
    fn item_tokens_include_name_words_and_synonyms() {
        let toks = item_tokens(&Item("Chocolate Amargo", Some("cacao, Dulce")));
        assert_eq!(
            toks,
            set(&["chocolate amargo", "chocolate", "amargo", "cacao", "dulce"])
        );
    }
}
