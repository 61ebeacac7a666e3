//! Case conversion and English pluralization for generated identifiers.
//!
//! Every function is total: empty input yields empty output.
//!
//! | Function           | Input          | Output          |
//! |--------------------|----------------|-----------------|
//! | [`to_pascal_case`] | `user_profile` | `UserProfile`   |
//! | [`to_snake_case`]  | `UserProfile`  | `user_profile`  |
//! | [`to_kebab_case`]  | `order_items`  | `order-items`   |
//! | [`to_camel_case`]  | `OrderItem`    | `orderItem`     |
//! | [`to_plural`]      | `person`       | `people`        |
//! | [`to_table_name`]  | `UserProfile`  | `user_profiles` |
//! | [`to_route_name`]  | `OrderItem`    | `order-items`   |
//! | [`humanize`]       | `is_active`    | `Is Active`     |
//!
//! Pluralization is heuristic and English-only. There is no hook for
//! registering extra irregular forms.

/// `(singular, plural)` pairs matched case-insensitively on the last word.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("shelf", "shelves"),
    ("wolf", "wolves"),
    ("thief", "thieves"),
    ("cactus", "cacti"),
    ("radius", "radii"),
    ("criterion", "criteria"),
    ("analysis", "analyses"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("quiz", "quizzes"),
];

/// Words whose plural is the word itself.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
    "software",
    "staff",
];

/// `user_profile` → `UserProfile`.
///
/// Splits on `_`, `-`, and spaces; upper-cases the first letter of each
/// segment and leaves the rest of the segment untouched.
pub fn to_pascal_case(input: &str) -> String {
    input
        .split(['_', '-', ' '])
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect()
}

/// `UserProfile` → `user_profile`.
///
/// An underscore is inserted before every upper-case letter that is not at
/// the start and does not already follow an underscore.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for c in input.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p != '_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// `order_items` → `order-items`. No case change.
pub fn to_kebab_case(input: &str) -> String {
    input.replace('_', "-")
}

/// `OrderItem` → `orderItem`: lower-cases the first character only.
pub fn to_camel_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pluralize the last word of a snake_case or PascalCase identifier.
///
/// The prefix and the casing of the last word's first letter are kept:
/// `SalesPerson` → `SalesPeople`, `sales_person` → `sales_people`.
pub fn to_plural(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (prefix, last) = split_last_word(word);
    format!("{prefix}{}", pluralize_word(last))
}

/// `UserProfile` → `user_profiles`.
pub fn to_table_name(model: &str) -> String {
    to_plural(&to_snake_case(model))
}

/// `OrderItem` → `order-items`.
pub fn to_route_name(model: &str) -> String {
    to_kebab_case(&to_table_name(model))
}

/// `is_active` → `Is Active`.
pub fn humanize(input: &str) -> String {
    input
        .split('_')
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Helpers
// ============================================================================

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split at the start of the final word: after the last `_`, or at the last
/// upper-case letter for PascalCase input.
fn split_last_word(word: &str) -> (&str, &str) {
    if let Some(idx) = word.rfind('_') {
        return word.split_at(idx + 1);
    }

    let boundary = word
        .char_indices()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .last();

    match boundary {
        // All-caps words ("ID", "API") are kept whole.
        Some(i) if !word[i..].chars().all(char::is_uppercase) => word.split_at(i),
        _ => ("", word),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return match_case(word, plural);
    }

    let suffixed = if let Some(stem) = lower.strip_suffix('y') {
        if stem.ends_with(is_vowel) {
            format!("{lower}s")
        } else {
            format!("{stem}ies")
        }
    } else if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        format!("{lower}es")
    } else {
        format!("{lower}s")
    };

    match_case(word, &suffixed)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Re-apply the source word's casing (lower, Capitalized, or UPPER).
fn match_case(source: &str, plural: &str) -> String {
    if source.len() > 1 && source.chars().all(|c| !c.is_lowercase()) {
        plural.to_uppercase()
    } else if source.chars().next().is_some_and(char::is_uppercase) {
        capitalize(plural)
    } else {
        plural.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Case conversion
    // ========================================================================

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("product"), "Product");
        assert_eq!(to_pascal_case("Products"), "Products");
        assert_eq!(to_pascal_case("OrderItems"), "OrderItems");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("Product"), "product");
        assert_eq!(to_snake_case("user_profile"), "user_profile");
        assert_eq!(to_snake_case("User_Profile"), "user_profile");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn snake_inverts_pascal_for_snake_input() {
        for input in ["user_profile", "a_b_c", "order_item", "x", "product"] {
            assert_eq!(to_snake_case(&to_pascal_case(input)), input, "{input}");
        }
    }

    #[test]
    fn kebab_case_only_swaps_underscores() {
        assert_eq!(to_kebab_case("order_items"), "order-items");
        assert_eq!(to_kebab_case("Order_Items"), "Order-Items");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn camel_case() {
        assert_eq!(to_camel_case("OrderItem"), "orderItem");
        assert_eq!(to_camel_case("product"), "product");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn humanize_labels() {
        assert_eq!(humanize("is_active"), "Is Active");
        assert_eq!(humanize("name"), "Name");
    }

    // ========================================================================
    // Pluralization
    // ========================================================================

    #[test]
    fn regular_plurals() {
        assert_eq!(to_plural("product"), "products");
        assert_eq!(to_plural("category"), "categories");
        assert_eq!(to_plural("day"), "days");
        assert_eq!(to_plural("box"), "boxes");
        assert_eq!(to_plural("church"), "churches");
        assert_eq!(to_plural("dish"), "dishes");
        assert_eq!(to_plural("status"), "statuses");
    }

    #[test]
    fn irregular_plurals() {
        assert_eq!(to_plural("person"), "people");
        assert_eq!(to_plural("Person"), "People");
        assert_eq!(to_plural("child"), "children");
        assert_eq!(to_plural("sheep"), "sheep");
    }

    #[test]
    fn compound_words_pluralize_last_word() {
        assert_eq!(to_plural("user_profile"), "user_profiles");
        assert_eq!(to_plural("sales_person"), "sales_people");
        assert_eq!(to_plural("SalesPerson"), "SalesPeople");
        assert_eq!(to_plural("OrderItem"), "OrderItems");
        assert_eq!(to_plural("orderItem"), "orderItems");
    }

    #[test]
    fn irregular_overrides_are_not_configurable() {
        // "octopus" has no entry, so the heuristic rule applies.
        assert_eq!(to_plural("octopus"), "octopuses");
    }

    #[test]
    fn empty_is_identity() {
        assert_eq!(to_plural(""), "");
        assert_eq!(to_table_name(""), "");
        assert_eq!(to_route_name(""), "");
    }

    // ========================================================================
    // Composites
    // ========================================================================

    #[test]
    fn table_names() {
        assert_eq!(to_table_name("UserProfile"), "user_profiles");
        assert_eq!(to_table_name("Product"), "products");
        assert_eq!(to_table_name("Person"), "people");
        assert_eq!(to_table_name("Category"), "categories");
    }

    #[test]
    fn route_names() {
        assert_eq!(to_route_name("OrderItem"), "order-items");
        assert_eq!(to_route_name("Product"), "products");
    }
}
