//! Classification rule tables
//!
//! Static keyword and pattern tables driving dietary and food-group
//! classification. All matching is against lowercased food names.

use crate::models::FoodAttribute;

/// A keyword that disqualifies a label, with exact names exempt from it
pub struct KeywordException {
    pub keyword: &'static str,
    /// Trimmed, lowercased names the keyword does not disqualify
    pub exempt_names: &'static [&'static str],
}

/// Exclusion rule for one dietary restriction label
pub struct DietaryRule {
    pub label: FoodAttribute,
    /// Substring literals that disqualify the label
    pub exclude_names: &'static [&'static str],
    /// Substring keywords that disqualify the label
    pub exclude_keywords: &'static [&'static str],
    /// Keywords that disqualify unless the whole name is exempt
    pub keyword_exceptions: &'static [KeywordException],
}

/// Exact-name override applied after the rule pass
pub struct SpecialCase {
    /// Trimmed, lowercased name this case applies to
    pub name: &'static str,
    pub add: &'static [FoodAttribute],
    pub remove: &'static [FoodAttribute],
}

const MILK_EXCEPTION: KeywordException = KeywordException {
    keyword: "milk",
    exempt_names: &[
        "coconut milk",
        "almond milk",
        "soy milk",
        "oat milk",
        "rice milk",
    ],
};

const BUTTER_EXCEPTION: KeywordException = KeywordException {
    keyword: "butter",
    exempt_names: &[
        "almond butter",
        "peanut butter",
        "cocoa butter",
        "butternut squash",
    ],
};

const CREAM_EXCEPTION: KeywordException = KeywordException {
    keyword: "cream",
    exempt_names: &["coconut cream", "cream of tartar"],
};

const EGG_EXCEPTION: KeywordException = KeywordException {
    keyword: "egg",
    exempt_names: &["eggplant", "raw eggplant"],
};

// "ham" as a substring also hits graham crackers
const HAM_EXCEPTION: KeywordException = KeywordException {
    keyword: "ham",
    exempt_names: &["graham cracker", "graham crackers"],
};

/// Dietary restriction rules, in classification output order
pub const DIETARY_RULES: [DietaryRule; 9] = [
    DietaryRule {
        label: FoodAttribute::Vegetarian,
        exclude_names: &[
            // Meat, poultry, fish
            "chicken", "beef", "pork", "bacon", "sausage", "turkey", "steak", "salmon", "cod",
            "tuna", "shrimp", "fish",
        ],
        exclude_keywords: &["meat", "poultry", "fish", "seafood"],
        keyword_exceptions: &[HAM_EXCEPTION],
    },
    DietaryRule {
        label: FoodAttribute::Vegan,
        exclude_names: &[
            // All vegetarian exclusions plus dairy and eggs
            "chicken", "beef", "pork", "bacon", "sausage", "turkey", "steak", "salmon", "cod",
            "tuna", "shrimp", "fish", "cheese", "yogurt", "honey", "ghee", "buttermilk",
        ],
        exclude_keywords: &["meat", "poultry", "fish", "seafood", "dairy", "cheese"],
        keyword_exceptions: &[
            MILK_EXCEPTION,
            BUTTER_EXCEPTION,
            CREAM_EXCEPTION,
            EGG_EXCEPTION,
            HAM_EXCEPTION,
        ],
    },
    DietaryRule {
        label: FoodAttribute::GlutenFree,
        exclude_names: &[
            // "worcestershire" often contains wheat
            "bread", "pasta", "couscous", "wheat", "barley", "rye", "breadcrumbs",
            "worcestershire",
        ],
        exclude_keywords: &["wheat", "gluten", "bread"],
        keyword_exceptions: &[KeywordException {
            keyword: "flour",
            exempt_names: &[
                "almond flour",
                "coconut flour",
                "rice flour",
                "chickpea flour",
            ],
        }],
    },
    DietaryRule {
        label: FoodAttribute::LactoseIntolerant,
        exclude_names: &["cheese", "yogurt", "ghee", "buttermilk"],
        exclude_keywords: &["cheese", "dairy", "lactose"],
        keyword_exceptions: &[MILK_EXCEPTION, BUTTER_EXCEPTION, CREAM_EXCEPTION],
    },
    DietaryRule {
        label: FoodAttribute::NutFree,
        exclude_names: &[
            // "tahini" is sesame paste but often grouped with tree nuts
            "almonds", "walnuts", "pecans", "cashews", "peanuts", "peanut", "almond", "tahini",
        ],
        exclude_keywords: &["walnut", "pecan", "cashew", "peanut", "almond"],
        keyword_exceptions: &[KeywordException {
            keyword: "nut",
            exempt_names: &["nutmeg", "ground nutmeg"],
        }],
    },
    DietaryRule {
        label: FoodAttribute::SoyFree,
        exclude_names: &["tofu", "tempeh", "soy", "tamari", "miso", "edamame"],
        exclude_keywords: &["soy", "tofu", "tempeh"],
        keyword_exceptions: &[],
    },
    DietaryRule {
        label: FoodAttribute::EggFree,
        exclude_names: &[],
        exclude_keywords: &[],
        keyword_exceptions: &[EGG_EXCEPTION],
    },
    DietaryRule {
        // Conservative: chicken, beef etc. could be halal if prepared properly,
        // but preparation cannot be assumed, so only pork products are excluded
        label: FoodAttribute::Halal,
        exclude_names: &["pork", "bacon"],
        exclude_keywords: &["pork"],
        keyword_exceptions: &[HAM_EXCEPTION],
    },
    DietaryRule {
        // Same conservatism as halal: only pork and shellfish are excluded
        label: FoodAttribute::Kosher,
        exclude_names: &["pork", "bacon", "shrimp", "shellfish"],
        exclude_keywords: &["pork", "shellfish"],
        keyword_exceptions: &[HAM_EXCEPTION],
    },
];

/// Name-level overrides the substring rules cannot express
pub const SPECIAL_CASES: [SpecialCase; 9] = [
    SpecialCase {
        // Wheat-based despite the innocuous name
        name: "graham cracker",
        add: &[],
        remove: &[FoodAttribute::GlutenFree],
    },
    SpecialCase {
        name: "graham crackers",
        add: &[],
        remove: &[FoodAttribute::GlutenFree],
    },
    SpecialCase {
        // Aquatic vegetable, not a nut
        name: "water chestnut",
        add: &[FoodAttribute::NutFree],
        remove: &[],
    },
    SpecialCase {
        name: "water chestnuts",
        add: &[FoodAttribute::NutFree],
        remove: &[],
    },
    SpecialCase {
        name: "butternut squash",
        add: &[FoodAttribute::NutFree],
        remove: &[],
    },
    SpecialCase {
        // Collagen-derived
        name: "gelatin",
        add: &[],
        remove: &[FoodAttribute::Vegetarian, FoodAttribute::Vegan],
    },
    SpecialCase {
        // Contains anchovies
        name: "worcestershire sauce",
        add: &[],
        remove: &[FoodAttribute::Vegetarian, FoodAttribute::Vegan],
    },
    SpecialCase {
        name: "oyster sauce",
        add: &[],
        remove: &[
            FoodAttribute::Vegetarian,
            FoodAttribute::Vegan,
            FoodAttribute::Kosher,
        ],
    },
    SpecialCase {
        // Made with bonito flakes
        name: "dashi",
        add: &[],
        remove: &[FoodAttribute::Vegetarian, FoodAttribute::Vegan],
    },
];

/// A regex fragment for one food group, with an optional counter-pattern
/// that vetoes the match (stands in for negative lookahead)
pub struct GroupPattern {
    pub pattern: &'static str,
    pub unless: Option<&'static str>,
}

/// Pattern rule for one MyPlate food group
pub struct GroupRule {
    pub label: FoodAttribute,
    /// Names matching any of these never receive the group
    pub exclusions: &'static [&'static str],
    pub patterns: &'static [GroupPattern],
}

const fn plain(pattern: &'static str) -> GroupPattern {
    GroupPattern {
        pattern,
        unless: None,
    }
}

/// Food group rules, in classification output order
pub const GROUP_RULES: [GroupRule; 6] = [
    GroupRule {
        label: FoodAttribute::Vegetables,
        exclusions: &[],
        patterns: &[
            plain("broccoli"),
            plain("cauliflower"),
            plain("carrot"),
            plain("celery"),
            plain("cucumber"),
            plain("lettuce"),
            plain("spinach"),
            plain("kale"),
            plain("cabbage"),
            plain("brussels sprout"),
            plain("asparagus"),
            plain("zucchini"),
            plain("squash"),
            plain("pumpkin"),
            plain("pepper"),
            plain("bell pepper"),
            plain("tomato"),
            plain("eggplant"),
            plain("onion"),
            plain("garlic"),
            plain("leek"),
            plain("mushroom"),
            plain("beet"),
            plain("radish"),
            plain("turnip"),
            plain("parsnip"),
            plain("chard"),
            plain("collard"),
            plain("arugula"),
            plain("bok choy"),
            plain("green bean"),
            GroupPattern {
                pattern: "corn",
                unless: Some("cornmeal|cornstarch"),
            },
            plain("sweet potato"),
            plain("potato"),
        ],
    },
    GroupRule {
        label: FoodAttribute::Fruits,
        exclusions: &[],
        patterns: &[
            plain("berry$"),
            plain("apple"),
            plain("banana"),
            plain("orange"),
            plain("grape"),
            plain("lemon"),
            plain("lime"),
            plain("peach"),
            plain("pear"),
            plain("plum"),
            plain("cherry"),
            plain("strawberr"),
            plain("blueberr"),
            plain("raspberr"),
            plain("blackberr"),
            plain("cranberr"),
            plain("mango"),
            plain("pineapple"),
            plain("watermelon"),
            plain("melon"),
            plain("kiwi"),
            plain("papaya"),
            plain("fig"),
            plain("date"),
            plain("apricot"),
            plain("nectarine"),
            plain("persimmon"),
            plain("pomegranate"),
            plain("guava"),
            plain("tangerine"),
            plain("grapefruit"),
            plain("cantaloupe"),
        ],
    },
    GroupRule {
        label: FoodAttribute::Grains,
        exclusions: &[],
        patterns: &[
            plain("flour"),
            plain("bread"),
            plain("pasta"),
            plain("noodle"),
            plain("rice"),
            plain("oat"),
            plain("barley"),
            plain("quinoa"),
            plain("couscous"),
            plain("wheat"),
            plain("tortilla"),
            plain("cereal"),
            plain("cracker"),
            plain("bagel"),
            plain("muffin"),
            plain("pancake"),
            plain("waffle"),
            plain("cornmeal"),
            plain("bulgur"),
            plain("farro"),
            plain("millet"),
            plain("sorghum"),
        ],
    },
    GroupRule {
        label: FoodAttribute::Protein,
        exclusions: &[],
        patterns: &[
            // Meat, poultry, eggs
            plain("chicken"),
            plain("beef"),
            plain("pork"),
            plain("turkey"),
            plain("duck"),
            plain("lamb"),
            plain("veal"),
            plain("egg"),
            plain("steak"),
            plain("ground"),
            plain("sausage"),
            plain("bacon"),
            plain("ham"),
            plain("loin"),
            plain("tenderloin"),
            plain("breast"),
            plain("thigh"),
            plain("broth"),
            // Seafood
            plain("fish"),
            plain("salmon"),
            plain("tuna"),
            plain("cod"),
            plain("tilapia"),
            plain("trout"),
            plain("halibut"),
            plain("sardine"),
            plain("mackerel"),
            plain("herring"),
            plain("anchovy"),
            plain("shrimp"),
            plain("crab"),
            plain("lobster"),
            plain("oyster"),
            plain("mussel"),
            plain("clam"),
            plain("scallop"),
            plain("squid"),
            // Plant proteins
            plain("tofu"),
            plain("tempeh"),
            plain("bean"),
            plain("lentil"),
            GroupPattern {
                pattern: "pea",
                unless: Some("peanut"),
            },
            plain("chickpea"),
            plain("nut"),
            plain("almond"),
            plain("cashew"),
            plain("walnut"),
            plain("peanut"),
            plain("pecan"),
            plain("pistachio"),
            plain("hazelnut"),
            plain("seed"),
            plain("chia"),
            plain("flax"),
            plain("hemp"),
            plain("sunflower seed"),
            plain("pumpkin seed"),
            plain("edamame"),
            plain("soy"),
        ],
    },
    GroupRule {
        label: FoodAttribute::Dairy,
        // Nut butters and coconut milk are protein, not dairy
        exclusions: &["butter.*nut", "peanut butter", "almond butter", "coconut milk"],
        patterns: &[
            plain("milk"),
            plain("cheese"),
            plain("yogurt"),
            GroupPattern {
                pattern: "cream",
                unless: Some("cream.*cheese"),
            },
            plain("buttermilk"),
            plain("cottage cheese"),
            plain("mozzarella"),
            plain("cheddar"),
            plain("parmesan"),
            plain("ricotta"),
            plain("feta"),
            plain("gouda"),
            plain("swiss cheese"),
            plain("provolone"),
            plain("brie"),
            plain("camembert"),
            plain("blue cheese"),
            plain("gorgonzola"),
            plain("kefir"),
            plain("evaporated milk"),
            plain("condensed milk"),
            plain("half.?and.?half"),
        ],
    },
    GroupRule {
        label: FoodAttribute::FatsAndOils,
        exclusions: &["butter.*nut", "peanut butter", "almond butter"],
        patterns: &[
            plain("oil$"),
            plain("olive oil"),
            plain("coconut oil"),
            plain("vegetable oil"),
            plain("canola oil"),
            plain("avocado oil"),
            plain("sesame oil"),
            plain("peanut oil"),
            plain("sunflower oil"),
            GroupPattern {
                pattern: "butter",
                unless: Some("buttermilk|butternut"),
            },
            plain("ghee"),
            plain("lard"),
            plain("shortening"),
            plain("margarine"),
            plain("mayo"),
            plain("mayonnaise"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tables_cover_the_vocabulary() {
        let dietary: Vec<FoodAttribute> = DIETARY_RULES.iter().map(|r| r.label).collect();
        assert_eq!(dietary, crate::models::DIETARY_ATTRIBUTES.to_vec());

        let groups: Vec<FoodAttribute> = GROUP_RULES.iter().map(|r| r.label).collect();
        assert_eq!(groups, crate::models::GROUP_ATTRIBUTES.to_vec());
    }

    #[test]
    fn test_special_case_names_are_canonical() {
        for case in &SPECIAL_CASES {
            assert_eq!(case.name, case.name.trim().to_lowercase());
            assert!(!case.add.is_empty() || !case.remove.is_empty());
        }
    }

    #[test]
    fn test_exception_names_are_canonical() {
        for rule in &DIETARY_RULES {
            for exception in rule.keyword_exceptions {
                for name in exception.exempt_names {
                    assert_eq!(*name, name.trim().to_lowercase());
                    assert!(
                        name.contains(exception.keyword),
                        "{} does not contain {}",
                        name,
                        exception.keyword
                    );
                }
            }
        }
    }
}
