// src/topic.rs
//! Topic categories and their static metadata: keyword lists, priority weights,
//! display labels and UI color classes. Also holds the breaking/urgency keywords.
//!
//! Everything here is `'static` data. Lookups go through `TopicCategory::meta()`,
//! an exhaustive `match`, so a category can never be missing a piece of metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of topics an item can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicCategory {
    /// Economic releases, Fed, central banks
    MacroData,
    /// Equities, credit, currencies, commodities
    Markets,
    /// Tariffs, regulation with clear market impact
    PolicyMarket,
    /// Domestic policy without clear market impact
    PolicyOther,
    /// Wars, international relations affecting markets
    Geopolitical,
    /// Earnings, M&A, company news
    Corporate,
    /// Elections, campaigns, domestic politics
    Political,
    /// Everything else
    Other,
}

/// Static metadata row for one category.
#[derive(Debug)]
pub struct CategoryMeta {
    pub keywords: &'static [&'static str],
    pub weight: i32,
    pub label: &'static str,
    pub color: &'static str,
}

impl TopicCategory {
    /// Classification scan order. Ties are won by the category that comes first here.
    pub const CANONICAL_ORDER: [TopicCategory; 8] = [
        TopicCategory::MacroData,
        TopicCategory::Markets,
        TopicCategory::PolicyMarket,
        TopicCategory::Geopolitical,
        TopicCategory::Corporate,
        TopicCategory::Political,
        TopicCategory::PolicyOther,
        TopicCategory::Other,
    ];

    /// Categories whose news tends to move prices directly.
    pub const MARKET_MOVING: [TopicCategory; 4] = [
        TopicCategory::MacroData,
        TopicCategory::Markets,
        TopicCategory::PolicyMarket,
        TopicCategory::Geopolitical,
    ];

    pub fn meta(self) -> &'static CategoryMeta {
        match self {
            TopicCategory::MacroData => &MACRO_DATA,
            TopicCategory::Markets => &MARKETS,
            TopicCategory::PolicyMarket => &POLICY_MARKET,
            TopicCategory::PolicyOther => &POLICY_OTHER,
            TopicCategory::Geopolitical => &GEOPOLITICAL,
            TopicCategory::Corporate => &CORPORATE,
            TopicCategory::Political => &POLITICAL,
            TopicCategory::Other => &OTHER,
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        self.meta().keywords
    }

    pub fn weight(self) -> i32 {
        self.meta().weight
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn color(self) -> &'static str {
        self.meta().color
    }

    pub fn is_market_moving(self) -> bool {
        Self::MARKET_MOVING.contains(&self)
    }

    /// Wire name, e.g. `MACRO_DATA`.
    pub fn as_str(self) -> &'static str {
        match self {
            TopicCategory::MacroData => "MACRO_DATA",
            TopicCategory::Markets => "MARKETS",
            TopicCategory::PolicyMarket => "POLICY_MARKET",
            TopicCategory::PolicyOther => "POLICY_OTHER",
            TopicCategory::Geopolitical => "GEOPOLITICAL",
            TopicCategory::Corporate => "CORPORATE",
            TopicCategory::Political => "POLITICAL",
            TopicCategory::Other => "OTHER",
        }
    }
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ----------------------------
Category tables
---------------------------- */

static MACRO_DATA: CategoryMeta = CategoryMeta {
    keywords: &[
        "fed", "federal reserve", "fomc", "powell", "interest rate", "rate cut", "rate hike",
        "inflation", "cpi", "pce", "core inflation", "deflation", "disinflation",
        "gdp", "growth", "recession", "slowdown", "contraction", "expansion",
        "employment", "jobs report", "nfp", "payrolls", "unemployment", "jobless claims",
        "ism", "pmi", "manufacturing", "services",
        "retail sales", "consumer spending", "consumer confidence",
        "central bank", "boj", "ecb", "pboc", "boe", "rba", "snb",
        "monetary policy", "quantitative", "balance sheet", "taper",
        "housing starts", "building permits", "existing home sales",
    ],
    weight: 10,
    label: "Economic Data",
    color: "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
};

static MARKETS: CategoryMeta = CategoryMeta {
    keywords: &[
        "stock", "equities", "s&p", "dow", "nasdaq", "russell",
        "bond", "treasury", "treasuries", "yield", "yields", "credit spread", "high yield",
        "vix", "volatility", "implied vol",
        "dollar", "euro", "yen", "yuan", "currency", "forex", "fx", "dxy",
        "oil", "crude", "wti", "brent", "gold", "copper", "commodities", "silver",
        "futures", "options", "derivatives",
        "rally", "selloff", "correction", "bear market", "bull market",
        "support", "resistance", "breakout", "breakdown",
        "risk-off", "risk-on", "flight to quality",
    ],
    weight: 9,
    label: "Markets",
    color: "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
};

static POLICY_MARKET: CategoryMeta = CategoryMeta {
    keywords: &[
        "tariff", "tariffs", "trade war", "trade deal", "import tax", "export ban",
        "sanctions", "embargo", "trade policy", "trade talks",
        "regulation", "sec", "cftc", "banking regulation", "basel",
        "tax", "taxes", "fiscal", "deficit", "debt ceiling", "government shutdown",
        "antitrust", "breakup", "merger blocked",
        "stimulus", "fiscal stimulus", "infrastructure bill",
        "crypto regulation", "bitcoin etf",
    ],
    weight: 8,
    label: "Market Policy",
    color: "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200",
};

static GEOPOLITICAL: CategoryMeta = CategoryMeta {
    keywords: &[
        "war", "military", "invasion", "conflict", "attack",
        "nato", "alliance", "treaty",
        "china", "taiwan", "south china sea",
        "russia", "ukraine", "putin",
        "middle east", "iran", "israel", "saudi",
        "north korea", "nuclear",
        "oil supply", "strait", "shipping lane",
        "coup", "revolution", "regime change",
    ],
    weight: 7,
    label: "Geopolitical",
    color: "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
};

static CORPORATE: CategoryMeta = CategoryMeta {
    keywords: &[
        "earnings", "revenue", "profit", "guidance", "eps", "beat", "miss",
        "ipo", "merger", "acquisition", "buyout", "takeover", "deal",
        "layoffs", "restructuring", "cost cutting",
        "ceo", "management", "board",
        "dividend", "buyback", "share repurchase",
        "bankruptcy", "default", "credit downgrade",
    ],
    weight: 5,
    label: "Corporate",
    color: "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200",
};

static POLITICAL: CategoryMeta = CategoryMeta {
    keywords: &[
        "election", "campaign", "poll", "polls", "vote", "voting", "ballot",
        "congress", "senate", "house", "speaker", "majority",
        "republican", "democrat", "gop", "partisan", "bipartisan",
        "immigration", "border", "deportation",
        "impeach", "investigation", "subpoena",
        "supreme court", "judicial",
    ],
    weight: 2,
    label: "Politics",
    color: "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
};

static POLICY_OTHER: CategoryMeta = CategoryMeta {
    keywords: &[
        "401k", "401(k)", "retirement", "social security", "pension",
        "healthcare", "medicare", "medicaid", "obamacare", "aca",
        "education", "student loan", "college",
        "housing policy", "rent control", "zoning",
        "minimum wage", "labor law",
        "climate policy", "green new deal", "carbon tax",
    ],
    weight: 3,
    label: "Other Policy",
    color: "bg-gray-100 text-gray-600 dark:bg-gray-700 dark:text-gray-300",
};

static OTHER: CategoryMeta = CategoryMeta {
    keywords: &[],
    weight: 1,
    label: "Other",
    color: "bg-gray-100 text-gray-500 dark:bg-gray-800 dark:text-gray-400",
};

/// Urgency markers. The scorer stops at the first hit.
pub const BREAKING_KEYWORDS: &[&str] = &[
    "breaking", "just in", "alert", "urgent", "developing",
    "announces", "declares", "unveils", "confirms",
    "crash", "crashes", "surge", "surges", "plunge", "plunges", "spike", "spikes",
    "emergency", "crisis", "shock", "collapse",
    "halted", "suspended", "intervention",
];

/// Keywords rewarded when they appear in a title (MACRO_DATA then MARKETS).
pub fn title_boost_keywords() -> impl Iterator<Item = &'static str> {
    MACRO_DATA
        .keywords
        .iter()
        .chain(MARKETS.keywords.iter())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_descend_with_other_lowest() {
        assert_eq!(TopicCategory::MacroData.weight(), 10);
        assert_eq!(TopicCategory::Markets.weight(), 9);
        assert_eq!(TopicCategory::PolicyMarket.weight(), 8);
        assert_eq!(TopicCategory::Geopolitical.weight(), 7);
        assert_eq!(TopicCategory::Corporate.weight(), 5);
        assert_eq!(TopicCategory::PolicyOther.weight(), 3);
        assert_eq!(TopicCategory::Political.weight(), 2);
        assert_eq!(TopicCategory::Other.weight(), 1);

        let min = TopicCategory::CANONICAL_ORDER
            .iter()
            .map(|c| c.weight())
            .min()
            .unwrap();
        assert_eq!(min, TopicCategory::Other.weight());
    }

    #[test]
    fn keywords_are_lowercase_and_other_is_empty() {
        for cat in TopicCategory::CANONICAL_ORDER {
            for kw in cat.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "{cat}: keyword `{kw}` not lowercase");
            }
        }
        assert!(TopicCategory::Other.keywords().is_empty());
        for kw in BREAKING_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn canonical_order_ends_with_other_and_covers_all() {
        let order = TopicCategory::CANONICAL_ORDER;
        assert_eq!(order[order.len() - 1], TopicCategory::Other);
        let mut seen = std::collections::HashSet::new();
        for c in order {
            assert!(seen.insert(c), "duplicate {c}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let s = serde_json::to_string(&TopicCategory::PolicyMarket).unwrap();
        assert_eq!(s, "\"POLICY_MARKET\"");
        let back: TopicCategory = serde_json::from_str("\"MACRO_DATA\"").unwrap();
        assert_eq!(back, TopicCategory::MacroData);
        assert_eq!(TopicCategory::Geopolitical.to_string(), "GEOPOLITICAL");
    }

    #[test]
    fn labels_and_market_moving_set() {
        assert_eq!(TopicCategory::MacroData.label(), "Economic Data");
        assert_eq!(TopicCategory::PolicyOther.label(), "Other Policy");
        assert!(TopicCategory::Geopolitical.is_market_moving());
        assert!(!TopicCategory::Corporate.is_market_moving());
        assert!(!TopicCategory::Other.is_market_moving());
    }

    #[test]
    fn title_boost_covers_macro_then_markets() {
        let all: Vec<_> = title_boost_keywords().collect();
        assert_eq!(
            all.len(),
            TopicCategory::MacroData.keywords().len() + TopicCategory::Markets.keywords().len()
        );
        assert_eq!(all[0], "fed");
        assert_eq!(*all.last().unwrap(), "flight to quality");
    }
}
