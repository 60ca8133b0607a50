/// A counter in the metrics band. Counts up from `start_from` to `value`
/// when scrolled into view.
pub struct Metric {
    pub value: u64,
    pub start_from: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static METRICS: &[Metric] = &[
    Metric {
        value: 12_000,
        start_from: 9_000,
        suffix: "+",
        label: "Active Retailers",
        description: "Kirana stores and supermarkets trust us daily",
    },
    Metric {
        value: 2_400_000,
        start_from: 2_000_000,
        suffix: "+",
        label: "Transactions",
        description: "Processed successfully every month",
    },
    Metric {
        value: 100,
        start_from: 90,
        suffix: "+",
        label: "Smart Minds",
        description: "Dedicated team members driving innovation",
    },
];

/// Counters under the hero heading. They always count up from zero.
pub struct HeroStat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: &[HeroStat] = &[
    HeroStat { value: 12_000, suffix: "+", label: "Retailers" },
    HeroStat { value: 1_000_000, suffix: "+", label: "Transactions" },
    HeroStat { value: 100, suffix: "+", label: "Smart Minds" },
];

/// Stat cards of the careers hero.
pub static CAREERS_STATS: &[(&str, &str)] = &[
    ("10+", "Open Positions"),
    ("3+", "Office Locations"),
    ("100+", "Team Members"),
];
