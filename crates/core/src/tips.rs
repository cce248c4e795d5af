use crate::{Category, CategoryUsage};

/// Inputs the tip rules are evaluated against, all derived from one
/// summary pass.
pub struct TipInput<'a> {
    pub breakdown: &'a [CategoryUsage],
    pub weekly_change: f64,
    pub average_daily: f64,
}

type TipRule = fn(&TipInput<'_>) -> Option<String>;

// Rule order fixes tip order in the output; each firing rule appends one
// tip. The week-over-week rule covers both directions so the increase and
// decrease tips stay mutually exclusive.
const RULES: &[TipRule] = &[
    shower_share,
    week_over_week,
    high_daily_average,
    cooking_share,
    cleaning_share,
];

const MAX_TIPS: usize = 4;

const DEFAULT_TIPS: &[&str] = &[
    "💡 Fix any leaky faucets - a single dripping tap can waste over 5,000 liters per year!",
    "🚿 Install water-efficient showerheads and faucet aerators to reduce flow without sacrificing pressure.",
    "🌱 Water plants in the early morning or evening to minimize evaporation and maximize absorption.",
];

pub fn suggest_improvements(input: &TipInput<'_>) -> Vec<String> {
    let mut tips: Vec<String> = RULES.iter().filter_map(|rule| rule(input)).collect();
    if tips.is_empty() {
        return DEFAULT_TIPS.iter().map(|tip| tip.to_string()).collect();
    }
    tips.truncate(MAX_TIPS);
    tips
}

fn category_percentage(input: &TipInput<'_>, category: Category) -> Option<f64> {
    input
        .breakdown
        .iter()
        .find(|entry| entry.category == category)
        .map(|entry| entry.percentage)
}

fn shower_share(input: &TipInput<'_>) -> Option<String> {
    let percentage = category_percentage(input, Category::Shower)?;
    if percentage > 40.0 {
        Some(
            "💧 Your shower usage accounts for over 40% of total consumption. Try reducing \
             shower time by 2 minutes to save up to 20 liters per shower!"
                .to_string(),
        )
    } else {
        None
    }
}

fn week_over_week(input: &TipInput<'_>) -> Option<String> {
    if input.weekly_change > 15.0 {
        Some(format!(
            "📈 Your water usage increased by {:.0}% this week. Consider tracking which \
             activities use the most water and find alternatives.",
            input.weekly_change.round()
        ))
    } else if input.weekly_change < -10.0 {
        Some(format!(
            "🎉 Great job! You reduced your water usage by {:.0}% compared to last week. \
             Keep up the excellent conservation habits!",
            input.weekly_change.round().abs()
        ))
    } else {
        None
    }
}

fn high_daily_average(input: &TipInput<'_>) -> Option<String> {
    if input.average_daily > 150.0 {
        Some(
            "⚠️ Your average daily usage is above 150L. The recommended average is around \
             80-100L per person. Look for ways to reduce consumption."
                .to_string(),
        )
    } else {
        None
    }
}

fn cooking_share(input: &TipInput<'_>) -> Option<String> {
    let percentage = category_percentage(input, Category::Cooking)?;
    if percentage > 25.0 {
        Some(
            "🍳 Consider reusing water from washing vegetables to water plants, and try \
             steaming instead of boiling to conserve water while cooking."
                .to_string(),
        )
    } else {
        None
    }
}

fn cleaning_share(input: &TipInput<'_>) -> Option<String> {
    let percentage = category_percentage(input, Category::Cleaning)?;
    if percentage > 30.0 {
        Some(
            "🧹 For cleaning, use a bucket instead of running water. This simple switch can \
             save up to 50 liters per cleaning session!"
                .to_string(),
        )
    } else {
        None
    }
}
