use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod summary;
mod tips;

pub use summary::calculate_summary;
pub use tips::{TipInput, suggest_improvements};

/// Closed set of usage classifications. Declaration order is the fixed
/// iteration order used for the breakdown and for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Shower,
    Cooking,
    Cleaning,
    Drinking,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Shower,
        Category::Cooking,
        Category::Cleaning,
        Category::Drinking,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shower => "Shower",
            Category::Cooking => "Cooking",
            Category::Cleaning => "Cleaning",
            Category::Drinking => "Drinking",
            Category::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    pub id: String,
    pub amount: f64,
    pub category: Category,
    pub usage_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create-record input; id and timestamps are assigned at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub amount: f64,
    pub category: Category,
    pub usage_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayUsage {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyComparison {
    pub this_week: f64,
    pub last_week: f64,
    pub percentage_change: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_usage: f64,
    pub average_daily_usage: f64,
    pub highest_usage_day: Option<DayUsage>,
    pub most_used_category: Option<CategoryUsage>,
    pub weekly_comparison: WeeklyComparison,
    pub category_breakdown: Vec<CategoryUsage>,
    pub daily_trend: Vec<DayUsage>,
    pub suggested_improvements: Vec<String>,
}
