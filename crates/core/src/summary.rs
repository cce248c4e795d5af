use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{Datelike, Duration, NaiveDate};

use crate::tips::{TipInput, suggest_improvements};
use crate::{Category, CategoryUsage, DayUsage, UsageSummary, WaterRecord, WeeklyComparison};

/// Derive the full usage summary from a record collection.
///
/// `today` anchors the weekly comparison and the 14-day trend window;
/// callers pass the current local calendar date. The computation is pure,
/// so a fixed `today` yields identical summaries for identical input.
/// Tie-breaks (highest day, most-used category) resolve to the
/// first-encountered entry, which makes the supplied record order part of
/// the contract.
pub fn calculate_summary(records: &[WaterRecord], today: NaiveDate) -> UsageSummary {
    let mut total_usage = 0.0;
    let mut day_order: Vec<NaiveDate> = Vec::new();
    let mut day_totals: HashMap<NaiveDate, f64> = HashMap::new();
    for record in records {
        total_usage += record.amount;
        match day_totals.entry(record.usage_date) {
            Entry::Occupied(mut entry) => *entry.get_mut() += record.amount,
            Entry::Vacant(entry) => {
                entry.insert(record.amount);
                day_order.push(record.usage_date);
            }
        }
    }

    let days_with_data = day_order.len().max(1);
    let average_daily_usage = total_usage / days_with_data as f64;

    // Only a strictly greater total replaces, so the earliest-seen date
    // wins ties.
    let mut highest_usage_day: Option<DayUsage> = None;
    for date in &day_order {
        let amount = day_totals[date];
        let replace = match &highest_usage_day {
            None => true,
            Some(best) => amount > best.amount,
        };
        if replace {
            highest_usage_day = Some(DayUsage {
                date: *date,
                amount,
            });
        }
    }

    let mut category_totals = [0.0f64; Category::ALL.len()];
    for record in records {
        category_totals[record.category as usize] += record.amount;
    }

    let mut category_breakdown: Vec<CategoryUsage> = Vec::new();
    for category in Category::ALL {
        let amount = category_totals[category as usize];
        if amount <= 0.0 {
            continue;
        }
        let percentage = if total_usage > 0.0 {
            amount / total_usage * 100.0
        } else {
            0.0
        };
        category_breakdown.push(CategoryUsage {
            category,
            amount,
            percentage,
        });
    }

    let mut most_used_category: Option<CategoryUsage> = None;
    for entry in &category_breakdown {
        let replace = match &most_used_category {
            None => true,
            Some(best) => entry.amount > best.amount,
        };
        if replace {
            most_used_category = Some(entry.clone());
        }
    }

    let weekly_comparison = compare_weeks(records, today);

    let daily_trend: Vec<DayUsage> = (0..14)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DayUsage {
                date,
                amount: day_totals.get(&date).copied().unwrap_or(0.0),
            }
        })
        .collect();

    let suggested_improvements = suggest_improvements(&TipInput {
        breakdown: &category_breakdown,
        weekly_change: weekly_comparison.percentage_change,
        average_daily: average_daily_usage,
    });

    UsageSummary {
        total_usage,
        average_daily_usage,
        highest_usage_day,
        most_used_category,
        weekly_comparison,
        category_breakdown,
        daily_trend,
        suggested_improvements,
    }
}

fn compare_weeks(records: &[WaterRecord], today: NaiveDate) -> WeeklyComparison {
    let this_week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let this_week_end = this_week_start + Duration::days(6);
    let last_week_start = this_week_start - Duration::days(7);
    let last_week_end = this_week_start - Duration::days(1);

    let this_week = window_total(records, this_week_start, this_week_end);
    let last_week = window_total(records, last_week_start, last_week_end);

    // Defined fallbacks keep the change finite when last week is empty.
    let percentage_change = if last_week > 0.0 {
        (this_week - last_week) / last_week * 100.0
    } else if this_week > 0.0 {
        100.0
    } else {
        0.0
    };

    WeeklyComparison {
        this_week,
        last_week,
        percentage_change,
    }
}

fn window_total(records: &[WaterRecord], start: NaiveDate, end: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|record| record.usage_date >= start && record.usage_date <= end)
        .map(|record| record.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn record(amount: f64, category: Category, usage_date: NaiveDate) -> WaterRecord {
        WaterRecord {
            id: format!("{}-{}-{}", category.as_str(), usage_date, amount),
            amount,
            category,
            usage_date,
            notes: None,
            created_at: "2025-03-19T10:00:00Z".to_string(),
            updated_at: "2025-03-19T10:00:00Z".to_string(),
        }
    }

    // 2025-03-19 is a Wednesday; its Monday-anchored week is Mar 17-23 and
    // the previous week is Mar 10-16.
    const TODAY: (i32, u32, u32) = (2025, 3, 19);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn empty_input_degrades_to_defaults() {
        let summary = calculate_summary(&[], today());

        assert_eq!(summary.total_usage, 0.0);
        assert_eq!(summary.average_daily_usage, 0.0);
        assert_eq!(summary.highest_usage_day, None);
        assert_eq!(summary.most_used_category, None);
        assert!(summary.category_breakdown.is_empty());
        assert_eq!(summary.weekly_comparison.percentage_change, 0.0);
        assert_eq!(summary.daily_trend.len(), 14);
        assert!(summary.daily_trend.iter().all(|day| day.amount == 0.0));
        assert_eq!(summary.suggested_improvements.len(), 3);
    }

    #[test]
    fn same_day_records_roll_up_into_one_day() {
        let day = date(2025, 3, 18);
        let records = vec![
            record(50.0, Category::Shower, day),
            record(30.0, Category::Cooking, day),
        ];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.total_usage, 80.0);
        assert_eq!(summary.average_daily_usage, 80.0);
        let highest = summary.highest_usage_day.expect("highest day");
        assert_eq!(highest.date, day);
        assert_eq!(highest.amount, 80.0);
        let most_used = summary.most_used_category.expect("most used");
        assert_eq!(most_used.category, Category::Shower);
        assert_eq!(most_used.amount, 50.0);
        assert_eq!(most_used.percentage, 62.5);
    }

    #[test]
    fn breakdown_amounts_and_percentages_are_consistent() {
        let records = vec![
            record(40.0, Category::Shower, date(2025, 3, 17)),
            record(25.0, Category::Cooking, date(2025, 3, 17)),
            record(20.0, Category::Cleaning, date(2025, 3, 18)),
            record(15.0, Category::Drinking, date(2025, 3, 18)),
        ];

        let summary = calculate_summary(&records, today());

        let amount_sum: f64 = summary
            .category_breakdown
            .iter()
            .map(|entry| entry.amount)
            .sum();
        let percentage_sum: f64 = summary
            .category_breakdown
            .iter()
            .map(|entry| entry.percentage)
            .sum();
        assert_eq!(amount_sum, summary.total_usage);
        assert!((percentage_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_keeps_fixed_order_and_drops_zero_categories() {
        let records = vec![
            record(10.0, Category::Other, date(2025, 3, 17)),
            record(10.0, Category::Cooking, date(2025, 3, 17)),
            record(10.0, Category::Shower, date(2025, 3, 17)),
        ];

        let summary = calculate_summary(&records, today());

        let order: Vec<Category> = summary
            .category_breakdown
            .iter()
            .map(|entry| entry.category)
            .collect();
        assert_eq!(
            order,
            vec![Category::Shower, Category::Cooking, Category::Other]
        );
        // Equal totals: the first category in the fixed order wins.
        assert_eq!(
            summary.most_used_category.expect("most used").category,
            Category::Shower
        );
    }

    #[test]
    fn highest_day_tie_resolves_to_first_encountered_date() {
        let records = vec![
            record(30.0, Category::Shower, date(2025, 3, 18)),
            record(30.0, Category::Shower, date(2025, 3, 17)),
        ];

        let summary = calculate_summary(&records, today());

        let highest = summary.highest_usage_day.expect("highest day");
        assert_eq!(highest.date, date(2025, 3, 18));
    }

    #[test]
    fn weekly_change_is_zero_when_both_weeks_are_empty() {
        let records = vec![record(12.0, Category::Other, date(2025, 1, 5))];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.weekly_comparison.this_week, 0.0);
        assert_eq!(summary.weekly_comparison.last_week, 0.0);
        assert_eq!(summary.weekly_comparison.percentage_change, 0.0);
    }

    #[test]
    fn weekly_change_caps_at_hundred_when_last_week_is_empty() {
        let records = vec![record(20.0, Category::Shower, date(2025, 3, 18))];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.weekly_comparison.this_week, 20.0);
        assert_eq!(summary.weekly_comparison.last_week, 0.0);
        assert_eq!(summary.weekly_comparison.percentage_change, 100.0);
    }

    #[test]
    fn weekly_change_is_signed_percentage_of_last_week() {
        let records = vec![
            record(80.0, Category::Shower, date(2025, 3, 17)),
            record(100.0, Category::Shower, date(2025, 3, 12)),
        ];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.weekly_comparison.this_week, 80.0);
        assert_eq!(summary.weekly_comparison.last_week, 100.0);
        assert_eq!(summary.weekly_comparison.percentage_change, -20.0);
    }

    #[test]
    fn weekly_windows_use_monday_anchored_inclusive_bounds() {
        let records = vec![
            // Monday and Sunday of the current week.
            record(10.0, Category::Shower, date(2025, 3, 17)),
            record(5.0, Category::Shower, date(2025, 3, 23)),
            // Monday and Sunday of the previous week.
            record(4.0, Category::Cooking, date(2025, 3, 10)),
            record(6.0, Category::Cooking, date(2025, 3, 16)),
            // Just outside both windows.
            record(99.0, Category::Other, date(2025, 3, 9)),
        ];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.weekly_comparison.this_week, 15.0);
        assert_eq!(summary.weekly_comparison.last_week, 10.0);
    }

    #[test]
    fn daily_trend_is_fourteen_ascending_days_ending_today() {
        let records = vec![
            record(7.0, Category::Drinking, today()),
            record(3.0, Category::Drinking, date(2025, 3, 6)),
        ];

        let summary = calculate_summary(&records, today());

        assert_eq!(summary.daily_trend.len(), 14);
        assert_eq!(summary.daily_trend[0].date, date(2025, 3, 6));
        assert_eq!(summary.daily_trend[13].date, today());
        for window in summary.daily_trend.windows(2) {
            assert_eq!(window[1].date - window[0].date, Duration::days(1));
        }
        assert_eq!(summary.daily_trend[0].amount, 3.0);
        assert_eq!(summary.daily_trend[13].amount, 7.0);
        assert_eq!(summary.daily_trend[5].amount, 0.0);
    }

    #[test]
    fn trend_window_excludes_older_records() {
        let records = vec![record(42.0, Category::Cleaning, date(2025, 3, 5))];

        let summary = calculate_summary(&records, today());

        assert!(summary.daily_trend.iter().all(|day| day.amount == 0.0));
        // The record still counts toward the totals.
        assert_eq!(summary.total_usage, 42.0);
    }

    #[test]
    fn summary_is_deterministic_for_a_fixed_reference_date() {
        let records = vec![
            record(50.0, Category::Shower, date(2025, 3, 18)),
            record(30.0, Category::Cooking, date(2025, 3, 12)),
            record(12.0, Category::Drinking, date(2025, 3, 17)),
        ];

        let first = calculate_summary(&records, today());
        let second = calculate_summary(&records, today());

        assert_eq!(first, second);
    }
}
