//! Built-in demo dataset

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::models::{
    CampaignStatus, CampaignSummary, ChartPoint, CostKind, CouponRecord, ExpenseRecord,
    InvestmentRecord, LocalityInvestment, LocalityKey, LocationInvestment, MapPoint,
    ProductInvestment, SaleRecord,
};

use super::RecordStore;

/// Data sources a dashboard widget can be bound to
pub const DATA_SOURCES: [&str; 5] = ["sales", "users", "clicks", "sessions", "impacts"];

/// Chart types available to dashboard widgets
pub const CHART_TYPES: [&str; 6] = ["line", "bar", "pie", "scatter", "area", "radar"];

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in seed data"),
    }
}

// Evaluated at compile time, so a bad literal fails the build.
macro_rules! date {
    ($y:literal, $m:literal, $d:literal) => {
        const { ymd($y, $m, $d) }
    };
}

fn expense(date: NaiveDate, amount: f64) -> ExpenseRecord {
    ExpenseRecord::new(date, amount)
}

fn investment(date: NaiveDate, amount: f64) -> InvestmentRecord {
    InvestmentRecord { date, amount }
}

fn chart(points: &[(&str, f64)]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|(label, value)| ChartPoint {
            label: (*label).to_string(),
            value: *value,
        })
        .collect()
}

fn campaigns() -> Vec<CampaignSummary> {
    vec![
        CampaignSummary {
            id: 1,
            name: "Winter Campaign".into(),
            budget: 12000.0,
            status: CampaignStatus::Active,
            start_date: date!(2025, 6, 1),
            end_date: date!(2025, 7, 15),
            city: "Santiago".into(),
        },
        CampaignSummary {
            id: 2,
            name: "Summer Campaign".into(),
            budget: 18000.0,
            status: CampaignStatus::Finished,
            start_date: date!(2025, 1, 10),
            end_date: date!(2025, 2, 28),
            city: "Valparaíso".into(),
        },
        CampaignSummary {
            id: 3,
            name: "Back to School Campaign".into(),
            budget: 9500.0,
            status: CampaignStatus::Active,
            start_date: date!(2025, 3, 1),
            end_date: date!(2025, 4, 10),
            city: "Santiago".into(),
        },
    ]
}

/// Key-normalizing insert for string-keyed tables; seed keys are never blank.
fn keyed<K, V>(entries: Vec<(&str, V)>, make: impl Fn(&str) -> Option<K>) -> HashMap<K, V>
where
    K: Eq + std::hash::Hash,
{
    entries
        .into_iter()
        .filter_map(|(raw, value)| make(raw).map(|key| (key, value)))
        .collect()
}

pub(super) fn build() -> RecordStore {
    let expenses = HashMap::from([
        (
            1,
            vec![
                expense(date!(2025, 6, 1), 1500.0),
                expense(date!(2025, 6, 2), 2000.0),
                expense(date!(2025, 6, 3), 2500.0),
            ],
        ),
        (
            2,
            vec![
                ExpenseRecord::described(date!(2025, 6, 1), 500.0, "Advertising"),
                ExpenseRecord::described(date!(2025, 6, 4), 800.0, "Production"),
            ],
        ),
        (3, Vec::new()),
    ]);

    let expense_evolution = keyed(
        vec![
            (
                "advertising",
                vec![
                    expense(date!(2025, 1, 1), 500.0),
                    expense(date!(2025, 2, 1), 620.0),
                    expense(date!(2025, 3, 1), 580.0),
                ],
            ),
            (
                "production",
                vec![
                    expense(date!(2025, 1, 1), 400.0),
                    expense(date!(2025, 2, 1), 450.0),
                    expense(date!(2025, 3, 1), 420.0),
                ],
            ),
        ],
        |raw| CostKind::new(raw).ok(),
    );

    let locality_investment = keyed(
        vec![
            (
                "santiago",
                vec![
                    investment(date!(2025, 6, 1), 2000.0),
                    investment(date!(2025, 6, 2), 2500.0),
                    investment(date!(2025, 6, 3), 1500.0),
                ],
            ),
            (
                "valparaiso",
                vec![
                    investment(date!(2025, 6, 1), 1000.0),
                    investment(date!(2025, 6, 2), 1200.0),
                ],
            ),
        ],
        |raw| LocalityKey::new(raw).ok(),
    );

    let location_investment = HashMap::from([(
        1,
        vec![
            LocationInvestment {
                city: "Santiago".into(),
                country: Some("Chile".into()),
                investment: 5000.0,
                clicks: 1200,
                roi: 2.5,
            },
            LocationInvestment {
                city: "Lima".into(),
                country: Some("Peru".into()),
                investment: 3000.0,
                clicks: 800,
                roi: 1.9,
            },
        ],
    )]);

    let investment_map = HashMap::from([(
        1,
        vec![
            MapPoint {
                lat: -33.4489,
                lon: -70.6693,
                city: "Santiago".into(),
                total_investment: 5000.0,
                clicks: 1200,
                roi: 2.5,
            },
            MapPoint {
                lat: -12.0464,
                lon: -77.0428,
                city: "Lima".into(),
                total_investment: 3000.0,
                clicks: 800,
                roi: 1.9,
            },
        ],
    )]);

    let chart_metrics = HashMap::from([(
        1,
        HashMap::from([
            (
                "revenue".to_string(),
                chart(&[("2025-06-01", 1200.0), ("2025-06-02", 1350.0)]),
            ),
            (
                "clicks".to_string(),
                chart(&[("2025-06-01", 500.0), ("2025-06-02", 700.0)]),
            ),
            (
                "roi".to_string(),
                chart(&[("2025-06-01", 2.0), ("2025-06-02", 2.5)]),
            ),
        ]),
    )]);

    let locality_breakdown = HashMap::from([(
        1,
        vec![
            LocalityInvestment {
                locality: "Santiago".into(),
                amount: 3000.0,
            },
            LocalityInvestment {
                locality: "Valparaíso".into(),
                amount: 2000.0,
            },
        ],
    )]);

    let product_investment = HashMap::from([(
        1,
        vec![
            ProductInvestment {
                product: "Facebook Ads".into(),
                amount: 4000.0,
            },
            ProductInvestment {
                product: "Google Ads".into(),
                amount: 3500.0,
            },
        ],
    )]);

    let sales = HashMap::from([
        (
            1,
            vec![
                SaleRecord {
                    date: date!(2025, 6, 1),
                    channel: "online".into(),
                    amount: 15000.0,
                },
                SaleRecord {
                    date: date!(2025, 6, 2),
                    channel: "store".into(),
                    amount: 20000.0,
                },
            ],
        ),
        (2, Vec::new()),
        (3, Vec::new()),
    ]);

    let coupons = HashMap::from([
        (
            1,
            vec![CouponRecord {
                code: "DISCOUNT10".into(),
                discount: 10.0,
                valid_until: date!(2025, 7, 1),
            }],
        ),
        (2, Vec::new()),
        (3, Vec::new()),
    ]);

    let alerts = HashMap::from([
        (
            1,
            vec!["Budget exhausted".to_string(), "Recent inactivity".to_string()],
        ),
        (2, Vec::new()),
        (3, Vec::new()),
    ]);

    RecordStore {
        campaigns: campaigns(),
        expenses,
        expense_evolution,
        locality_investment,
        location_investment,
        investment_map,
        chart_metrics,
        locality_breakdown,
        product_investment,
        sales,
        coupons,
        alerts,
    }
}
