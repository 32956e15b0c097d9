use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_core::{Category, DomainError, DomainResult};

/// A named calendar event with category-specific demand impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    name: String,
    date: NaiveDate,
    impact_categories: Vec<Category>,
    demand_multiplier: f64,
}

impl Festival {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        impact_categories: impl IntoIterator<Item = Category>,
        demand_multiplier: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let impact_categories: Vec<Category> = impact_categories.into_iter().collect();

        if name.trim().is_empty() {
            return Err(DomainError::validation("festival name cannot be empty"));
        }
        if impact_categories.is_empty() {
            return Err(DomainError::validation(
                "festival must impact at least one category",
            ));
        }
        if !(demand_multiplier.is_finite() && demand_multiplier > 1.0) {
            return Err(DomainError::validation(
                "demand_multiplier must be greater than 1.0",
            ));
        }

        Ok(Self {
            name,
            date,
            impact_categories,
            demand_multiplier,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn impact_categories(&self) -> &[Category] {
        &self.impact_categories
    }

    pub fn demand_multiplier(&self) -> f64 {
        self.demand_multiplier
    }

    pub fn impacts(&self, category: Category) -> bool {
        self.impact_categories.contains(&category)
    }

    /// Signed days between `today` and the festival date.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

/// Year-scoped festival table, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalCalendar {
    festivals: Vec<Festival>,
}

impl FestivalCalendar {
    pub fn new(mut festivals: Vec<Festival>) -> Self {
        festivals.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        Self { festivals }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The Malaysian festival table for one calendar year.
    ///
    /// Lunar-calendar dates are tabulated for 2025-2027; other years carry
    /// only the fixed-date entries.
    pub fn malaysian(year: i32) -> Self {
        let mut festivals = Vec::new();

        let mut push = |name: &str, date: Option<NaiveDate>, categories: &[Category], multiplier: f64| {
            if let Some(date) = date {
                // The definitions are static and well-formed; skip rather
                // than panic if one is ever not.
                if let Ok(festival) = Festival::new(name, date, categories.iter().copied(), multiplier)
                {
                    festivals.push(festival);
                }
            }
        };

        let all = [Category::Poultry, Category::Produce, Category::Dairy];
        let poultry_dairy = [Category::Poultry, Category::Dairy];
        let produce_dairy = [Category::Produce, Category::Dairy];

        let cny = match year {
            2025 => NaiveDate::from_ymd_opt(2025, 1, 29),
            2026 => NaiveDate::from_ymd_opt(2026, 2, 17),
            2027 => NaiveDate::from_ymd_opt(2027, 2, 6),
            _ => None,
        };
        push("Chinese New Year", cny, &all, 2.5);
        push(
            "Chinese New Year Day 2",
            cny.and_then(|d| d.succ_opt()),
            &all,
            2.5,
        );

        let raya = match year {
            2025 => NaiveDate::from_ymd_opt(2025, 3, 30),
            2026 => NaiveDate::from_ymd_opt(2026, 3, 20),
            2027 => NaiveDate::from_ymd_opt(2027, 3, 10),
            _ => None,
        };
        push("Hari Raya Aidilfitri", raya, &poultry_dairy, 3.0);
        push(
            "Hari Raya Aidilfitri Day 2",
            raya.and_then(|d| d.succ_opt()),
            &poultry_dairy,
            3.0,
        );

        let deepavali = match year {
            2025 => NaiveDate::from_ymd_opt(2025, 10, 20),
            2026 => NaiveDate::from_ymd_opt(2026, 11, 8),
            2027 => NaiveDate::from_ymd_opt(2027, 10, 29),
            _ => None,
        };
        push("Deepavali", deepavali, &produce_dairy, 2.0);

        push(
            "Christmas",
            NaiveDate::from_ymd_opt(year, 12, 25),
            &poultry_dairy,
            1.8,
        );

        Self::new(festivals)
    }

    /// Malaysian festivals for `year` and the following year, so a horizon
    /// crossing New Year still sees January events.
    pub fn malaysian_spanning(year: i32) -> Self {
        let mut festivals = Self::malaysian(year).festivals;
        festivals.extend(Self::malaysian(year + 1).festivals);
        Self::new(festivals)
    }

    pub fn festivals(&self) -> &[Festival] {
        &self.festivals
    }

    /// Festivals falling today or within the next `within_days` days.
    pub fn upcoming(&self, today: NaiveDate, within_days: i64) -> Vec<&Festival> {
        self.festivals
            .iter()
            .filter(|f| {
                let days = f.days_until(today);
                (0..=within_days).contains(&days)
            })
            .collect()
    }

    /// The soonest upcoming festival that impacts `category`.
    ///
    /// Ties on the same date resolve by name order, which the sorted table
    /// makes stable.
    pub fn next_impacting(
        &self,
        today: NaiveDate,
        within_days: i64,
        category: Category,
    ) -> Option<&Festival> {
        self.upcoming(today, within_days)
            .into_iter()
            .find(|f| f.impacts(category))
    }
}
