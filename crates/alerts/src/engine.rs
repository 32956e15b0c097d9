use chrono::{DateTime, NaiveDate, Utc};

use freshpredict_catalog::Product;
use freshpredict_core::Unit;
use freshpredict_forecast::{ForecastResult, TrendDirection};
use freshpredict_inventory::{DemandHistory, InventoryLot};

use crate::config::AlertConfig;
use crate::preparation::{PreparationAlert, PreparationAlertType};
use crate::severity::Severity;
use crate::sustainability::{SustainabilityAlert, SustainabilityAlertType};

/// Deterministic alert rule evaluation.
///
/// Pure over its inputs: the same product/forecast/inventory snapshot always
/// yields the same alerts. Timestamps come from the supplied `now`, ids from
/// the rule + product + evaluation date.
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    config: AlertConfig,
}

impl AlertEngine {
    pub fn new(config: AlertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Evaluate demand-preparation rules for one product.
    ///
    /// `total_stock` is the product's stock summed across lots; preparation
    /// alerts are about the product's selling position, not a single batch.
    pub fn preparation_alerts(
        &self,
        product: &Product,
        total_stock: f64,
        history: &DemandHistory,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<PreparationAlert> {
        [
            self.demand_spike(product, history, forecast, today, now),
            self.stock_out_risk(product, total_stock, forecast, today, now),
            self.festive_surge(product, forecast, today, now),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Evaluate waste-sustainability rules for one inventory lot.
    pub fn sustainability_alerts(
        &self,
        product: &Product,
        lot: &InventoryLot,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Vec<SustainabilityAlert> {
        [
            self.expiry_risk(product, lot, forecast, today, now),
            self.overstock(product, lot, forecast, today, now),
            self.slow_moving(product, lot, forecast, today, now),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn demand_spike(
        &self,
        product: &Product,
        history: &DemandHistory,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<PreparationAlert> {
        let cfg = &self.config;
        let window = cfg.spike_window_days;
        let predicted = forecast.leading_mean(window);
        let trailing = history.trailing_mean(window);

        // No historical baseline, no spike statement to make.
        if trailing <= 0.0 {
            return None;
        }

        let excess = predicted / trailing - 1.0;
        if excess <= cfg.spike_excess_threshold {
            return None;
        }

        let severity = if excess > cfg.spike_high_threshold {
            Severity::High
        } else if excess > cfg.spike_medium_threshold {
            Severity::Medium
        } else {
            Severity::Low
        };

        let unit = product.unit();
        let alert_type = PreparationAlertType::DemandSpike;
        Some(PreparationAlert {
            id: alert_type.alert_id(product.id(), today),
            product_id: product.id().clone(),
            alert_type,
            severity,
            message: format!(
                "Forecast demand for {} ({predicted:.1} {unit}/day over the next {window} days) \
                 runs {:.0}% above the recent average ({trailing:.1} {unit}/day)",
                product.name(),
                excess * 100.0,
            ),
            recommended_action: format!(
                "Order ahead from {}: cover about {:.0} {unit} for the coming {window} days",
                product.default_supplier(),
                predicted * window as f64,
            ),
            predicted_demand_increase: excess * 100.0,
            days_until_event: 0,
            created_at: now,
        })
    }

    fn stock_out_risk(
        &self,
        product: &Product,
        total_stock: f64,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<PreparationAlert> {
        let cfg = &self.config;
        let daily = forecast.mean_daily_demand();

        // Zero forecast demand means infinite coverage; nothing to run out of.
        if daily <= 0.0 {
            return None;
        }

        let coverage = total_stock / daily;
        if coverage >= cfg.lead_time_days {
            return None;
        }

        let severity = if coverage < cfg.lead_time_days * cfg.coverage_high_fraction {
            Severity::High
        } else if coverage < cfg.lead_time_days * cfg.coverage_medium_fraction {
            Severity::Medium
        } else {
            Severity::Low
        };

        let unit = product.unit();
        let alert_type = PreparationAlertType::StockOutRisk;
        Some(PreparationAlert {
            id: alert_type.alert_id(product.id(), today),
            product_id: product.id().clone(),
            alert_type,
            severity,
            message: format!(
                "Stock of {} ({total_stock:.0} {unit}) covers about {coverage:.1} days at \
                 forecast demand ({daily:.1} {unit}/day), under the {:.0}-day supplier lead time",
                product.name(),
                cfg.lead_time_days,
            ),
            recommended_action: format!(
                "Reorder from {} now; delivery takes about {:.0} days",
                product.default_supplier(),
                cfg.lead_time_days,
            ),
            predicted_demand_increase: 0.0,
            days_until_event: (coverage.floor() as i64).max(0),
            created_at: now,
        })
    }

    fn festive_surge(
        &self,
        product: &Product,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<PreparationAlert> {
        let cfg = &self.config;
        let impact = forecast.festive_impact.as_ref()?;

        if !(0..=cfg.festive_horizon_days).contains(&impact.days_until) {
            return None;
        }

        let severity = if impact.demand_multiplier >= cfg.festive_high_multiplier {
            Severity::High
        } else {
            Severity::Medium
        };

        let alert_type = PreparationAlertType::FestiveSurge;
        Some(PreparationAlert {
            id: alert_type.alert_id(product.id(), today),
            product_id: product.id().clone(),
            alert_type,
            severity,
            message: format!(
                "{} on {} is expected to lift {} demand to {:.1}x normal",
                impact.name,
                impact.date,
                product.category(),
                impact.demand_multiplier,
            ),
            recommended_action: format!(
                "Build up {} stock before {}; plan for roughly {:.1}x normal sales around the peak",
                product.name(),
                impact.name,
                impact.demand_multiplier,
            ),
            predicted_demand_increase: (impact.demand_multiplier - 1.0) * 100.0,
            days_until_event: impact.days_until,
            created_at: now,
        })
    }

    fn expiry_risk(
        &self,
        product: &Product,
        lot: &InventoryLot,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<SustainabilityAlert> {
        let cfg = &self.config;
        let stock = lot.current_stock();
        if stock <= 0.0 {
            return None;
        }

        let days = lot.days_until_expiry(today);
        if days > cfg.expiry_alert_days {
            return None;
        }

        // Stock the forecast cannot sell before expiry is the waste exposure.
        let sellable_days = days.max(0) as f64;
        let projected_sales = forecast.mean_daily_demand() * sellable_days;
        let unsold_units = (stock - projected_sales).max(0.0);

        let severity = if days <= cfg.expiry_critical_days {
            Severity::High
        } else {
            Severity::Medium
        };

        let unit = product.unit();
        let message = if days <= 0 {
            // Day zero counts as expired, never as "expires in 0 days".
            format!(
                "{} is expired as of {}: {stock:.0} {unit} must come off the shelf",
                product.name(),
                lot.expiry_date(),
            )
        } else {
            format!(
                "{} expires in {days} day(s): {stock:.0} {unit} at risk, \
                 about {unsold_units:.0} {unit} unlikely to sell in time",
                product.name(),
            )
        };

        let recommended_action = if days <= cfg.expiry_critical_days {
            format!(
                "URGENT: apply a {}% markdown or donate to a food bank today",
                cfg.critical_markdown_pct,
            )
        } else {
            format!(
                "Apply a {}% discount to accelerate sales before {}",
                cfg.warning_discount_pct,
                lot.expiry_date(),
            )
        };

        let alert_type = SustainabilityAlertType::ExpiryRisk;
        Some(SustainabilityAlert {
            id: alert_type.alert_id(product.id(), lot.id(), today),
            product_id: product.id().clone(),
            lot_id: lot.id(),
            alert_type,
            severity,
            message,
            recommended_action,
            days_until_expiry: days,
            potential_waste_kg: self.waste_kg(unsold_units, unit),
            potential_loss_rm: unsold_units * product.cost_per_unit(),
            created_at: now,
        })
    }

    fn overstock(
        &self,
        product: &Product,
        lot: &InventoryLot,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<SustainabilityAlert> {
        let cfg = &self.config;
        let ratio = lot.reorder_ratio();

        if ratio <= cfg.overstock_ratio {
            return None;
        }
        // Rising demand will absorb the extra stock; no overstock call.
        if forecast.trend == TrendDirection::Increasing {
            return None;
        }

        let stock = lot.current_stock();
        let excess_units = stock - lot.reorder_point() * cfg.overstock_ratio;

        let unit = product.unit();
        let alert_type = SustainabilityAlertType::Overstock;
        Some(SustainabilityAlert {
            id: alert_type.alert_id(product.id(), lot.id(), today),
            product_id: product.id().clone(),
            lot_id: lot.id(),
            alert_type,
            severity: Severity::Medium,
            message: format!(
                "Overstock of {}: {stock:.0} {unit} on hand is {ratio:.1}x the reorder point \
                 ({:.0} {unit})",
                product.name(),
                lot.reorder_point(),
            ),
            recommended_action: format!(
                "Scale back incoming orders and promote {} to draw down roughly \
                 {excess_units:.0} {unit}",
                product.name(),
            ),
            days_until_expiry: lot.days_until_expiry(today),
            potential_waste_kg: self.waste_kg(excess_units, unit),
            potential_loss_rm: excess_units * product.cost_per_unit(),
            created_at: now,
        })
    }

    fn slow_moving(
        &self,
        product: &Product,
        lot: &InventoryLot,
        forecast: &ForecastResult,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<SustainabilityAlert> {
        let cfg = &self.config;
        let stock = lot.current_stock();
        if stock <= 0.0 {
            return None;
        }

        let shelf_life = f64::from(product.shelf_life_days());
        let required_daily = stock / shelf_life;
        let daily = forecast.mean_daily_demand();

        if daily >= required_daily {
            return None;
        }

        // Zero forecast demand cannot be ratioed; clamp to maximum severity.
        let severity = if daily <= 0.0 {
            Severity::High
        } else {
            let shortfall = required_daily / daily;
            if shortfall >= cfg.slow_moving_high_ratio {
                Severity::High
            } else if shortfall >= cfg.slow_moving_medium_ratio {
                Severity::Medium
            } else {
                Severity::Low
            }
        };

        let unsold_units = (stock - daily * shelf_life).max(0.0);

        let unit = product.unit();
        let alert_type = SustainabilityAlertType::SlowMoving;
        Some(SustainabilityAlert {
            id: alert_type.alert_id(product.id(), lot.id(), today),
            product_id: product.id().clone(),
            lot_id: lot.id(),
            alert_type,
            severity,
            message: format!(
                "Forecast demand for {} ({daily:.1} {unit}/day) cannot clear {stock:.0} {unit} \
                 within its {:.0}-day shelf life",
                product.name(),
                shelf_life,
            ),
            recommended_action: format!(
                "Bundle or discount {}; about {unsold_units:.0} {unit} will outlast the \
                 shelf life at the current rate",
                product.name(),
            ),
            days_until_expiry: lot.days_until_expiry(today),
            potential_waste_kg: self.waste_kg(unsold_units, unit),
            potential_loss_rm: unsold_units * product.cost_per_unit(),
            created_at: now,
        })
    }

    fn waste_kg(&self, units: f64, unit: Unit) -> f64 {
        if unit.is_mass() {
            units
        } else {
            units * self.config.non_kg_unit_weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};
    use freshpredict_core::{Category, LotId, ProductId};
    use freshpredict_forecast::FestiveImpact;
    use freshpredict_inventory::DemandObservation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 8, 0, 0).unwrap()
    }

    fn product(unit: Unit, shelf_life_days: u32, cost: f64) -> Product {
        Product::new(
            ProductId::new("PLT001").unwrap(),
            "Whole Chicken",
            Category::Poultry,
            unit,
            cost,
            shelf_life_days,
            "QL Resources",
        )
        .unwrap()
    }

    fn lot(stock: f64, unit: Unit, expiry: NaiveDate, reorder_point: f64) -> InventoryLot {
        InventoryLot::new(
            LotId::new(),
            ProductId::new("PLT001").unwrap(),
            stock,
            unit,
            expiry,
            reorder_point,
            "QL Resources",
        )
        .unwrap()
    }

    fn flat_forecast(daily: f64, days: usize) -> ForecastResult {
        let start = date(2026, 8, 8);
        ForecastResult {
            product_id: ProductId::new("PLT001").unwrap(),
            dates: (0..days)
                .map(|i| start.checked_add_days(Days::new(i as u64)).unwrap())
                .collect(),
            predicted_demand: vec![daily; days],
            confidence_lower: vec![(daily * 0.8).max(0.0); days],
            confidence_upper: vec![daily * 1.2; days],
            trend: TrendDirection::Stable,
            festive_impact: None,
        }
    }

    fn flat_history(daily: f64, days: usize) -> DemandHistory {
        let start = date(2026, 6, 1);
        DemandHistory::from_observations(
            ProductId::new("PLT001").unwrap(),
            (0..days).map(|i| DemandObservation {
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                demand: daily,
            }),
        )
        .unwrap()
    }

    #[test]
    fn stock_out_fires_at_high_severity_for_thin_coverage() {
        let engine = AlertEngine::default();
        let product = product(Unit::Kilogram, 4, 12.50);
        let forecast = flat_forecast(8.0, 7);
        let history = flat_history(8.0, 28);

        // 5 units at 8/day: coverage 0.625 days, well under the lead time.
        let alerts =
            engine.preparation_alerts(&product, 5.0, &history, &forecast, date(2026, 8, 7), now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == PreparationAlertType::StockOutRisk)
            .expect("stock_out_risk expected");
        assert_eq!(alert.severity, Severity::High);
        assert_eq!(alert.days_until_event, 0);
        assert!(alert.message.contains("0.6 days"));
    }

    #[test]
    fn stock_out_does_not_fire_on_zero_forecast_demand() {
        let engine = AlertEngine::default();
        let product = product(Unit::Kilogram, 4, 12.50);
        let forecast = flat_forecast(0.0, 7);
        let history = flat_history(0.0, 28);

        let alerts =
            engine.preparation_alerts(&product, 5.0, &history, &forecast, date(2026, 8, 7), now());
        assert!(
            alerts
                .iter()
                .all(|a| a.alert_type != PreparationAlertType::StockOutRisk)
        );
    }

    #[test]
    fn demand_spike_severity_scales_with_excess() {
        let engine = AlertEngine::default();
        let product = product(Unit::Kilogram, 4, 12.50);
        let history = flat_history(10.0, 28);
        let today = date(2026, 8, 7);

        // 30% over trailing: fires at low severity.
        let alerts = engine.preparation_alerts(
            &product,
            100.0,
            &history,
            &flat_forecast(13.0, 7),
            today,
            now(),
        );
        let spike = alerts
            .iter()
            .find(|a| a.alert_type == PreparationAlertType::DemandSpike)
            .expect("spike expected");
        assert_eq!(spike.severity, Severity::Low);
        assert!((spike.predicted_demand_increase - 30.0).abs() < 1e-6);

        // 50% over: medium. 100% over: high.
        let alerts = engine.preparation_alerts(
            &product,
            100.0,
            &history,
            &flat_forecast(15.0, 7),
            today,
            now(),
        );
        assert_eq!(alerts[0].severity, Severity::Medium);

        let alerts = engine.preparation_alerts(
            &product,
            100.0,
            &history,
            &flat_forecast(20.0, 7),
            today,
            now(),
        );
        assert_eq!(alerts[0].severity, Severity::High);

        // 20% over: under the threshold, silent.
        let alerts = engine.preparation_alerts(
            &product,
            100.0,
            &history,
            &flat_forecast(12.0, 7),
            today,
            now(),
        );
        assert!(
            alerts
                .iter()
                .all(|a| a.alert_type != PreparationAlertType::DemandSpike)
        );
    }

    #[test]
    fn festive_surge_severity_follows_the_multiplier() {
        let engine = AlertEngine::default();
        let product = product(Unit::Kilogram, 4, 12.50);
        let history = flat_history(10.0, 28);
        let today = date(2026, 8, 7);

        let mut forecast = flat_forecast(10.0, 14);
        forecast.festive_impact = Some(FestiveImpact {
            name: "Hari Raya Aidilfitri".to_string(),
            date: date(2026, 8, 17),
            days_until: 10,
            demand_multiplier: 3.0,
        });

        let alerts =
            engine.preparation_alerts(&product, 100.0, &history, &forecast, today, now());
        let surge = alerts
            .iter()
            .find(|a| a.alert_type == PreparationAlertType::FestiveSurge)
            .expect("festive_surge expected");
        assert_eq!(surge.severity, Severity::High);
        assert_eq!(surge.days_until_event, 10);
        assert!((surge.predicted_demand_increase - 200.0).abs() < 1e-6);

        // Milder festival: medium.
        forecast.festive_impact.as_mut().unwrap().demand_multiplier = 1.8;
        let alerts =
            engine.preparation_alerts(&product, 100.0, &history, &forecast, today, now());
        let surge = alerts
            .iter()
            .find(|a| a.alert_type == PreparationAlertType::FestiveSurge)
            .unwrap();
        assert_eq!(surge.severity, Severity::Medium);

        // Too far out: silent.
        forecast.festive_impact.as_mut().unwrap().days_until = 20;
        let alerts =
            engine.preparation_alerts(&product, 100.0, &history, &forecast, today, now());
        assert!(
            alerts
                .iter()
                .all(|a| a.alert_type != PreparationAlertType::FestiveSurge)
        );
    }

    #[test]
    fn imminent_expiry_puts_full_stock_at_risk() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 15.0);
        // Expires in 2 days, nothing forecast to sell.
        let lot = lot(10.0, Unit::Kilogram, date(2026, 8, 9), 20.0);

        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(0.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk)
            .expect("expiry_risk expected");
        assert_eq!(alert.severity, Severity::High);
        assert_eq!(alert.days_until_expiry, 2);
        assert_eq!(alert.potential_waste_kg, 10.0);
        assert_eq!(alert.potential_loss_rm, 150.0);
        assert!(alert.recommended_action.contains("50%"));
    }

    #[test]
    fn forecast_sales_reduce_expiry_exposure() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 15.0);
        // Expires in 4 days; 2/day forecast sells 8 of the 10 units.
        let lot = lot(10.0, Unit::Kilogram, date(2026, 8, 11), 20.0);

        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(2.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk)
            .unwrap();
        assert_eq!(alert.severity, Severity::Medium);
        assert!((alert.potential_waste_kg - 2.0).abs() < 1e-9);
        assert!((alert.potential_loss_rm - 30.0).abs() < 1e-9);
    }

    #[test]
    fn expiry_day_zero_reports_as_expired() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 15.0);
        let lot = lot(5.0, Unit::Kilogram, today, 20.0);

        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(1.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk)
            .unwrap();
        assert_eq!(alert.days_until_expiry, 0);
        assert_eq!(alert.severity, Severity::High);
        assert!(alert.message.contains("expired"));
        assert!(!alert.message.contains("expires in"));
        // Nothing sells on or after the expiry day.
        assert_eq!(alert.potential_waste_kg, 5.0);
    }

    #[test]
    fn empty_lot_raises_no_expiry_alert() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 15.0);
        let lot = lot(0.0, Unit::Kilogram, date(2026, 8, 8), 20.0);

        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(0.0, 7), today, now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn non_kg_waste_is_converted_to_kilograms() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Piece, 10, 7.50);
        let lot = lot(50.0, Unit::Piece, date(2026, 8, 9), 40.0);

        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(0.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk)
            .unwrap();
        // 50 pieces at 0.06 kg each; loss still priced per piece.
        assert!((alert.potential_waste_kg - 3.0).abs() < 1e-9);
        assert!((alert.potential_loss_rm - 375.0).abs() < 1e-9);
    }

    #[test]
    fn overstock_fires_only_when_trend_is_not_increasing() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 6, 6.50);
        // 50 on hand against a reorder point of 20: 2.5x.
        let lot = lot(50.0, Unit::Kilogram, date(2026, 8, 20), 20.0);

        let forecast = flat_forecast(10.0, 7);
        let alerts = engine.sustainability_alerts(&product, &lot, &forecast, today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::Overstock)
            .expect("overstock expected");
        assert_eq!(alert.severity, Severity::Medium);
        // Exposure is the stock above 2x the reorder point.
        assert!((alert.potential_waste_kg - 10.0).abs() < 1e-9);

        let mut rising = flat_forecast(10.0, 7);
        rising.trend = TrendDirection::Increasing;
        let alerts = engine.sustainability_alerts(&product, &lot, &rising, today, now());
        assert!(
            alerts
                .iter()
                .all(|a| a.alert_type != SustainabilityAlertType::Overstock)
        );
    }

    #[test]
    fn slow_moving_severity_scales_with_the_shortfall() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 12.50);
        let lot = lot(40.0, Unit::Kilogram, date(2026, 8, 30), 30.0);

        // Needs 10/day to clear; 2/day forecast is a 5x shortfall.
        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(2.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::SlowMoving)
            .expect("slow_moving expected");
        assert_eq!(alert.severity, Severity::High);
        assert!((alert.potential_waste_kg - 32.0).abs() < 1e-9);

        // 6/day: shortfall 1.67, medium.
        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(6.0, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::SlowMoving)
            .unwrap();
        assert_eq!(alert.severity, Severity::Medium);

        // 9.5/day: shortfall ~1.05, low.
        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(9.5, 7), today, now());
        let alert = alerts
            .iter()
            .find(|a| a.alert_type == SustainabilityAlertType::SlowMoving)
            .unwrap();
        assert_eq!(alert.severity, Severity::Low);

        // 10/day clears the lot: silent.
        let alerts =
            engine.sustainability_alerts(&product, &lot, &flat_forecast(10.0, 7), today, now());
        assert!(
            alerts
                .iter()
                .all(|a| a.alert_type != SustainabilityAlertType::SlowMoving)
        );
    }

    #[test]
    fn alert_ids_are_deterministic_per_day() {
        let engine = AlertEngine::default();
        let today = date(2026, 8, 7);
        let product = product(Unit::Kilogram, 4, 15.0);
        let lot = lot(10.0, Unit::Kilogram, date(2026, 8, 9), 20.0);
        let forecast = flat_forecast(0.0, 7);

        let first = engine.sustainability_alerts(&product, &lot, &forecast, today, now());
        let second = engine.sustainability_alerts(&product, &lot, &forecast, today, now());
        assert_eq!(first, second);
        assert!(first[0].id.as_str().starts_with("SA-EXPIRY-PLT001-"));
    }
}
