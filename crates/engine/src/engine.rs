use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freshpredict_alerts::{
    AlertEngine, PreparationAlert, Severity, SustainabilityAlert, SustainabilityAlertType,
};
use freshpredict_calendar::{Festival, FestivalCalendar};
use freshpredict_catalog::{Product, SupplierDirectory};
use freshpredict_core::{
    AlertId, Category, Clock, DomainResult, LotId, ProductId, RescueId, SystemClock,
};
use freshpredict_forecast::{
    Forecaster, ForecastResult, Horizon, ModelDiagnostics, StockInsight, assess_restock,
};
use freshpredict_inventory::InventoryLot;
use freshpredict_ledger::{
    EsgConfig, EsgMetrics, RescueRecorded, SustainabilityLedger, WasteExposure, compute_metrics,
};

use crate::stores::{DemandHistoryStore, InventoryStore, ProductCatalog};
use crate::summary::DashboardSummary;

/// Resolve a sustainability alert by recording a rescue.
///
/// `event_id` is the caller's idempotency key: replaying the same request
/// neither double-counts the ledger nor double-draws the stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkSoldRequest {
    pub event_id: RescueId,
    pub alert_id: AlertId,
    pub product_id: ProductId,
    pub quantity_kg: f64,
    pub cost_recovered: f64,
}

/// The forecast & alert engine facade.
///
/// Owns no mutable state beyond the sustainability ledger; every forecast,
/// alert and insight is recomputed from store snapshots on request.
pub struct DecisionEngine<C, I, H> {
    catalog: C,
    inventory: I,
    history: H,
    calendar: FestivalCalendar,
    suppliers: SupplierDirectory,
    forecaster: Forecaster,
    alerts: AlertEngine,
    ledger: SustainabilityLedger,
    esg_config: EsgConfig,
    clock: Arc<dyn Clock>,
}

impl<C, I, H> DecisionEngine<C, I, H>
where
    C: ProductCatalog,
    I: InventoryStore,
    H: DemandHistoryStore,
{
    pub fn new(catalog: C, inventory: I, history: H, calendar: FestivalCalendar) -> Self {
        Self {
            catalog,
            inventory,
            history,
            calendar,
            suppliers: SupplierDirectory::malaysian_defaults(),
            forecaster: Forecaster::default(),
            alerts: AlertEngine::default(),
            ledger: SustainabilityLedger::new(),
            esg_config: EsgConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_forecaster(mut self, forecaster: Forecaster) -> Self {
        self.forecaster = forecaster;
        self
    }

    pub fn with_alert_engine(mut self, alerts: AlertEngine) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn with_esg_config(mut self, esg_config: EsgConfig) -> Self {
        self.esg_config = esg_config;
        self
    }

    pub fn with_suppliers(mut self, suppliers: SupplierDirectory) -> Self {
        self.suppliers = suppliers;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn ledger(&self) -> &SustainabilityLedger {
        &self.ledger
    }

    /// Demand forecast for one product.
    pub fn forecast(&self, product_id: &ProductId, horizon_days: u32) -> DomainResult<ForecastResult> {
        let horizon = Horizon::from_days(horizon_days)?;
        let product = self.catalog.product(product_id)?;
        self.forecast_product(&product, horizon)
    }

    /// Demand forecasts for every catalog product.
    pub fn forecast_all(&self, horizon_days: u32) -> DomainResult<Vec<ForecastResult>> {
        let horizon = Horizon::from_days(horizon_days)?;
        self.catalog
            .products(None)?
            .iter()
            .map(|product| self.forecast_product(product, horizon))
            .collect()
    }

    fn forecast_product(&self, product: &Product, horizon: Horizon) -> DomainResult<ForecastResult> {
        let history = self
            .history
            .history(product.id(), self.forecaster.config().trend_window)?;
        let result = self.forecaster.forecast(
            product,
            &history,
            &self.calendar,
            self.clock.today(),
            horizon,
        )?;
        tracing::debug!(
            product = %product.id(),
            horizon = horizon.days(),
            trend = %result.trend,
            "forecast generated"
        );
        Ok(result)
    }

    /// Demand-preparation alerts across the catalog, most severe first.
    pub fn preparation_alerts(
        &self,
        severity: Option<Severity>,
    ) -> DomainResult<Vec<PreparationAlert>> {
        let today = self.clock.today();
        let now = self.clock.now();
        let mut alerts = Vec::new();

        for product in self.catalog.products(None)? {
            let lots = self.inventory.lots(Some(product.id()))?;
            let total_stock: f64 = lots.iter().map(InventoryLot::current_stock).sum();
            let history = self
                .history
                .history(product.id(), self.forecaster.config().trend_window)?;
            let forecast = self.forecast_product(&product, Horizon::Fortnight)?;

            alerts.extend(self.alerts.preparation_alerts(
                &product,
                total_stock,
                &history,
                &forecast,
                today,
                now,
            ));
        }

        if let Some(severity) = severity {
            alerts.retain(|a| a.severity == severity);
        }
        alerts.sort_by_key(|a| a.severity);

        tracing::info!(count = alerts.len(), "preparation alerts evaluated");
        Ok(alerts)
    }

    /// Waste-sustainability alerts across all lots, most urgent expiry first.
    pub fn sustainability_alerts(
        &self,
        severity: Option<Severity>,
    ) -> DomainResult<Vec<SustainabilityAlert>> {
        let today = self.clock.today();
        let now = self.clock.now();
        let mut alerts = Vec::new();

        for product in self.catalog.products(None)? {
            let lots = self.inventory.lots(Some(product.id()))?;
            if lots.is_empty() {
                continue;
            }
            let forecast = self.forecast_product(&product, Horizon::Fortnight)?;
            for lot in &lots {
                alerts.extend(
                    self.alerts
                        .sustainability_alerts(&product, lot, &forecast, today, now),
                );
            }
        }

        if let Some(severity) = severity {
            alerts.retain(|a| a.severity == severity);
        }
        alerts.sort_by_key(|a| a.days_until_expiry);

        tracing::info!(count = alerts.len(), "sustainability alerts evaluated");
        Ok(alerts)
    }

    /// Record a rescue against a sustainability alert and draw the stock
    /// down, earliest-expiry lots first. Returns the updated ESG view.
    pub fn mark_sold(&self, request: MarkSoldRequest) -> DomainResult<EsgMetrics> {
        let product = self.catalog.product(&request.product_id)?;

        // A replayed request is already fully applied; just report.
        if self
            .ledger
            .snapshot()?
            .iter()
            .any(|e| e.event_id == request.event_id)
        {
            return self.esg_metrics();
        }

        self.ledger.record_rescue(RescueRecorded {
            event_id: request.event_id,
            alert_id: request.alert_id.clone(),
            product_id: request.product_id.clone(),
            quantity_kg: request.quantity_kg,
            cost_recovered: request.cost_recovered,
            occurred_at: self.clock.now(),
        })?;

        let mut lots = self.inventory.lots(Some(&request.product_id))?;
        lots.sort_by_key(InventoryLot::expiry_date);

        let mut remaining_units = self.rescued_units(&product, request.quantity_kg);
        for lot in &lots {
            if remaining_units <= 0.0 {
                break;
            }
            let draw = lot.current_stock().min(remaining_units);
            if draw > 0.0 {
                self.inventory.adjust_stock(lot.id(), -draw)?;
                remaining_units -= draw;
            }
        }
        if remaining_units > 0.0 {
            tracing::warn!(
                product = %request.product_id,
                undrawn = remaining_units,
                "rescued quantity exceeds stock on hand"
            );
        }

        tracing::info!(
            product = %request.product_id,
            alert = %request.alert_id,
            quantity_kg = request.quantity_kg,
            "rescue recorded"
        );
        self.esg_metrics()
    }

    /// Cumulative ESG metrics from the ledger plus currently-open expiry
    /// exposure.
    pub fn esg_metrics(&self) -> DomainResult<EsgMetrics> {
        let events = self.ledger.snapshot()?;
        let exposures = self.open_waste_exposures()?;
        Ok(compute_metrics(
            &events,
            &exposures,
            self.clock.now(),
            &self.esg_config,
        ))
    }

    /// Decision support for a proposed restock quantity.
    pub fn add_stock_insight(
        &self,
        product_id: &ProductId,
        proposed_quantity: f64,
    ) -> DomainResult<StockInsight> {
        let product = self.catalog.product(product_id)?;
        let lots = self.inventory.lots(Some(product_id))?;
        let total_stock: f64 = lots.iter().map(InventoryLot::current_stock).sum();
        let forecast = self.forecast_product(&product, Horizon::Fortnight)?;

        Ok(assess_restock(
            &product,
            total_stock,
            proposed_quantity,
            &forecast,
            self.forecaster.config(),
        ))
    }

    /// Apply a signed stock adjustment to a lot.
    pub fn adjust_stock(&self, lot_id: LotId, delta: f64) -> DomainResult<InventoryLot> {
        let lot = self.inventory.adjust_stock(lot_id, delta)?;
        tracing::info!(lot = %lot_id, delta, stock = lot.current_stock(), "stock adjusted");
        Ok(lot)
    }

    /// Merge a delivery into a lot.
    pub fn receive_stock(
        &self,
        lot_id: LotId,
        quantity: f64,
        expiry_date: NaiveDate,
    ) -> DomainResult<InventoryLot> {
        let lot = self.inventory.receive_stock(lot_id, quantity, expiry_date)?;
        tracing::info!(lot = %lot_id, quantity, stock = lot.current_stock(), "delivery received");
        Ok(lot)
    }

    /// Training-data summary for one product's forecasting input.
    pub fn model_diagnostics(&self, product_id: &ProductId) -> DomainResult<ModelDiagnostics> {
        let product = self.catalog.product(product_id)?;
        let history = self
            .history
            .history(product.id(), self.forecaster.config().trend_window)?;
        Ok(ModelDiagnostics::from_history(&history))
    }

    /// Known suppliers for a category, for prefilling restock forms.
    pub fn suppliers(&self, category: Category) -> &[String] {
        self.suppliers.suppliers_for(category)
    }

    /// Festivals falling within the next `within_days` days.
    pub fn upcoming_festivals(&self, within_days: i64) -> Vec<Festival> {
        self.calendar
            .upcoming(self.clock.today(), within_days)
            .into_iter()
            .cloned()
            .collect()
    }

    /// One-call dashboard rollup.
    pub fn dashboard_summary(&self) -> DomainResult<DashboardSummary> {
        let today = self.clock.today();
        let products = self.catalog.products(None)?;
        let lots = self.inventory.lots(None)?;

        let low_stock_count = lots
            .iter()
            .filter(|l| l.is_below_reorder_point())
            .count();
        let expiry_alert_days = self.alerts.config().expiry_alert_days;
        let expiry_risk_count = lots
            .iter()
            .filter(|l| l.current_stock() > 0.0 && l.days_until_expiry(today) <= expiry_alert_days)
            .count();

        let mut total_inventory_value_rm = 0.0;
        for lot in &lots {
            let product = self.catalog.product(lot.product_id())?;
            total_inventory_value_rm += lot.current_stock() * product.cost_per_unit();
        }

        Ok(DashboardSummary {
            total_products: products.len(),
            low_stock_count,
            expiry_risk_count,
            preparation_alerts_count: self.preparation_alerts(None)?.len(),
            sustainability_alerts_count: self.sustainability_alerts(None)?.len(),
            total_inventory_value_rm,
            esg: self.esg_metrics()?,
        })
    }

    /// Open expiry-risk exposure: at-risk kilograms of alerts no rescue has
    /// been recorded against yet.
    fn open_waste_exposures(&self) -> DomainResult<Vec<WasteExposure>> {
        let resolved = self.ledger.resolved_alert_ids()?;
        let now = self.clock.now();

        Ok(self
            .sustainability_alerts(None)?
            .into_iter()
            .filter(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk)
            .filter(|a| !resolved.contains(&a.id))
            .map(|a| WasteExposure {
                observed_at: now,
                waste_kg: a.potential_waste_kg,
            })
            .collect())
    }

    /// Rescued kilograms expressed in the product's stock-keeping unit.
    fn rescued_units(&self, product: &Product, quantity_kg: f64) -> f64 {
        if product.unit().is_mass() {
            quantity_kg
        } else {
            quantity_kg / self.alerts.config().non_kg_unit_weight
        }
    }
}
