//! Walk the demo dataset through the whole engine: forecasts, both alert
//! classes, a rescue, and the resulting ESG metrics.
//!
//! Run with `RUST_LOG=info cargo run -p freshpredict-engine --example demo`.

use std::sync::Arc;

use anyhow::Result;

use freshpredict_alerts::SustainabilityAlertType;
use freshpredict_core::{RescueId, SystemClock};
use freshpredict_engine::{MarkSoldRequest, demo};

fn main() -> Result<()> {
    freshpredict_observability::init();

    let engine = demo::demo_engine(Arc::new(SystemClock))?;

    for forecast in engine.forecast_all(14)? {
        tracing::info!(
            product = %forecast.product_id,
            trend = %forecast.trend,
            mean_daily = format!("{:.1}", forecast.mean_daily_demand()),
            festive = forecast.festive_impact.as_ref().map(|f| f.name.as_str()),
            "14-day forecast"
        );
    }

    for alert in engine.preparation_alerts(None)? {
        tracing::info!(
            kind = alert.alert_type.as_str(),
            severity = %alert.severity,
            product = %alert.product_id,
            "{}",
            alert.message
        );
    }

    let sustainability = engine.sustainability_alerts(None)?;
    for alert in &sustainability {
        tracing::info!(
            kind = alert.alert_type.as_str(),
            severity = %alert.severity,
            waste_kg = format!("{:.1}", alert.potential_waste_kg),
            loss_rm = format!("{:.2}", alert.potential_loss_rm),
            "{}",
            alert.message
        );
    }

    // Rescue half of the most urgent expiry-risk lot.
    if let Some(alert) = sustainability
        .iter()
        .find(|a| a.alert_type == SustainabilityAlertType::ExpiryRisk && a.potential_waste_kg > 0.0)
    {
        let metrics = engine.mark_sold(MarkSoldRequest {
            event_id: RescueId::new(),
            alert_id: alert.id.clone(),
            product_id: alert.product_id.clone(),
            quantity_kg: alert.potential_waste_kg / 2.0,
            cost_recovered: alert.potential_loss_rm / 4.0,
        })?;
        tracing::info!(
            waste_saved_kg = metrics.waste_saved_kg,
            methane_offset = metrics.methane_offset_kg_co2e,
            compliance = metrics.compliance_score,
            "ESG metrics after rescue"
        );
    }

    let summary = engine.dashboard_summary()?;
    tracing::info!(
        products = summary.total_products,
        low_stock = summary.low_stock_count,
        expiry_risk = summary.expiry_risk_count,
        inventory_value_rm = format!("{:.2}", summary.total_inventory_value_rm),
        "dashboard summary"
    );

    Ok(())
}
