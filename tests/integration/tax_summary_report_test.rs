/// Tax summary report
///
/// Tests:
/// - Per-jurisdiction aggregation through the service and the HTTP route
/// - Exports grouped under a single row
/// - Date range filtering and validation
use actix_web::{test, web, App};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use storefront_tax::reports::models::EXPORT_GROUP;
use storefront_tax::reports::{ReportService, ReportedOrder};
use storefront_tax::taxes::TaxCalculator;
use storefront_tax::{configure_routes, AppState};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn order(id: &str, day: u32, subtotal: Decimal, region: &str, country: &str) -> ReportedOrder {
    ReportedOrder {
        order_id: id.to_string(),
        ordered_on: date(3, day),
        subtotal,
        region: region.to_string(),
        country: country.to_string(),
    }
}

fn sample_orders() -> Vec<ReportedOrder> {
    vec![
        order("SO-1001", 2, dec!(100), "ON", "CA"),
        order("SO-1002", 3, dec!(200), "on", "ca"),
        order("SO-1003", 5, dec!(100), "QC", "CA"),
        order("SO-1004", 7, dec!(-100), "QC", "CA"),
        order("SO-1005", 9, dec!(400), "NY", "US"),
        order("SO-1006", 11, dec!(300), "", "JP"),
        order("SO-1007", 12, dec!(50), "XX", "CA"),
        order("SO-1008", 28, dec!(100), "AB", "CA"),
    ]
}

#[::core::prelude::v1::test]
fn test_summary_groups_by_jurisdiction() {
    let service = ReportService::new(TaxCalculator::default());
    let report = service
        .tax_summary(date(3, 1), date(3, 31), &sample_orders())
        .unwrap();

    let regions: Vec<_> = report
        .rows
        .iter()
        .map(|r| (r.country.as_str(), r.region.as_str()))
        .collect();
    assert_eq!(
        regions,
        vec![("CA", "AB"), ("CA", "ON"), ("CA", "QC"), (EXPORT_GROUP, "")]
    );

    let on = report.row("CA", "ON").unwrap();
    assert_eq!(on.order_count, 2);
    assert_eq!(on.hst, dec!(39));

    // refund cancels the sale, fallback order lands on QC
    let qc = report.row("CA", "QC").unwrap();
    assert_eq!(qc.order_count, 3);
    assert_eq!(qc.subtotal, dec!(50));
    assert_eq!(qc.gst, dec!(2.5));
    assert_eq!(qc.qst, dec!(4.9875));

    let exports = report.row(EXPORT_GROUP, "").unwrap();
    assert_eq!(exports.order_count, 2);
    assert_eq!(exports.total_tax, Decimal::ZERO);
    assert_eq!(exports.grand_total, dec!(700));

    assert_eq!(report.totals.order_count, 8);
    assert_eq!(report.totals.total_tax, report.totals.component_sum());
    assert_eq!(
        report.totals.grand_total,
        report.totals.subtotal + report.totals.total_tax
    );
}

#[::core::prelude::v1::test]
fn test_summary_filters_by_date() {
    let service = ReportService::new(TaxCalculator::default());
    let report = service
        .tax_summary(date(3, 1), date(3, 4), &sample_orders())
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.totals.order_count, 2);
    assert_eq!(report.totals.total_tax, dec!(39));
}

#[::core::prelude::v1::test]
fn test_summary_empty_period() {
    let service = ReportService::new(TaxCalculator::default());
    let report = service
        .tax_summary(date(4, 1), date(4, 30), &sample_orders())
        .unwrap();

    assert!(report.is_empty());
    assert_eq!(report.totals.order_count, 0);
}

#[::core::prelude::v1::test]
fn test_summary_rejects_bad_input() {
    let service = ReportService::new(TaxCalculator::default());

    assert!(service
        .tax_summary(date(3, 31), date(3, 1), &sample_orders())
        .is_err());

    let too_long = NaiveDate::from_ymd_opt(2027, 12, 31).unwrap();
    assert!(service.tax_summary(date(1, 1), too_long, &[]).is_err());

    let blank = vec![order("  ", 2, dec!(10), "ON", "CA")];
    assert!(service
        .tax_summary(date(3, 1), date(3, 31), &blank)
        .is_err());

    let oversized = vec![order("SO-9999", 2, Decimal::MAX, "ON", "CA")];
    assert!(service
        .tax_summary(date(3, 1), date(3, 31), &oversized)
        .is_err());
}

#[actix_web::test]
async fn test_tax_summary_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reports/tax-summary")
        .set_json(json!({
            "start_date": "2026-03-01",
            "end_date": "2026-03-31",
            "orders": [
                { "order_id": "SO-1", "ordered_on": "2026-03-02", "subtotal": "100", "region": "QC", "country": "CA" },
                { "order_id": "SO-2", "ordered_on": "2026-03-03", "subtotal": "100", "region": "MB", "country": "CA" },
                { "order_id": "SO-3", "ordered_on": "2026-03-04", "subtotal": "80", "country": "FR" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["start_date"], "2026-03-01");

    let rows = body["jurisdictions"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["region"], "MB");
    assert_eq!(rows[0]["rst"], "7.00");
    assert_eq!(rows[1]["region"], "QC");
    assert_eq!(rows[1]["qst"], "9.98");
    assert_eq!(rows[2]["country"], "EXPORT");

    assert_eq!(body["totals"]["order_count"], 3);
    assert_eq!(body["totals"]["subtotal"], "280.00");
}

#[actix_web::test]
async fn test_tax_summary_rejects_bad_dates() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::default()))
            .configure(configure_routes),
    )
    .await;

    for (start, end) in [("2026-03-31", "2026-03-01"), ("03/01/2026", "2026-03-31")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/reports/tax-summary")
            .set_json(json!({ "start_date": start, "end_date": end, "orders": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 400);
    }
}
