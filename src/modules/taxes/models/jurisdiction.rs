//! Canadian sales-tax jurisdictions.
//!
//! `CANADIAN_PROVINCES` is the only place rates live. Changing a rate or adding
//! a jurisdiction means editing this table and nothing else.

use rust_decimal::Decimal;
use serde::Serialize;

/// Province used when a domestic order carries an unknown or empty region
pub const FALLBACK_PROVINCE: &str = "QC";

/// Country code of the taxing jurisdiction
pub const DOMESTIC_COUNTRY: &str = "CA";

/// Tax rates for one province or territory.
///
/// Exactly one regime is populated per entry: HST alone, GST plus one of
/// PST/QST/RST, or GST alone. `total_rate` always equals the component sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JurisdictionRate {
    pub code: &'static str,
    pub country: &'static str,
    pub gst: Decimal,
    pub hst: Decimal,
    pub pst: Decimal,
    pub qst: Decimal,
    pub rst: Decimal,
    pub total_rate: Decimal,
}

impl JurisdictionRate {
    /// Rates applied to exports: every component zero-rated
    pub const ZERO_RATED: JurisdictionRate = JurisdictionRate {
        code: "",
        country: "",
        gst: Decimal::ZERO,
        hst: Decimal::ZERO,
        pst: Decimal::ZERO,
        qst: Decimal::ZERO,
        rst: Decimal::ZERO,
        total_rate: Decimal::ZERO,
    };

    const fn hst(code: &'static str, hst: Decimal) -> Self {
        Self {
            code,
            country: DOMESTIC_COUNTRY,
            gst: Decimal::ZERO,
            hst,
            pst: Decimal::ZERO,
            qst: Decimal::ZERO,
            rst: Decimal::ZERO,
            total_rate: hst,
        }
    }

    const fn gst_only(code: &'static str) -> Self {
        Self {
            code,
            country: DOMESTIC_COUNTRY,
            gst: GST,
            hst: Decimal::ZERO,
            pst: Decimal::ZERO,
            qst: Decimal::ZERO,
            rst: Decimal::ZERO,
            total_rate: GST,
        }
    }

    /// Sum of the five component rates
    pub fn component_sum(&self) -> Decimal {
        self.gst + self.hst + self.pst + self.qst + self.rst
    }

    pub fn is_harmonized(&self) -> bool {
        !self.hst.is_zero()
    }
}

const fn rate(num: i64, scale: u32) -> Decimal {
    Decimal::from_parts(num as u32, 0, 0, false, scale)
}

/// Federal GST, 5%
pub const GST: Decimal = rate(5, 2);

/// Every Canadian province and territory.
pub static CANADIAN_PROVINCES: [JurisdictionRate; 13] = [
    // HST regime
    JurisdictionRate::hst("ON", rate(13, 2)),
    JurisdictionRate::hst("NB", rate(15, 2)),
    JurisdictionRate::hst("NS", rate(14, 2)),
    JurisdictionRate::hst("NL", rate(15, 2)),
    JurisdictionRate::hst("PE", rate(15, 2)),
    // GST + PST
    JurisdictionRate {
        code: "BC",
        country: DOMESTIC_COUNTRY,
        gst: GST,
        hst: Decimal::ZERO,
        pst: rate(7, 2),
        qst: Decimal::ZERO,
        rst: Decimal::ZERO,
        total_rate: rate(12, 2),
    },
    JurisdictionRate {
        code: "SK",
        country: DOMESTIC_COUNTRY,
        gst: GST,
        hst: Decimal::ZERO,
        pst: rate(6, 2),
        qst: Decimal::ZERO,
        rst: Decimal::ZERO,
        total_rate: rate(11, 2),
    },
    // GST + RST
    JurisdictionRate {
        code: "MB",
        country: DOMESTIC_COUNTRY,
        gst: GST,
        hst: Decimal::ZERO,
        pst: Decimal::ZERO,
        qst: Decimal::ZERO,
        rst: rate(7, 2),
        total_rate: rate(12, 2),
    },
    // GST + QST
    JurisdictionRate {
        code: "QC",
        country: DOMESTIC_COUNTRY,
        gst: GST,
        hst: Decimal::ZERO,
        pst: Decimal::ZERO,
        qst: rate(9975, 5),
        rst: Decimal::ZERO,
        total_rate: rate(14975, 5),
    },
    // GST only
    JurisdictionRate::gst_only("AB"),
    JurisdictionRate::gst_only("YT"),
    JurisdictionRate::gst_only("NT"),
    JurisdictionRate::gst_only("NU"),
];

/// Case-insensitive lookup of a province or territory
pub fn find_jurisdiction(code: &str) -> Option<&'static JurisdictionRate> {
    let code = code.trim();
    CANADIAN_PROVINCES
        .iter()
        .find(|jurisdiction| jurisdiction.code.eq_ignore_ascii_case(code))
}

/// The jurisdiction used for unknown domestic regions
pub fn fallback_jurisdiction() -> &'static JurisdictionRate {
    CANADIAN_PROVINCES
        .iter()
        .find(|jurisdiction| jurisdiction.code == FALLBACK_PROVINCE)
        .unwrap_or(&CANADIAN_PROVINCES[8])
}
