//! Display rules for the fiat amount and price impact shown next to a swap
//! or send.

use serde::Serialize;
use std::fmt;

pub const MAIN_CURRENCY_SYMBOL: &str = "$";
pub const FALLBACK_AMOUNT: &str = "0.00";
pub const NO_PRICE_INFO: &str = "No price information";
pub const PRICE_IMPACT_TEST_ID: &str = "price_impact_percent";

/// Impacts whose magnitude does not exceed this are noise and stay hidden.
pub const PRICE_IMPACT_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceDetails {
    /// Amount in the main currency, `None` while unknown.
    pub amount_main_currency: Option<String>,
    /// Expected price impact in percent.
    pub price_impact: Option<f64>,
    pub is_price_details_loaded: bool,
}

/// Why the amount renders the way it does. `Loading` and `Unknown` both show
/// the fallback amount but only `Unknown` carries the info indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountState {
    Loading,
    Unknown,
    BelowPrecision,
    Known,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceImpactElement {
    pub test_id: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDetailsView {
    pub amount_text: String,
    pub amount_state: AmountState,
    pub no_price_info: bool,
    pub price_impact: Option<PriceImpactElement>,
}

impl PriceDetails {
    pub fn new(
        amount_main_currency: Option<String>,
        price_impact: Option<f64>,
        is_price_details_loaded: bool,
    ) -> Self {
        Self {
            amount_main_currency,
            price_impact,
            is_price_details_loaded,
        }
    }

    pub fn render(&self) -> PriceDetailsView {
        let (amount_text, amount_state) =
            match (self.is_price_details_loaded, self.amount_main_currency.as_deref()) {
                (false, _) => (fallback_amount(), AmountState::Loading),
                (true, None) => (fallback_amount(), AmountState::Unknown),
                (true, Some(amount)) if is_positive(amount) => (
                    format!("{MAIN_CURRENCY_SYMBOL}{amount}"),
                    AmountState::Known,
                ),
                (true, Some(amount)) => (
                    format!("<{MAIN_CURRENCY_SYMBOL}{amount}"),
                    AmountState::BelowPrecision,
                ),
            };

        let price_impact = self
            .price_impact
            .filter(|impact| is_significant_impact(*impact))
            .map(|impact| PriceImpactElement {
                test_id: PRICE_IMPACT_TEST_ID,
                text: format!("({impact}%)"),
            });

        PriceDetailsView {
            amount_text,
            no_price_info: amount_state == AmountState::Unknown,
            amount_state,
            price_impact,
        }
    }
}

fn fallback_amount() -> String {
    format!("{MAIN_CURRENCY_SYMBOL}{FALLBACK_AMOUNT}")
}

// Text that does not parse as a finite number counts as not positive.
fn is_positive(amount: &str) -> bool {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map_or(false, |value| value > 0.0)
}

fn is_significant_impact(impact: f64) -> bool {
    impact != 0.0 && impact.abs() > PRICE_IMPACT_THRESHOLD
}

impl PriceDetailsView {
    /// Visible text nodes in render order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = vec![self.amount_text.as_str()];
        if let Some(impact) = &self.price_impact {
            texts.push(&impact.text);
        }
        if self.no_price_info {
            texts.push(NO_PRICE_INFO);
        }
        texts
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().contains(&text)
    }

    pub fn by_test_id(&self, test_id: &str) -> Option<&PriceImpactElement> {
        self.price_impact
            .as_ref()
            .filter(|impact| impact.test_id == test_id)
    }
}

impl fmt::Display for PriceDetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texts().join(" "))
    }
}
