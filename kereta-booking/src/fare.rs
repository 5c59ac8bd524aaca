use crate::itinerary::Itinerary;
use serde::{Deserialize, Serialize};

/// Default tax-and-service rate. Runtime deployments feed the configured
/// `business_rules.tax_rate` into `FareConfig` instead.
pub const DEFAULT_TAX_RATE: f64 = 0.10;

#[derive(Debug, Clone, Deserialize)]
pub struct FareConfig {
    pub tax_rate: f64,
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

/// Price totals in minor-unit-free rupiah
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Pure fare computation, leg-count agnostic: the direct case is just the
/// single-leg sum once the itinerary model has normalized the input.
#[derive(Debug, Clone)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, itinerary: &Itinerary, passenger_count: u32) -> PriceBreakdown {
        let per_passenger: i64 = itinerary.legs.iter().map(|leg| leg.unit_price).sum();
        let subtotal = per_passenger * i64::from(passenger_count);
        let tax = (subtotal as f64 * self.config.tax_rate).round() as i64;

        PriceBreakdown {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::new(FareConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::{normalize, tests::direct_record, tests::transfer_record};
    use kereta_core::search::SearchRoute;

    #[test]
    fn direct_fare_for_two_passengers() {
        let itinerary = normalize(&SearchRoute::Direct(direct_record(350_000))).unwrap();
        let price = FareCalculator::default().compute(&itinerary, 2);

        assert_eq!(price.subtotal, 700_000);
        assert_eq!(price.tax, 70_000);
        assert_eq!(price.total, 770_000);
    }

    #[test]
    fn transfer_fare_sums_all_legs() {
        let itinerary =
            normalize(&SearchRoute::Transfer(transfer_record(&[120_000, 150_000]))).unwrap();
        let price = FareCalculator::default().compute(&itinerary, 1);

        assert_eq!(price.subtotal, 270_000);
        assert_eq!(price.tax, 27_000);
        assert_eq!(price.total, 297_000);
    }

    #[test]
    fn total_is_always_subtotal_plus_tax() {
        let calculator = FareCalculator::default();
        for leg_prices in [vec![180_000], vec![250_000, 300_000], vec![1, 2, 3, 4]] {
            for passengers in 1..=5u32 {
                let itinerary =
                    normalize(&SearchRoute::Transfer(transfer_record(&leg_prices))).unwrap();
                let price = calculator.compute(&itinerary, passengers);

                let leg_sum: i64 = leg_prices.iter().sum();
                assert_eq!(price.subtotal, leg_sum * i64::from(passengers));
                assert_eq!(price.total, price.subtotal + price.tax);
            }
        }
    }

    #[test]
    fn tax_rate_comes_from_configuration() {
        let itinerary = normalize(&SearchRoute::Direct(direct_record(100_000))).unwrap();
        let calculator = FareCalculator::new(FareConfig { tax_rate: 0.05 });
        let price = calculator.compute(&itinerary, 1);

        assert_eq!(price.tax, 5_000);
        assert_eq!(price.total, 105_000);
    }
}
