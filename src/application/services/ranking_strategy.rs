//! # Ranking Strategy
//!
//! Orderings applied to the merged offer set.
//!
//! This module provides the [`RankingStrategy`] trait, the two orderings the
//! aggregation exposes ([`CheapestFirst`], [`FastestFirst`]), and the
//! [`RankingBuilder`] that applies both to produce [`BestFlightOffers`].
//!
//! Every ordering is a stable ascending sort, so offers comparing equal keep
//! their input order.

use crate::domain::entities::{BestFlightOffers, FlightOffer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Trait for offer orderings.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Compares two offers; `Less` means `a` ranks ahead of `b`.
    fn compare(&self, a: &FlightOffer, b: &FlightOffer) -> Ordering;

    /// Returns the name of this ordering.
    fn name(&self) -> &'static str;

    /// Returns a sorted copy of `offers`.
    fn rank(&self, offers: &[FlightOffer]) -> Vec<FlightOffer> {
        let mut ranked = offers.to_vec();
        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }
}

/// Lowest price first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestFirst;

impl RankingStrategy for CheapestFirst {
    fn compare(&self, a: &FlightOffer, b: &FlightOffer) -> Ordering {
        a.price().amount().cmp(&b.price().amount())
    }

    fn name(&self) -> &'static str {
        "CheapestFirst"
    }
}

/// Shortest duration first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestFirst;

impl RankingStrategy for FastestFirst {
    fn compare(&self, a: &FlightOffer, b: &FlightOffer) -> Ordering {
        a.duration_minutes().total_cmp(&b.duration_minutes())
    }

    fn name(&self) -> &'static str {
        "FastestFirst"
    }
}

/// Builds both rankings from one merged offer list.
#[derive(Debug, Clone)]
pub struct RankingBuilder {
    cheapest: Arc<dyn RankingStrategy>,
    fastest: Arc<dyn RankingStrategy>,
}

impl Default for RankingBuilder {
    fn default() -> Self {
        Self::new(Arc::new(CheapestFirst), Arc::new(FastestFirst))
    }
}

impl RankingBuilder {
    /// Creates a builder from explicit orderings.
    #[must_use]
    pub fn new(cheapest: Arc<dyn RankingStrategy>, fastest: Arc<dyn RankingStrategy>) -> Self {
        Self { cheapest, fastest }
    }

    /// Sorts `offers` into cheapest-first and fastest-first copies.
    #[must_use]
    pub fn build(&self, offers: Vec<FlightOffer>) -> BestFlightOffers {
        let cheapest = self.cheapest.rank(&offers);
        let fastest = self.fastest.rank(&offers);
        BestFlightOffers::new(cheapest, fastest)
    }

    /// Names of the orderings, cheapest then fastest.
    #[must_use]
    pub fn strategy_names(&self) -> (&'static str, &'static str) {
        (self.cheapest.name(), self.fastest.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::FlightEndpoint;
    use crate::domain::value_objects::{Money, Timestamp};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn offer(flight_number: &str, minutes: f64, cents: i64) -> FlightOffer {
        let departure = Timestamp::parse_vendor("2025-05-09T08:00:00").unwrap();
        FlightOffer::builder(
            FlightEndpoint::new("SYD", departure),
            FlightEndpoint::new("BKK", departure.add_minutes(minutes as i64)),
            Money::usd(Decimal::new(cents, 2)).unwrap(),
        )
        .flight_number(flight_number)
        .duration_minutes(Some(minutes))
        .build()
        .unwrap()
    }

    fn numbers(offers: &[FlightOffer]) -> Vec<&str> {
        offers.iter().map(FlightOffer::flight_number).collect()
    }

    #[test]
    fn ranks_example_scenario() {
        let offers = vec![
            offer("A", 600.0, 80_000),
            offer("B", 450.0, 95_000),
            offer("C", 500.0, 70_000),
        ];

        let best = RankingBuilder::default().build(offers);
        let durations: Vec<f64> = best.fastest().iter().map(FlightOffer::duration_minutes).collect();
        let prices: Vec<Decimal> = best.cheapest().iter().map(|o| o.price().amount()).collect();

        assert_eq!(durations, vec![450.0, 500.0, 600.0]);
        assert_eq!(
            prices,
            vec![Decimal::new(700, 0), Decimal::new(800, 0), Decimal::new(950, 0)]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let offers = vec![
            offer("first", 300.0, 10_000),
            offer("second", 300.0, 10_000),
            offer("third", 200.0, 10_000),
        ];

        let best = RankingBuilder::default().build(offers);
        assert_eq!(numbers(best.cheapest()), vec!["first", "second", "third"]);
        assert_eq!(numbers(best.fastest()), vec!["third", "first", "second"]);
    }

    #[test]
    fn empty_input_gives_empty_rankings() {
        let best = RankingBuilder::default().build(Vec::new());
        assert!(best.is_empty());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(
            RankingBuilder::default().strategy_names(),
            ("CheapestFirst", "FastestFirst")
        );
    }

    fn arb_offers() -> impl Strategy<Value = Vec<FlightOffer>> {
        prop::collection::vec((1u32..2_000, 0i64..500_000), 0..40).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (minutes, cents))| offer(&i.to_string(), f64::from(minutes), cents))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn rankings_are_sorted_permutations(offers in arb_offers()) {
            let best = RankingBuilder::default().build(offers.clone());

            prop_assert_eq!(best.cheapest().len(), offers.len());
            prop_assert_eq!(best.fastest().len(), offers.len());
            prop_assert!(best.cheapest().windows(2).all(|w| w[0].price().amount() <= w[1].price().amount()));
            prop_assert!(best.fastest().windows(2).all(|w| w[0].duration_minutes() <= w[1].duration_minutes()));

            let mut expected = numbers(&offers);
            expected.sort_unstable();
            let mut cheapest = numbers(best.cheapest());
            cheapest.sort_unstable();
            let mut fastest = numbers(best.fastest());
            fastest.sort_unstable();
            prop_assert_eq!(&cheapest, &expected);
            prop_assert_eq!(&fastest, &expected);
        }

        #[test]
        fn ranking_same_input_twice_is_identical(offers in arb_offers()) {
            let builder = RankingBuilder::default();
            let first = builder.build(offers.clone());
            let second = builder.build(offers);

            prop_assert_eq!(first, second);
        }

        #[test]
        fn reranking_a_ranked_view_keeps_its_order(offers in arb_offers()) {
            let builder = RankingBuilder::default();
            let once = builder.build(offers);
            let by_price = builder.build(once.cheapest().to_vec());
            let by_duration = builder.build(once.fastest().to_vec());

            prop_assert_eq!(numbers(once.cheapest()), numbers(by_price.cheapest()));
            prop_assert_eq!(numbers(once.fastest()), numbers(by_duration.fastest()));
        }
    }
}
