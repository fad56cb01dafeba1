//! Ready-made test fixtures for the domain types.
//!
//! Fixtures use a fixed clock so date-sensitive assertions are
//! deterministic; free-text fields are faked.

use chrono::{DateTime, Duration, TimeZone, Utc};
use community_events_domain::{
    event::{Event, EventDescription, EventTitle},
    identifiers::OrganizerId,
    money::{Currency, Money},
    pricing::PricingPolicy,
};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rust_decimal::Decimal;

/// The fixed clock reading fixtures are built against.
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// A draft event two weeks out from [`fixed_clock`], capacity 50.
pub fn create_test_event() -> Event {
    let now = fixed_clock();
    let description: String = Sentence(4..10).fake();
    Event::create(
        EventTitle::new("Test Event").unwrap(),
        EventDescription::new(description).unwrap(),
        now + Duration::days(14),
        now + Duration::days(14) + Duration::hours(4),
        OrganizerId::new(),
        50,
        now,
    )
    .unwrap()
}

/// A published event with the given capacity and an empty event buffer.
pub fn create_published_event(capacity: u32) -> Event {
    let now = fixed_clock();
    let description: String = Sentence(4..10).fake();
    let mut event = Event::create(
        EventTitle::new("Test Event").unwrap(),
        EventDescription::new(description).unwrap(),
        now + Duration::days(14),
        now + Duration::days(14) + Duration::hours(4),
        OrganizerId::new(),
        capacity,
        now,
    )
    .unwrap();
    event.publish(now).unwrap();
    event.clear_domain_events();
    event
}

/// A whole-number USD amount.
pub fn usd(amount: i64) -> Money {
    Money::new(Decimal::from(amount), Currency::Usd)
}

/// Flat pricing at 100 USD per unit.
pub fn create_standard_pricing() -> PricingPolicy {
    PricingPolicy::standard(usd(100)).unwrap()
}

/// 20% off before 2025-01-15, 100 USD base.
pub fn create_early_bird_pricing() -> PricingPolicy {
    PricingPolicy::early_bird(
        usd(100),
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        Decimal::from(20),
    )
    .unwrap()
}

/// 15% off for groups of five or more, 100 USD base.
pub fn create_group_pricing() -> PricingPolicy {
    PricingPolicy::group_discount(usd(100), 5, Decimal::from(15)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use community_events_domain::event::EventStatus;

    #[test]
    fn test_fixtures_are_valid() {
        let draft = create_test_event();
        assert_eq!(draft.status(), EventStatus::Draft);

        let published = create_published_event(10);
        assert_eq!(published.status(), EventStatus::Published);
        assert!(published.domain_events().is_empty());
        assert_eq!(published.capacity(), 10);
    }

    #[test]
    fn test_pricing_fixtures_are_valid() {
        assert_eq!(create_standard_pricing().base_price().amount(), Decimal::from(100));
        create_early_bird_pricing();
        create_group_pricing();
    }
}
