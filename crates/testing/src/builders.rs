//! Fluent builder pattern for constructing test data.
//!
//! This module provides builder structs for creating domain entities with a
//! fluent API for customization. Builders panic on invalid combinations:
//! they exist for tests, where a bad fixture should fail loudly.

use chrono::{DateTime, Duration, TimeZone, Utc};
use community_events_domain::{
    event::{Event, EventDescription, EventTitle},
    identifiers::OrganizerId,
    money::{Currency, Money},
    pricing::PricingPolicy,
};
use rust_decimal::Decimal;

/// Builder for creating Event test instances
#[derive(Clone)]
pub struct EventBuilder {
    title: String,
    description: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    organizer_id: OrganizerId,
    capacity: u32,
    now: DateTime<Utc>,
    published: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        Self {
            title: "Test Event".to_string(),
            description: "A test event".to_string(),
            start_date: now + Duration::days(14),
            end_date: now + Duration::days(14) + Duration::hours(4),
            organizer_id: OrganizerId::new(),
            capacity: 50,
            now,
            published: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Shift the event window to start `days` after the builder clock.
    pub fn starting_in_days(mut self, days: i64) -> Self {
        self.start_date = self.now + Duration::days(days);
        self.end_date = self.start_date + Duration::hours(4);
        self
    }

    pub fn with_organizer(mut self, organizer_id: OrganizerId) -> Self {
        self.organizer_id = organizer_id;
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Clock reading passed to `Event::create` (and `publish`).
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Publish the event on build. The recorded publish event is drained so
    /// assertions start from an empty buffer.
    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn build(self) -> Event {
        let mut event = Event::create(
            EventTitle::new(self.title).expect("builder title must be non-empty"),
            EventDescription::new(self.description).expect("builder description must be non-empty"),
            self.start_date,
            self.end_date,
            self.organizer_id,
            self.capacity,
            self.now,
        )
        .expect("builder produced an invalid event");

        if self.published {
            event.publish(self.now).expect("freshly created events publish");
            event.clear_domain_events();
        }

        event
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating PricingPolicy test instances
#[derive(Clone)]
pub struct PricingPolicyBuilder {
    base_price: Money,
}

impl PricingPolicyBuilder {
    pub fn new() -> Self {
        Self {
            base_price: Money::new(Decimal::from(100), Currency::Usd),
        }
    }

    pub fn with_base_price(mut self, base_price: Money) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn standard(self) -> PricingPolicy {
        PricingPolicy::standard(self.base_price).expect("builder base price must be positive")
    }

    pub fn early_bird(self, cutoff_date: DateTime<Utc>, discount_percent: i64) -> PricingPolicy {
        PricingPolicy::early_bird(self.base_price, cutoff_date, Decimal::from(discount_percent))
            .expect("builder early-bird parameters must be valid")
    }

    pub fn group_discount(self, min_group_size: u32, discount_percent: i64) -> PricingPolicy {
        PricingPolicy::group_discount(
            self.base_price,
            min_group_size,
            Decimal::from(discount_percent),
        )
        .expect("builder group parameters must be valid")
    }
}

impl Default for PricingPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
