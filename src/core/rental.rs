//! Rental order business logic.
//!
//! Provides rental order creation, the periodic subscription-expiry scan, and
//! the reactive rental-flag hook that maintains the order note. The scan only
//! reports; it performs no state change and no external call (the battery
//! shutdown API remains unimplemented upstream).

use crate::{
    entities::{RentalOrder, rental_order},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Note placed on an order when the rental flag is turned on.
pub const RENTAL_NOTE: &str =
    "This is a battery rental order. Please ensure the battery device ID is specified.";

/// Input for creating a rental order.
#[derive(Debug, Clone, Default)]
pub struct NewRentalOrder {
    /// Order reference
    pub name: String,
    /// Whether the order is a battery rental
    pub is_battery_rental: bool,
    /// Identifier of the rented battery, if known
    pub battery_device_id: Option<String>,
    /// When the subscription expires, if agreed
    pub subscription_end_date: Option<DateTime<Utc>>,
}

/// Creates a new rental order, validating that the order reference is
/// non-empty.
pub async fn create_rental_order(
    db: &DatabaseConnection,
    new_order: NewRentalOrder,
) -> Result<rental_order::Model> {
    if new_order.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Order name cannot be empty".to_string(),
        });
    }

    let order = rental_order::ActiveModel {
        name: Set(new_order.name.trim().to_string()),
        is_battery_rental: Set(new_order.is_battery_rental),
        battery_device_id: Set(new_order.battery_device_id),
        subscription_end_date: Set(new_order.subscription_end_date),
        note: Set(None),
        ..Default::default()
    };

    let result = order.insert(db).await?;
    Ok(result)
}

/// Finds an order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<rental_order::Model>> {
    RentalOrder::find_by_id(order_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns exactly the rental orders whose subscription has expired at `now`:
/// the rental flag is set and the end date is non-null and strictly before
/// `now`. Orders without an end date are never returned.
///
/// Read-only: calling this twice with no intervening writes yields identical
/// result sets.
pub async fn find_expired_rentals(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<Vec<rental_order::Model>> {
    RentalOrder::find()
        .filter(rental_order::Column::IsBatteryRental.eq(true))
        .filter(rental_order::Column::SubscriptionEndDate.is_not_null())
        .filter(rental_order::Column::SubscriptionEndDate.lt(now))
        .order_by_asc(rental_order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The periodic-task body: scans for expired rental subscriptions and emits
/// one log line per match, returning the matched orders.
///
/// Expired orders are not marked as processed, so successive runs report the
/// same set again until the underlying orders change.
pub async fn check_expired_subscriptions(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<Vec<rental_order::Model>> {
    info!("Checking for expired battery subscriptions...");

    let expired_orders = find_expired_rentals(db, now).await?;

    for order in &expired_orders {
        info!(
            order = %order.name,
            battery_device_id = order.battery_device_id.as_deref().unwrap_or("<unset>"),
            "Subscription has expired"
        );
        // The battery shutdown API would be called here once it exists.
    }

    info!(
        expired = expired_orders.len(),
        "Finished checking for expired subscriptions"
    );
    Ok(expired_orders)
}

/// The reactive hook for the rental flag.
///
/// Sets `is_battery_rental` on the order; turning the flag on overwrites the
/// order note with [`RENTAL_NOTE`] unconditionally, and turning it off clears
/// the note, discarding any prior content either way.
pub async fn set_rental_flag(
    db: &DatabaseConnection,
    order_id: i64,
    is_battery_rental: bool,
) -> Result<rental_order::Model> {
    let order = get_order_by_id(db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    let mut active: rental_order::ActiveModel = order.into();
    active.is_battery_rental = Set(is_battery_rental);
    active.note = Set(is_battery_rental.then(|| RENTAL_NOTE.to_string()));

    active.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_rental_order_rejects_blank_name() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_rental_order(&db, NewRentalOrder::default()).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_scan_scenario() -> Result<()> {
        let db = setup_test_db().await?;

        // A: rental, long expired. B: rental, expires far in the future.
        // C: not a rental despite the past end date.
        let a = create_rental(&db, "A", true, Some(date(2023, 1, 1))).await?;
        let _b = create_rental(&db, "B", true, Some(date(2099, 1, 1))).await?;
        let _c = create_rental(&db, "C", false, Some(date(2023, 1, 1))).await?;

        let expired = find_expired_rentals(&db, date(2024, 1, 1)).await?;
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, a.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_scan_excludes_null_end_dates() -> Result<()> {
        let db = setup_test_db().await?;

        create_rental(&db, "open-ended", true, None).await?;
        create_rental(&db, "expired", true, Some(date(2020, 6, 1))).await?;

        let expired = find_expired_rentals(&db, date(2024, 1, 1)).await?;
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "expired");

        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_is_strict() -> Result<()> {
        let db = setup_test_db().await?;

        let deadline = date(2024, 1, 1);
        create_rental(&db, "at-deadline", true, Some(deadline)).await?;

        // An end date equal to the evaluation time is not expired
        assert!(find_expired_rentals(&db, deadline).await?.is_empty());

        // One second later it is
        let just_after = deadline + chrono::Duration::seconds(1);
        assert_eq!(find_expired_rentals(&db, just_after).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_expiry_scan_is_stateless() -> Result<()> {
        let db = setup_test_db().await?;

        create_rental(&db, "A", true, Some(date(2023, 1, 1))).await?;
        create_rental(&db, "B", true, Some(date(2023, 2, 1))).await?;

        let now = date(2024, 1, 1);
        let first = check_expired_subscriptions(&db, now).await?;
        let second = check_expired_subscriptions(&db, now).await?;

        // No processed marker exists, so both runs see the same orders
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_rental_flag_on_sets_note() -> Result<()> {
        let db = setup_test_db().await?;

        let order = create_rental(&db, "SO0001", false, None).await?;
        assert_eq!(order.note, None);

        let updated = set_rental_flag(&db, order.id, true).await?;
        assert!(updated.is_battery_rental);
        assert_eq!(updated.note.as_deref(), Some(RENTAL_NOTE));

        Ok(())
    }

    #[tokio::test]
    async fn test_set_rental_flag_off_clears_note() -> Result<()> {
        let db = setup_test_db().await?;

        let order = create_rental(&db, "SO0002", true, None).await?;
        let updated = set_rental_flag(&db, order.id, true).await?;
        assert!(updated.note.is_some());

        let cleared = set_rental_flag(&db, order.id, false).await?;
        assert!(!cleared.is_battery_rental);
        assert_eq!(cleared.note, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_rental_flag_overwrites_prior_note() -> Result<()> {
        let db = setup_test_db().await?;

        let order = create_rental(&db, "SO0003", false, None).await?;

        // Give the order a handwritten note out of band
        let mut active: rental_order::ActiveModel = order.into();
        active.note = Set(Some("call the customer back".to_string()));
        let order = active.update(&db).await?;

        // Toggling the flag discards it, in either direction
        let updated = set_rental_flag(&db, order.id, true).await?;
        assert_eq!(updated.note.as_deref(), Some(RENTAL_NOTE));

        let mut active: rental_order::ActiveModel = updated.into();
        active.note = Set(Some("another handwritten note".to_string()));
        let order = active.update(&db).await?;

        let cleared = set_rental_flag(&db, order.id, false).await?;
        assert_eq!(cleared.note, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_set_rental_flag_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = set_rental_flag(&db, 42, true).await;
        assert!(matches!(result.unwrap_err(), Error::OrderNotFound { id: 42 }));

        Ok(())
    }
}
