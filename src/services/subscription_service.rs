// src/services/subscription_service.rs

use chrono::NaiveDate;
use std::sync::Arc;

use super::CrudService;
use crate::domain::{Subscription, TypeSubscription};
use crate::error::AppResult;
use crate::repositories::SubscriptionRepository;

pub struct SubscriptionService {
    crud: CrudService<Subscription, dyn SubscriptionRepository>,
}

impl SubscriptionService {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self {
            crud: CrudService::new(subscription_repo),
        }
    }

    /// Persist a subscription with its end date derived from start date and type
    pub fn add_subscription(&self, mut subscription: Subscription) -> AppResult<Subscription> {
        subscription.recompute_end_date()?;
        self.crud.add(&subscription)
    }

    pub fn update_subscription(&self, subscription: &Subscription) -> AppResult<Subscription> {
        self.crud.update(subscription)
    }

    pub fn retrieve_subscription_by_id(&self, num_sub: i64) -> AppResult<Option<Subscription>> {
        self.crud.retrieve(num_sub)
    }

    pub fn retrieve_all_subscriptions(&self) -> AppResult<Vec<Subscription>> {
        self.crud.retrieve_all()
    }

    pub fn get_subscriptions_by_type(
        &self,
        type_sub: TypeSubscription,
    ) -> AppResult<Vec<Subscription>> {
        self.crud
            .repository()
            .find_by_type_ordered_by_start_date(type_sub)
    }

    /// Subscriptions starting between `start` and `end`, both inclusive
    pub fn retrieve_subscriptions_by_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Subscription>> {
        self.crud.repository().find_by_start_date_between(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::mocks::MockSubscriptionRepo;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn subscription(id: i64, price: f32, type_sub: TypeSubscription) -> Subscription {
        Subscription::starting(date(2024, 1, 15), price, type_sub)
            .unwrap()
            .with_id(id)
    }

    #[test]
    fn test_retrieve_all_subscriptions() {
        let mut repo = MockSubscriptionRepo::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                subscription(1, 100.0, TypeSubscription::Monthly),
                subscription(2, 1200.0, TypeSubscription::Annual),
            ])
        });

        let result = SubscriptionService::new(Arc::new(repo))
            .retrieve_all_subscriptions()
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].type_sub, TypeSubscription::Monthly);
    }

    #[test]
    fn test_add_subscription_computes_end_date() {
        let mut repo = MockSubscriptionRepo::new();
        repo.expect_save()
            .withf(|s| s.end_date == NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
            .times(1)
            .returning(|s| Ok(s.clone().with_id(1)));

        // End date supplied by the caller is ignored
        let draft = Subscription::new(date(2024, 1, 15), date(2024, 1, 15), 600.0, TypeSubscription::Semestriel);
        let result = SubscriptionService::new(Arc::new(repo))
            .add_subscription(draft)
            .unwrap();

        assert_eq!(result.type_sub, TypeSubscription::Semestriel);
        assert_eq!(result.num_sub, Some(1));
    }

    #[test]
    fn test_retrieve_existing_subscription() {
        let mut repo = MockSubscriptionRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(subscription(1, 600.0, TypeSubscription::Semestriel))));

        let result = SubscriptionService::new(Arc::new(repo))
            .retrieve_subscription_by_id(1)
            .unwrap();

        assert_eq!(result.and_then(|s| s.num_sub), Some(1));
    }

    #[test]
    fn test_retrieve_missing_subscription() {
        let mut repo = MockSubscriptionRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(None));

        let result = SubscriptionService::new(Arc::new(repo))
            .retrieve_subscription_by_id(1)
            .unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_get_subscriptions_by_type() {
        let mut repo = MockSubscriptionRepo::new();
        repo.expect_find_by_type_ordered_by_start_date()
            .with(eq(TypeSubscription::Monthly))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    subscription(1, 100.0, TypeSubscription::Monthly),
                    subscription(2, 120.0, TypeSubscription::Monthly),
                ])
            });

        let result = SubscriptionService::new(Arc::new(repo))
            .get_subscriptions_by_type(TypeSubscription::Monthly)
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_retrieve_subscriptions_by_dates() {
        let start = date(2024, 1, 1);
        let end = date(2024, 2, 1);

        let mut repo = MockSubscriptionRepo::new();
        repo.expect_find_by_start_date_between()
            .with(eq(start), eq(end))
            .times(1)
            .returning(|_, _| Ok(vec![subscription(1, 200.0, TypeSubscription::Monthly)]));

        let result = SubscriptionService::new(Arc::new(repo))
            .retrieve_subscriptions_by_dates(start, end)
            .unwrap();

        assert_eq!(result.len(), 1);
    }
}
