// src/services/skier_service.rs
//
// Skier orchestration
//
// A new skier is written together with the subscription it carries, and
// bulk course enrolment adds one registration per requested week, all in a
// single repository transaction. Updates link subscriptions by id only.

use std::collections::HashSet;
use std::sync::Arc;

use super::CrudService;
use crate::domain::registration::validate_week;
use crate::domain::{
    Course, DomainError, Entity, Piste, Registration, Skier, Subscription, TypeSubscription,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{
    CourseRepository, PisteRepository, SkierRepository, SubscriptionRepository,
};

pub struct SkierService {
    crud: CrudService<Skier, dyn SkierRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
    piste_repo: Arc<dyn PisteRepository>,
    course_repo: Arc<dyn CourseRepository>,
}

impl SkierService {
    pub fn new(
        skier_repo: Arc<dyn SkierRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        piste_repo: Arc<dyn PisteRepository>,
        course_repo: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            crud: CrudService::new(skier_repo),
            subscription_repo,
            piste_repo,
            course_repo,
        }
    }

    /// Save a new skier and the subscription it carries (if any), with the
    /// end date derived from start date and type
    pub fn add_skier(&self, skier: Skier) -> AppResult<Skier> {
        let skier = Self::prepare_new_skier(skier)?;

        let saved = self.crud.repository().save_with_registrations(&skier, &[])?;
        log::info!("Skier {:?} added", saved.num_skier);
        Ok(saved)
    }

    /// A subscription on the skier must already exist; it is linked by id
    pub fn update_skier(&self, skier: &Skier) -> AppResult<Skier> {
        if let Some(subscription) = &skier.subscription {
            let num_sub = subscription.num_sub.ok_or_else(|| {
                DomainError::InvariantViolation(
                    "Skier update links a subscription by id; add the subscription first"
                        .to_string(),
                )
            })?;
            self.subscription_repo
                .find_by_id(num_sub)?
                .ok_or_else(|| AppError::not_found(Subscription::NAME, num_sub))?;
        }

        self.crud.update(skier)
    }

    pub fn retrieve_all_skiers(&self) -> AppResult<Vec<Skier>> {
        self.crud.retrieve_all()
    }

    pub fn retrieve_skier(&self, num_skier: i64) -> AppResult<Option<Skier>> {
        self.crud.retrieve(num_skier)
    }

    pub fn remove_skier(&self, num_skier: i64) -> AppResult<()> {
        self.crud.remove(num_skier)
    }

    pub fn assign_skier_to_subscription(&self, num_skier: i64, num_sub: i64) -> AppResult<Skier> {
        let mut skier = self.crud.require(num_skier)?;
        let subscription = self
            .subscription_repo
            .find_by_id(num_sub)?
            .ok_or_else(|| AppError::not_found(Subscription::NAME, num_sub))?;

        skier.subscription = Some(subscription);

        let saved = self.crud.repository().save(&skier)?;
        log::info!("Skier {} now holds subscription {}", num_skier, num_sub);
        Ok(saved)
    }

    /// Assigning a piste the skier already has changes nothing
    pub fn assign_skier_to_piste(&self, num_skier: i64, num_piste: i64) -> AppResult<Skier> {
        let mut skier = self.crud.require(num_skier)?;
        self.piste_repo
            .find_by_id(num_piste)?
            .ok_or_else(|| AppError::not_found(Piste::NAME, num_piste))?;

        if skier.pistes.contains(&num_piste) {
            return Ok(skier);
        }
        skier.assign_piste(num_piste);

        let saved = self.crud.repository().save(&skier)?;
        log::info!("Skier {} assigned to piste {}", num_skier, num_piste);
        Ok(saved)
    }

    /// Add a skier and register them to `num_course` for each of `weeks`.
    ///
    /// Admission rules are not applied here; the course only has to exist.
    /// Either the skier and every registration are stored, or nothing is.
    pub fn add_skier_and_assign_to_course(
        &self,
        skier: Skier,
        weeks: &[u32],
        num_course: i64,
    ) -> AppResult<Skier> {
        // 1. Preconditions that must hold before any write
        self.course_repo
            .find_by_id(num_course)?
            .ok_or_else(|| AppError::not_found(Course::NAME, num_course))?;

        let mut requested = HashSet::new();
        for &week in weeks {
            validate_week(week)?;
            if !requested.insert(week) {
                return Err(DomainError::InvariantViolation(format!(
                    "Week {} requested more than once",
                    week
                ))
                .into());
            }
        }
        let skier = Self::prepare_new_skier(skier)?;

        // 2. Skier, subscription and one registration per week, atomically
        let registrations: Vec<Registration> = weeks
            .iter()
            .map(|&week| {
                let mut registration = Registration::new(week);
                registration.assign_course(num_course);
                registration
            })
            .collect();
        let saved = self
            .crud
            .repository()
            .save_with_registrations(&skier, &registrations)?;

        log::info!(
            "Skier {:?} registered to course {} for {} week(s)",
            saved.num_skier,
            num_course,
            weeks.len()
        );
        Ok(saved)
    }

    pub fn retrieve_skiers_by_subscription_type(
        &self,
        type_sub: TypeSubscription,
    ) -> AppResult<Vec<Skier>> {
        self.crud.repository().find_by_subscription_type(type_sub)
    }

    /// Rejects a skier (or nested subscription) that already has an id and
    /// derives the subscription end date, then validates
    fn prepare_new_skier(mut skier: Skier) -> AppResult<Skier> {
        if let Some(num_skier) = skier.id() {
            return Err(DomainError::InvariantViolation(format!(
                "New Skier must not carry an id (got {})",
                num_skier
            ))
            .into());
        }

        if let Some(subscription) = skier.subscription.as_mut() {
            if subscription.num_sub.is_some() {
                return Err(DomainError::InvariantViolation(
                    "A new skier's subscription must be new; link an existing one by assignment"
                        .to_string(),
                )
                .into());
            }
            subscription.recompute_end_date()?;
        }

        skier.validate()?;
        Ok(skier)
    }
}
