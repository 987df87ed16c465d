// src/repositories/mocks.rs
//
// mockall doubles for service tests. Each mock implements the generic
// CrudRepository contract plus its entity-specific trait.

use chrono::NaiveDate;
use mockall::mock;

use super::{
    CourseRepository, CrudRepository, InstructorRepository, PisteRepository,
    RegistrationRepository, SkierRepository, SubscriptionRepository,
};
use crate::domain::{
    Course, Instructor, Piste, Registration, Skier, Subscription, Support, TypeSubscription,
};
use crate::error::AppResult;

mock! {
    pub PisteRepo {}

    impl CrudRepository<Piste> for PisteRepo {
        fn save(&self, entity: &Piste) -> AppResult<Piste>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Piste>>;
        fn find_all(&self) -> AppResult<Vec<Piste>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl PisteRepository for PisteRepo {}
}

mock! {
    pub CourseRepo {}

    impl CrudRepository<Course> for CourseRepo {
        fn save(&self, entity: &Course) -> AppResult<Course>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Course>>;
        fn find_all(&self) -> AppResult<Vec<Course>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl CourseRepository for CourseRepo {}
}

mock! {
    pub InstructorRepo {}

    impl CrudRepository<Instructor> for InstructorRepo {
        fn save(&self, entity: &Instructor) -> AppResult<Instructor>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Instructor>>;
        fn find_all(&self) -> AppResult<Vec<Instructor>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl InstructorRepository for InstructorRepo {}
}

mock! {
    pub SubscriptionRepo {}

    impl CrudRepository<Subscription> for SubscriptionRepo {
        fn save(&self, entity: &Subscription) -> AppResult<Subscription>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Subscription>>;
        fn find_all(&self) -> AppResult<Vec<Subscription>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl SubscriptionRepository for SubscriptionRepo {
        fn find_by_type_ordered_by_start_date(
            &self,
            type_sub: TypeSubscription,
        ) -> AppResult<Vec<Subscription>>;
        fn find_by_start_date_between(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> AppResult<Vec<Subscription>>;
    }
}

mock! {
    pub SkierRepo {}

    impl CrudRepository<Skier> for SkierRepo {
        fn save(&self, entity: &Skier) -> AppResult<Skier>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Skier>>;
        fn find_all(&self) -> AppResult<Vec<Skier>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl SkierRepository for SkierRepo {
        fn find_by_subscription_type(&self, type_sub: TypeSubscription) -> AppResult<Vec<Skier>>;
        fn save_with_registrations(
            &self,
            skier: &Skier,
            registrations: &[Registration],
        ) -> AppResult<Skier>;
    }
}

mock! {
    pub RegistrationRepo {}

    impl CrudRepository<Registration> for RegistrationRepo {
        fn save(&self, entity: &Registration) -> AppResult<Registration>;
        fn find_by_id(&self, id: i64) -> AppResult<Option<Registration>>;
        fn find_all(&self) -> AppResult<Vec<Registration>>;
        fn delete_by_id(&self, id: i64) -> AppResult<()>;
    }

    impl RegistrationRepository for RegistrationRepo {
        fn count_distinct_by_week_skier_course(
            &self,
            num_week: u32,
            skier_id: i64,
            course_id: i64,
        ) -> AppResult<u32>;
        fn count_by_course_and_week(&self, course_id: i64, num_week: u32) -> AppResult<u32>;
        fn num_weeks_course_of_instructor_by_support(
            &self,
            instructor_id: i64,
            support: Support,
        ) -> AppResult<Vec<u32>>;
    }
}
