use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder,
};

/// Column values of a journey, shared by create & update
pub struct JourneyParams {
    pub route_id: i32,
    pub train_id: i32,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

pub struct JourneyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JourneyRepository<'a, C> {
    /// Creates a new instance of [`JourneyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: JourneyParams) -> Result<entity::journey::Model, DbErr> {
        let journey = entity::journey::ActiveModel {
            route_id: ActiveValue::Set(params.route_id),
            train_id: ActiveValue::Set(params.train_id),
            departure_time: ActiveValue::Set(params.departure_time),
            arrival_time: ActiveValue::Set(params.arrival_time),
            ..Default::default()
        };

        journey.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::journey::Model>, DbErr> {
        entity::prelude::Journey::find_by_id(id).one(self.db).await
    }

    /// Returns journeys ordered by departure time
    pub async fn get_all(&self) -> Result<Vec<entity::journey::Model>, DbErr> {
        entity::prelude::Journey::find()
            .order_by_asc(entity::journey::Column::DepartureTime)
            .order_by_asc(entity::journey::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::journey::Model>, DbErr> {
        entity::prelude::Journey::find()
            .filter(entity::journey::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: JourneyParams,
    ) -> Result<Option<entity::journey::Model>, DbErr> {
        let Some(journey) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut journey_am = journey.into_active_model();
        journey_am.route_id = ActiveValue::Set(params.route_id);
        journey_am.train_id = ActiveValue::Set(params.train_id);
        journey_am.departure_time = ActiveValue::Set(params.departure_time);
        journey_am.arrival_time = ActiveValue::Set(params.arrival_time);

        Ok(Some(journey_am.update(self.db).await?))
    }

    /// Deletes a journey along with its tickets & crew assignments
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Journey::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Returns the crew members assigned to a journey
    pub async fn get_crew(
        &self,
        journey: &entity::journey::Model,
    ) -> Result<Vec<entity::crew::Model>, DbErr> {
        journey
            .find_related(entity::prelude::Crew)
            .order_by_asc(entity::crew::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `(journey_id, crew_id)` assignments for the provided journeys
    pub async fn get_crew_assignments(
        &self,
        journey_ids: &[i32],
    ) -> Result<Vec<entity::journey_crew::Model>, DbErr> {
        entity::prelude::JourneyCrew::find()
            .filter(entity::journey_crew::Column::JourneyId.is_in(journey_ids.iter().copied()))
            .order_by_asc(entity::journey_crew::Column::CrewId)
            .all(self.db)
            .await
    }

    /// Replaces the crew assigned to a journey
    ///
    /// Should be called inside a transaction so a failed insert leaves the previous crew intact.
    pub async fn set_crew(&self, journey_id: i32, crew_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::JourneyCrew::delete_many()
            .filter(entity::journey_crew::Column::JourneyId.eq(journey_id))
            .exec(self.db)
            .await?;

        if crew_ids.is_empty() {
            return Ok(());
        }

        let assignments = crew_ids
            .iter()
            .map(|crew_id| entity::journey_crew::ActiveModel {
                journey_id: ActiveValue::Set(journey_id),
                crew_id: ActiveValue::Set(*crew_id),
            });

        entity::prelude::JourneyCrew::insert_many(assignments)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
