use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crew")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journey_crew::Entity")]
    JourneyCrew,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        super::journey_crew::Relation::Journey.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::journey_crew::Relation::Crew.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
