use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "train")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub cargo_num: i32,
    pub places_in_cargo: i32,
    pub train_type_id: i32,
}

impl Model {
    /// Number of seats across every cargo of the train
    pub fn total_capacity(&self) -> i64 {
        i64::from(self.cargo_num) * i64::from(self.places_in_cargo)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::train_type::Entity",
        from = "Column::TrainTypeId",
        to = "super::train_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TrainType,
    #[sea_orm(has_many = "super::journey::Entity")]
    Journey,
}

impl Related<super::train_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainType.def()
    }
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
