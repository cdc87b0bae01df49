use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub journey_id: i32,
    pub order_id: i32,
    pub cargo: i32,
    pub seat: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::journey::Entity",
        from = "Column::JourneyId",
        to = "super::journey::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Journey,
    #[sea_orm(
        belongs_to = "super::booking_order::Entity",
        from = "Column::OrderId",
        to = "super::booking_order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    BookingOrder,
}

impl Related<super::journey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Journey.def()
    }
}

impl Related<super::booking_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
