use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "booking_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::railbook_user::Entity",
        from = "Column::UserId",
        to = "super::railbook_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RailbookUser,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::railbook_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RailbookUser.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
