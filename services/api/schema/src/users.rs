use sea_orm::entity::prelude::*;

/// Registered account. `default_currency_id` is the fallback used when a
/// record is created without an explicit currency.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub default_currency_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::DefaultCurrencyId",
        to = "super::currencies::Column::Id"
    )]
    DefaultCurrency,
    #[sea_orm(has_many = "super::records::Entity")]
    Records,
}

impl Related<super::currencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefaultCurrency.def()
    }
}

impl Related<super::records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Records.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
