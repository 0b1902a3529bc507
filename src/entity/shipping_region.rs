use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipping_region")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub shipping_region_id: i32,
    pub shipping_region: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shipping::Entity")]
    Shippings,
}

impl Related<super::shipping::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shippings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
