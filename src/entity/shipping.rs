use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipping")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub shipping_id: i32,
    pub shipping_type: String,
    pub shipping_cost: i64,
    pub shipping_region_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shipping_region::Entity",
        from = "Column::ShippingRegionId",
        to = "super::shipping_region::Column::ShippingRegionId"
    )]
    ShippingRegions,
}

impl Related<super::shipping_region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShippingRegions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
