use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors;

pub const PLACEHOLDER_PHONE: &str = "0000000000";
pub const PLACEHOLDER_ADDRESS: &str = "Unknown Address";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Stand-in record used when a vehicle names an owner the shop has no details for.
pub fn placeholder(id: i32) -> ActiveModel {
    ActiveModel {
        id: Set(id),
        name: Set(format!("Owner {id}")),
        phone: Set(PLACEHOLDER_PHONE.to_string()),
        email: Set(format!("owner{id}@example.com")),
        address: Set(PLACEHOLDER_ADDRESS.to_string()),
    }
}

/// Find-or-create: return owner `id`, inserting a [`placeholder`] first if it
/// does not exist. The flag is `true` when this call created the row.
///
/// The insert is `ON CONFLICT (id) DO NOTHING`, so two callers racing on the
/// same new id both end up with the one row. Pass a transaction to make it
/// atomic with whatever the caller writes next.
pub async fn find_or_create_placeholder<C: ConnectionTrait>(db: &C, id: i32) -> Result<(Model, bool), errors::ModelError> {
    if id <= 0 { return Err(errors::ModelError::Validation("owner id must be positive".into())); }
    let inserted = Entity::insert(placeholder(id))
        .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    let owner = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::Db(format!("owner {id} missing after upsert")))?;
    let created = inserted > 0;
    if created {
        info!(owner_id = id, event = "owner_placeholder_created", "auto-created placeholder owner");
    }
    Ok((owner, created))
}
