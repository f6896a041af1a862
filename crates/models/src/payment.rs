use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors, mechanic, service_record};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_COMPLETED: &str = "Completed";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub record_id: i32,
    pub mechanic_id: i32,
    pub amount: f64,
    pub upi: Option<String>,
    pub credit_card: Option<String>,
    pub status: String,
    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ServiceRecord, Mechanic }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ServiceRecord => Entity::belongs_to(service_record::Entity)
                .from(Column::RecordId)
                .to(service_record::Column::Id)
                .into(),
            Relation::Mechanic => Entity::belongs_to(mechanic::Entity)
                .from(Column::MechanicId)
                .to(mechanic::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPayment {
    pub record_id: i32,
    pub mechanic_id: i32,
    pub amount: f64,
    pub upi: Option<String>,
    pub credit_card: Option<String>,
    /// `None` stores [`STATUS_PENDING`].
    pub status: Option<String>,
}

pub fn validate_amount(amount: f64) -> Result<(), errors::ModelError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(errors::ModelError::Validation("amount must be a non-negative number".into()));
    }
    Ok(())
}

/// Insert a payment; the timestamp is always taken from the server clock.
pub async fn create<C: ConnectionTrait>(db: &C, input: &NewPayment) -> Result<Model, errors::ModelError> {
    validate_amount(input.amount)?;
    let status = input
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(STATUS_PENDING);
    let am = ActiveModel {
        record_id: Set(input.record_id),
        mechanic_id: Set(input.mechanic_id),
        amount: Set(input.amount),
        upi: Set(input.upi.clone()),
        credit_card: Set(input.credit_card.clone()),
        status: Set(status.to_string()),
        timestamp: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
