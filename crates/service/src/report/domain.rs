use sea_orm::{prelude::DateTimeWithTimeZone, FromQueryResult};
use serde::Serialize;

/// Payment totals of one mechanic for a single status.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct TotalRow {
    pub status: String,
    pub total_amount: f64,
    pub payment_count: i64,
}

/// One service record of a vehicle with its type and mechanic names.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct ServiceDetailRow {
    pub record_id: i32,
    pub serviced_at: DateTimeWithTimeZone,
    pub service_type: Option<String>,
    pub mechanic: Option<String>,
    pub description: String,
    pub cost: f64,
    pub rating: Option<i32>,
}

/// Both result sets of the mechanic payment report. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MechanicPaymentSummary {
    pub line_items: Vec<models::payment::Model>,
    pub totals: Vec<TotalRow>,
}
