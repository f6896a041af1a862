use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation;

/// Raw `add_payments` form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentForm {
    pub record_id: Option<String>,
    pub mechanic_id: Option<String>,
    pub amount: Option<String>,
    pub upi: Option<String>,
    pub credit_card: Option<String>,
    pub status: Option<String>,
}

impl PaymentForm {
    pub fn parse(&self) -> Result<models::payment::NewPayment, ServiceError> {
        Ok(models::payment::NewPayment {
            record_id: validation::parse_id("record_id", self.record_id.as_deref())?,
            mechanic_id: validation::parse_id("mechanic_id", self.mechanic_id.as_deref())?,
            amount: validation::parse_amount("amount", self.amount.as_deref())?,
            upi: validation::optional(self.upi.as_deref()),
            credit_card: validation::optional(self.credit_card.as_deref()),
            status: validation::optional(self.status.as_deref()),
        })
    }
}
