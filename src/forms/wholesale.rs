// src/forms/wholesale.rs  -  Wholesale / commercial quote request
use super::{is_valid_email, is_valid_phone, is_valid_quantity, Submission, ValidationError};
use crate::dom::Document;
use crate::store::{self, KeyValueStore};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WholesaleRequest {
    pub client_type:  String,
    pub product:      String,
    pub quantity:     String,
    pub company_name: String,
    pub contact_name: String,
    pub email:        String,
    pub phone:        String,
    pub notes:        String,
}

impl Submission for WholesaleRequest {
    const LABEL: &'static str = "Wholesale Request";
    const SUCCESS_KEY: &'static str = "alertSuccessWholesale";
    const MISSING_KEY: &'static str = "alertMissingFields";

    fn read(doc: &Document) -> Self {
        Self {
            client_type:  doc.field("clientType"),
            product:      doc.field("productSelect"),
            quantity:     doc.field("quantity"),
            company_name: doc.field("companyName"),
            contact_name: doc.field("contactName"),
            email:        doc.field("email"),
            phone:        doc.field("phone"),
            notes:        doc.field("notes"),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            &self.client_type, &self.product, &self.quantity,
            &self.contact_name, &self.email, &self.phone,
        ];
        if required.iter().any(|f| f.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_quantity(&self.quantity) { return Err(ValidationError::Quantity); }
        if !is_valid_phone(&self.phone)       { return Err(ValidationError::Phone); }
        if !is_valid_email(&self.email)       { return Err(ValidationError::Email); }
        Ok(())
    }

    fn remember(&self, store: &mut dyn KeyValueStore) {
        store::persist(store, store::KEY_CONTACT_NAME, &self.contact_name);
        store::persist(store, store::KEY_CONTACT_EMAIL, &self.email);
    }
}
