//! Payment request and response value objects.
//!
//! Monetary fields use [`rust_decimal::Decimal`]; balances and fees come
//! back from the payment service already settled, the gateway never does
//! arithmetic on them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use al_shared::utils::validation::{validators, Validate, ValidationErrors};

/// Request to attach a bank card to a user's account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBankCardRequest {
    pub user_id: Uuid,
    pub card_holder_first_name: String,
    pub card_holder_last_name: String,
    /// 11-16 digits
    pub card_number: String,
    /// `MM/YY`
    pub expiration_date: String,
    /// 3 digits
    pub cvv_code: String,
}

impl AddBankCardRequest {
    /// Expiration month parsed from `expiration_date`, if well formed
    pub fn expiration_month(&self) -> Option<u32> {
        validators::parse_card_expiry(&self.expiration_date).map(|(month, _)| month)
    }

    /// Full four-digit expiration year, if well formed
    pub fn expiration_year(&self) -> Option<i32> {
        validators::parse_card_expiry(&self.expiration_date).map(|(_, year)| year)
    }
}

impl Validate for AddBankCardRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.card_holder_first_name) {
            errors.add_error(
                "card_holder_first_name",
                "card holder first name must not be empty",
                "REQUIRED",
            );
        }
        if !validators::not_empty(&self.card_holder_last_name) {
            errors.add_error(
                "card_holder_last_name",
                "card holder last name must not be empty",
                "REQUIRED",
            );
        }
        if !validators::digits_only(&self.card_number)
            || !validators::length_between(&self.card_number, 11, 16)
        {
            errors.add_error(
                "card_number",
                "card number must be 11-16 digits",
                "INVALID_CARD_NUMBER",
            );
        }
        if !validators::is_future_card_expiry(&self.expiration_date) {
            errors.add_error(
                "expiration_date",
                "expiration date must be MM/YY and in the future",
                "INVALID_EXPIRY",
            );
        }
        if !validators::digits_only(&self.cvv_code)
            || !validators::length_between(&self.cvv_code, 3, 3)
        {
            errors.add_error("cvv_code", "CVV must be exactly 3 digits", "INVALID_CVV");
        }

        errors.into_result()
    }
}

/// Request to attach a bank account to a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddBankAccountRequest {
    pub company_id: Uuid,
    pub account_holder_name: String,
    pub account_number: String,
}

impl Validate for AddBankAccountRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.account_holder_name) {
            errors.add_error(
                "account_holder_name",
                "account holder name must not be empty",
                "REQUIRED",
            );
        }
        if !validators::not_empty(&self.account_number) {
            errors.add_error(
                "account_number",
                "account number must not be empty",
                "REQUIRED",
            );
        }

        errors.into_result()
    }
}

/// Request for a P2B (bank card -> bank account) transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P2bTransferRequest {
    /// Destination account in Kazakhstan IBAN format (`KZ` + 18 digits)
    pub bank_account_number: String,
    /// Transfer amount, must be greater than zero
    pub amount: Decimal,
}

impl Validate for P2bTransferRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !validators::is_valid_kz_iban(&self.bank_account_number) {
            errors.add_error(
                "bank_account_number",
                "account number must be a Kazakhstan IBAN (KZ followed by 18 digits)",
                "INVALID_IBAN",
            );
        }
        if self.amount <= Decimal::ZERO {
            errors.add_error("amount", "amount must be greater than zero", "OUT_OF_RANGE");
        }

        errors.into_result()
    }
}

/// Card registered with the payment service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankCardAdded {
    pub id: Uuid,
    pub user_id: Uuid,
    pub card_holder_first_name: String,
    pub card_holder_last_name: String,
    /// Exactly 4 digits; the full number never crosses the gateway back
    pub card_last_four: String,
    /// `MM/YY`
    pub expiration_date: String,
    /// Token used for subsequent payment operations
    pub payment_token: String,
    pub balance: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bank account registered with the payment service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccountAdded {
    pub id: Uuid,
    pub company_id: Uuid,
    pub account_holder_name: String,
    pub account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_bic: Option<String>,
    pub is_active: bool,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Settled P2B transfer as reported by the payment service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P2bTransferReceipt {
    pub transaction_id: Uuid,
    pub transferred_amount: Decimal,
    /// 3-letter ISO currency code (e.g. "KZT")
    pub currency: String,
    pub updated_bank_card_balance: Decimal,
    pub updated_bank_account_balance: Decimal,
    pub transaction_fee: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Validate for P2bTransferReceipt {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.transferred_amount <= Decimal::ZERO {
            errors.add_error(
                "transferred_amount",
                "transferred amount must be greater than zero",
                "OUT_OF_RANGE",
            );
        }
        if self.updated_bank_card_balance < Decimal::ZERO {
            errors.add_error(
                "updated_bank_card_balance",
                "bank card balance cannot be negative",
                "OUT_OF_RANGE",
            );
        }
        if self.updated_bank_account_balance < Decimal::ZERO {
            errors.add_error(
                "updated_bank_account_balance",
                "bank account balance cannot be negative",
                "OUT_OF_RANGE",
            );
        }
        if self.transaction_fee < Decimal::ZERO {
            errors.add_error(
                "transaction_fee",
                "transaction fee cannot be negative",
                "OUT_OF_RANGE",
            );
        }
        if self.currency.len() != 3 {
            errors.add_error(
                "currency",
                "currency must be a 3-letter ISO code",
                "INVALID_CURRENCY",
            );
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_card_request() -> AddBankCardRequest {
        AddBankCardRequest {
            user_id: Uuid::new_v4(),
            card_holder_first_name: String::from("Aigerim"),
            card_holder_last_name: String::from("Satpayeva"),
            card_number: String::from("4400430112345678"),
            expiration_date: String::from("12/99"),
            cvv_code: String::from("123"),
        }
    }

    #[test]
    fn valid_card_passes() {
        assert!(valid_card_request().validate().is_ok());
    }

    #[test]
    fn card_expiry_helpers() {
        let request = valid_card_request();
        assert_eq!(request.expiration_month(), Some(12));
        assert_eq!(request.expiration_year(), Some(2099));
    }

    #[test]
    fn card_rejects_bad_number_and_cvv() {
        let mut request = valid_card_request();
        request.card_number = String::from("1234");
        request.cvv_code = String::from("12a");
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn card_rejects_past_expiry() {
        let mut request = valid_card_request();
        request.expiration_date = String::from("01/20");
        assert!(request.validate().is_err());
    }

    #[test]
    fn transfer_rejects_non_positive_amount() {
        let request = P2bTransferRequest {
            bank_account_number: String::from("KZ123456789012345678"),
            amount: dec!(0),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn transfer_rejects_foreign_iban() {
        let request = P2bTransferRequest {
            bank_account_number: String::from("DE123456789012345678"),
            amount: dec!(2500.00),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn receipt_invariants() {
        let receipt = P2bTransferReceipt {
            transaction_id: Uuid::new_v4(),
            transferred_amount: dec!(2500.00),
            currency: String::from("KZT"),
            updated_bank_card_balance: dec!(7500.00),
            updated_bank_account_balance: dec!(12500.00),
            transaction_fee: dec!(25.00),
            timestamp: Utc::now(),
        };
        assert!(receipt.validate().is_ok());

        let bad = P2bTransferReceipt {
            transferred_amount: dec!(-1),
            currency: String::from("TENGE"),
            ..receipt
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
    }
}
