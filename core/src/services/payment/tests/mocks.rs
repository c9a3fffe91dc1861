//! Stub adapter implementations for testing the payment facade

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use rust_decimal::Decimal;

use crate::adapters::PaymentAdapter;
use crate::domain::value_objects::{
    AddBankAccountRequest, AddBankCardRequest, BankAccountAdded, BankCardAdded,
    P2bTransferReceipt, P2bTransferRequest,
};
use crate::errors::{AdapterError, DomainError, DomainResult};

/// Stub adapter that succeeds with canned payment-service responses and
/// records every request it saw.
pub struct StubPaymentAdapter {
    pub unreachable: bool,
    pub seen_cards: Mutex<Vec<AddBankCardRequest>>,
    pub seen_accounts: Mutex<Vec<AddBankAccountRequest>>,
    pub seen_transfers: Mutex<Vec<(P2bTransferRequest, String)>>,
}

impl StubPaymentAdapter {
    pub fn new() -> Self {
        Self {
            unreachable: false,
            seen_cards: Mutex::new(Vec::new()),
            seen_accounts: Mutex::new(Vec::new()),
            seen_transfers: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        let mut stub = Self::new();
        stub.unreachable = true;
        stub
    }

    fn check_reachable(&self) -> DomainResult<()> {
        if self.unreachable {
            Err(DomainError::Adapter(AdapterError::Unreachable {
                service: String::from("PaymentService"),
            }))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PaymentAdapter for StubPaymentAdapter {
    async fn add_bank_card(&self, request: AddBankCardRequest) -> DomainResult<BankCardAdded> {
        self.check_reachable()?;
        let card_last_four = request
            .card_number
            .chars()
            .rev()
            .take(4)
            .collect::<String>()
            .chars()
            .rev()
            .collect();
        let response = BankCardAdded {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            card_holder_first_name: request.card_holder_first_name.clone(),
            card_holder_last_name: request.card_holder_last_name.clone(),
            card_last_four,
            expiration_date: request.expiration_date.clone(),
            payment_token: String::from("stub-payment-token"),
            balance: Decimal::ZERO,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.seen_cards.lock().unwrap().push(request);
        Ok(response)
    }

    async fn add_bank_account(
        &self,
        request: AddBankAccountRequest,
    ) -> DomainResult<BankAccountAdded> {
        self.check_reachable()?;
        let response = BankAccountAdded {
            id: Uuid::new_v4(),
            company_id: request.company_id,
            account_holder_name: request.account_holder_name.clone(),
            account_number: request.account_number.clone(),
            bank_name: None,
            bank_bic: None,
            is_active: true,
            balance: Decimal::ZERO,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.seen_accounts.lock().unwrap().push(request);
        Ok(response)
    }

    async fn p2b_transfer(
        &self,
        request: P2bTransferRequest,
        payment_token: &str,
    ) -> DomainResult<P2bTransferReceipt> {
        self.check_reachable()?;
        let receipt = P2bTransferReceipt {
            transaction_id: Uuid::new_v4(),
            transferred_amount: request.amount,
            currency: String::from("KZT"),
            updated_bank_card_balance: Decimal::ZERO,
            updated_bank_account_balance: request.amount,
            transaction_fee: Decimal::ZERO,
            timestamp: Utc::now(),
        };
        self.seen_transfers
            .lock()
            .unwrap()
            .push((request, payment_token.to_string()));
        Ok(receipt)
    }
}
