use serde::{Deserialize, Serialize};

use crate::application::{LoanAmount, LoanProduct};
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::ApplicationId;

/// a single loan application; only the processor changes its acceptance flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanApplication")]
pub struct LoanApplication {
    id: ApplicationId,
    product: LoanProduct,
    amount: LoanAmount,
    applicant_name: String,
    applicant_age: u32,
    applicant_address: String,
    applicant_salary: Money,
    accepted: bool,
}

/// unvalidated wire form of [`LoanApplication`]
#[derive(Deserialize)]
struct RawLoanApplication {
    id: ApplicationId,
    product: LoanProduct,
    amount: LoanAmount,
    applicant_name: String,
    applicant_age: u32,
    applicant_address: String,
    applicant_salary: Money,
    #[serde(default)]
    accepted: bool,
}

impl TryFrom<RawLoanApplication> for LoanApplication {
    type Error = LoanError;

    fn try_from(raw: RawLoanApplication) -> Result<Self> {
        let mut application = LoanApplication::new(
            raw.id,
            raw.product,
            raw.amount,
            raw.applicant_name,
            raw.applicant_age,
            raw.applicant_address,
            raw.applicant_salary,
        )?;
        application.accepted = raw.accepted;
        Ok(application)
    }
}

impl LoanApplication {
    /// create new, not yet accepted, application; the salary cannot be negative
    pub fn new(
        id: ApplicationId,
        product: LoanProduct,
        amount: LoanAmount,
        applicant_name: impl Into<String>,
        applicant_age: u32,
        applicant_address: impl Into<String>,
        applicant_salary: Money,
    ) -> Result<Self> {
        if applicant_salary.is_negative() {
            return Err(LoanError::InvalidApplication {
                message: format!("salary cannot be negative: {}", applicant_salary),
            });
        }

        Ok(Self {
            id,
            product,
            amount,
            applicant_name: applicant_name.into(),
            applicant_age,
            applicant_address: applicant_address.into(),
            applicant_salary,
            accepted: false,
        })
    }

    pub fn builder() -> LoanApplicationBuilder {
        LoanApplicationBuilder::new()
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn product(&self) -> &LoanProduct {
        &self.product
    }

    pub fn amount(&self) -> &LoanAmount {
        &self.amount
    }

    pub fn applicant_name(&self) -> &str {
        &self.applicant_name
    }

    pub fn applicant_age(&self) -> u32 {
        self.applicant_age
    }

    pub fn applicant_address(&self) -> &str {
        &self.applicant_address
    }

    pub fn applicant_salary(&self) -> Money {
        self.applicant_salary
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub(crate) fn accept(&mut self) {
        self.accepted = true;
    }

    pub(crate) fn decline(&mut self) {
        self.accepted = false;
    }
}

/// builder for loan applications
#[derive(Debug, Default)]
pub struct LoanApplicationBuilder {
    id: Option<ApplicationId>,
    product: Option<LoanProduct>,
    amount: Option<LoanAmount>,
    applicant_name: Option<String>,
    applicant_age: Option<u32>,
    applicant_address: Option<String>,
    applicant_salary: Option<Money>,
}

impl LoanApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: ApplicationId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn product(mut self, product: LoanProduct) -> Self {
        self.product = Some(product);
        self
    }

    pub fn amount(mut self, amount: LoanAmount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn applicant_name(mut self, name: impl Into<String>) -> Self {
        self.applicant_name = Some(name.into());
        self
    }

    pub fn applicant_age(mut self, age: u32) -> Self {
        self.applicant_age = Some(age);
        self
    }

    pub fn applicant_address(mut self, address: impl Into<String>) -> Self {
        self.applicant_address = Some(address.into());
        self
    }

    pub fn applicant_salary(mut self, salary: Money) -> Self {
        self.applicant_salary = Some(salary);
        self
    }

    pub fn build(self) -> Result<LoanApplication> {
        let id = self.id.ok_or_else(|| missing("id"))?;
        let product = self.product.ok_or_else(|| missing("product"))?;
        let amount = self.amount.ok_or_else(|| missing("amount"))?;
        let applicant_name = self.applicant_name.ok_or_else(|| missing("applicant name"))?;
        let applicant_age = self.applicant_age.ok_or_else(|| missing("applicant age"))?;
        let applicant_address = self
            .applicant_address
            .ok_or_else(|| missing("applicant address"))?;
        let applicant_salary = self
            .applicant_salary
            .ok_or_else(|| missing("applicant salary"))?;

        LoanApplication::new(
            id,
            product,
            amount,
            applicant_name,
            applicant_age,
            applicant_address,
            applicant_salary,
        )
    }
}

fn missing(field: &str) -> LoanError {
    LoanError::InvalidApplication {
        message: format!("{} is required", field),
    }
}
