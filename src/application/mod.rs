pub mod amount;
pub mod loan_application;
pub mod product;

pub use amount::LoanAmount;
pub use loan_application::{LoanApplication, LoanApplicationBuilder};
pub use product::LoanProduct;
