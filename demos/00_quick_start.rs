/// quick start - decide one application with test doubles
use loan_decisioning_rs::{
    LoanAmount, LoanApplication, LoanApplicationProcessor, LoanProduct, MockCreditScorer,
    MockIdentityVerifier, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .init();

    let mut application = LoanApplication::builder()
        .id(42)
        .product(LoanProduct::new(99, "Loan", Rate::from_percentage_decimal(dec!(5.25))))
        .amount(LoanAmount::new("usd", Money::from_major(200_000))?)
        .applicant_name("Sarah")
        .applicant_age(25)
        .applicant_address("133 Pluralsight Drive, Draper, Utah")
        .applicant_salary(Money::from_major(65_000))
        .build()?;

    let processor = LoanApplicationProcessor::new(
        MockIdentityVerifier::returning(true),
        MockCreditScorer::returning(300),
    );

    let decision = processor.process(Some(&mut application))?;
    println!("decision: {:?}", decision);
    println!("accepted: {}", application.is_accepted());

    Ok(())
}
