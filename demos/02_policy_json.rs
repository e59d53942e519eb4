/// policy json - load thresholds from configuration
use loan_decisioning_rs::{
    DecisionPolicy, LoanAmount, LoanApplication, LoanApplicationProcessor, LoanProduct,
    MockCreditScorer, MockIdentityVerifier, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let policy = DecisionPolicy::from_json(
        r#"{ "minimum_salary": "40000", "minimum_credit_score": 600 }"#,
    )?;
    println!("policy:\n{}", policy.to_json()?);

    let processor = LoanApplicationProcessor::with_policy(
        MockIdentityVerifier::returning(true),
        MockCreditScorer::returning(580),
        policy,
    );

    let mut application = LoanApplication::new(
        3,
        LoanProduct::new(12, "Auto", Rate::from_percentage(6)),
        LoanAmount::new("usd", Money::from_major(25_000))?,
        "Sam",
        33,
        "9 Elm Road",
        Money::from_major(45_000),
    )?;

    let decision = processor.process(Some(&mut application))?;
    println!("decision: {:?} (accepted: {})", decision, application.is_accepted());

    Ok(())
}
