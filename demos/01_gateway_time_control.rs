/// gateway time control - last check time follows the injected time provider
use chrono::{Duration, TimeZone, Utc};
use loan_decisioning_rs::{
    IdentityVerifierServiceGateway, LoanAmount, LoanApplication, LoanApplicationProcessor,
    LoanProduct, MockCreditScorer, Money, Rate, SafeTimeProvider, StubTransport, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let gateway = IdentityVerifierServiceGateway::new(StubTransport::returning(true), &time);
    let processor = LoanApplicationProcessor::new(gateway, MockCreditScorer::returning(640));

    for (id, salary) in [(1, 90_000), (2, 70_000)] {
        let mut application = LoanApplication::new(
            id,
            LoanProduct::new(7, "Personal", Rate::from_percentage(9)),
            LoanAmount::new("EUR", Money::from_major(15_000))?,
            "Alex",
            41,
            "1 Main Street",
            Money::from_major(salary),
        )?;

        let decision = processor.process(Some(&mut application))?;
        println!(
            "application {} -> {:?}, checked at {:?}",
            id,
            decision,
            processor.verifier().last_check_time()
        );

        controller.advance(Duration::days(1));
    }

    println!("recorded {} decisions", processor.take_events().len());
    Ok(())
}
