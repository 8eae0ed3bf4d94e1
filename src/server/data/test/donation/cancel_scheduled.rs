use super::*;

/// Tests cancelling a request's scheduled donation.
///
/// Expected: Ok(1) and the donation marked `Cancelled`
#[tokio::test]
async fn cancels_scheduled_donation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    factory::donation::create_donation(db, &request, DonationStatus::Scheduled).await?;

    let repo = DonationRepository::new(db);
    let cancelled = repo.cancel_scheduled(request.id).await?;

    assert_eq!(cancelled, 1);
    let donations = repo.find_by_request(request.id).await?;
    assert_eq!(donations[0].status, DonationStatus::Cancelled);

    Ok(())
}

/// Tests that completed donations are left alone.
///
/// Expected: Ok(0) and the donation still `Completed`
#[tokio::test]
async fn leaves_completed_donation_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    factory::donation::create_donation(db, &request, DonationStatus::Completed).await?;

    let repo = DonationRepository::new(db);
    let cancelled = repo.cancel_scheduled(request.id).await?;

    assert_eq!(cancelled, 0);
    let donations = repo.find_by_request(request.id).await?;
    assert_eq!(donations[0].status, DonationStatus::Completed);

    Ok(())
}
