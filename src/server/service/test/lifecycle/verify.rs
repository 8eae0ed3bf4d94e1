use super::*;

/// Tests verifying a request the donor has not accepted yet.
///
/// Expected: Failed(NotAccepted) even with the correct code
#[tokio::test]
async fn fails_before_acceptance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::seed_all(db).await?;
    let (_user, _donor, request) = factory::helpers::create_request_with_dependencies(db).await?;
    let code = request.otp_code.clone().unwrap();
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service
        .verify_otp_and_complete(request.id, &code)
        .await
        .unwrap();

    assert_eq!(outcome, OtpVerification::Failed(OtpFailure::NotAccepted));
    let stored = service.get_request(request.id).await.unwrap();
    assert_eq!(stored.status, RequestStatus::Pending);

    Ok(())
}

/// Tests verifying a request that does not exist.
///
/// Expected: Failed(NotAccepted)
#[tokio::test]
async fn fails_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service.verify_otp_and_complete(31, "123456").await.unwrap();

    assert_eq!(outcome, OtpVerification::Failed(OtpFailure::NotAccepted));

    Ok(())
}

/// Tests submitting a wrong code for an accepted request.
///
/// Expected: Failed(InvalidOtp) and nothing mutated
#[tokio::test]
async fn wrong_code_mutates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::seed_all(db).await?;
    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .status(RequestStatus::Accepted)
        .otp("111111", Utc::now() + Duration::minutes(20))
        .build()
        .await?;
    factory::donation::create_donation(db, &request, DonationStatus::Scheduled).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service
        .verify_otp_and_complete(request.id, "222222")
        .await
        .unwrap();

    assert_eq!(outcome, OtpVerification::Failed(OtpFailure::InvalidOtp));
    assert_eq!(
        service.get_request(request.id).await.unwrap().status,
        RequestStatus::Accepted
    );
    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].status, DonationStatus::Scheduled);
    let stock = InventoryRepository::new(db)
        .find_by_blood_group(request.blood_group)
        .await?
        .unwrap();
    assert_eq!(stock.units, 0);

    Ok(())
}

/// Tests submitting the correct code after it expired.
///
/// Expected: Failed(Expired) and nothing mutated
#[tokio::test]
async fn expired_code_mutates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::seed_all(db).await?;
    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .status(RequestStatus::Accepted)
        .otp("333333", Utc::now() - Duration::minutes(1))
        .build()
        .await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service
        .verify_otp_and_complete(request.id, "333333")
        .await
        .unwrap();

    assert_eq!(outcome, OtpVerification::Failed(OtpFailure::Expired));
    assert_eq!(
        service.get_request(request.id).await.unwrap().status,
        RequestStatus::Accepted
    );
    assert!(DonationRepository::new(db)
        .find_by_request(request.id)
        .await?
        .is_empty());
    let stock = InventoryRepository::new(db)
        .find_by_blood_group(request.blood_group)
        .await?
        .unwrap();
    assert_eq!(stock.units, 0);

    Ok(())
}

/// Tests completing a donation with the correct, unexpired code.
///
/// Verifies the request is completed, the scheduled donation becomes the single
/// completed donation, inventory goes up by one and the donor's last donation time is
/// refreshed.
///
/// Expected: Completed with inventory + 1
#[tokio::test]
async fn completes_with_valid_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::create_entry(db, BloodGroup::ANegative, 3).await?;
    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .blood_group(BloodGroup::ANegative)
        .status(RequestStatus::Accepted)
        .otp("444444", Utc::now() + Duration::minutes(10))
        .build()
        .await?;
    factory::donation::create_donation(db, &request, DonationStatus::Scheduled).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service
        .verify_otp_and_complete(request.id, "444444")
        .await
        .unwrap();

    let OtpVerification::Completed(completed) = outcome else {
        panic!("expected completion, got {:?}", outcome);
    };
    assert_eq!(completed.request.status, RequestStatus::Completed);
    assert_eq!(completed.donation.status, DonationStatus::Completed);
    assert_eq!(completed.donation.units_donated, Some(1.0));
    assert_eq!(completed.inventory.units, 4);

    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].status, DonationStatus::Completed);

    let stored_donor = entity::prelude::Donor::find_by_id(donor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(
        stored_donor.last_donation_at,
        Some(completed.donation.donated_at)
    );

    Ok(())
}

/// Tests completing an accepted request that has no scheduled donation.
///
/// Expected: Completed with exactly one completed donation inserted
#[tokio::test]
async fn inserts_donation_when_none_scheduled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inventory::seed_all(db).await?;
    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .status(RequestStatus::Accepted)
        .build()
        .await?;
    let code = request.otp_code.clone().unwrap();
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let outcome = service
        .verify_otp_and_complete(request.id, &code)
        .await
        .unwrap();

    assert!(matches!(outcome, OtpVerification::Completed(_)));
    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].status, DonationStatus::Completed);
    assert_eq!(donations[0].blood_group, request.blood_group);

    Ok(())
}

/// Tests completion when the blood group has no inventory row.
///
/// Expected: Err(IntegrityErr) with the request, donation and donor rolled back
#[tokio::test]
async fn missing_inventory_row_rolls_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_lifecycle_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor) = factory::create_donor_with_user(db).await?;
    let request = factory::blood_request::BloodRequestFactory::new(db, donor.id)
        .blood_group(BloodGroup::BNegative)
        .status(RequestStatus::Accepted)
        .otp("555555", Utc::now() + Duration::minutes(10))
        .build()
        .await?;
    factory::donation::create_donation(db, &request, DonationStatus::Scheduled).await?;
    let dispatcher = dispatcher(db);
    let service = RequestLifecycleService::new(db, &dispatcher);

    let result = service.verify_otp_and_complete(request.id, "555555").await;

    assert!(matches!(result, Err(AppError::IntegrityErr(_))));
    assert_eq!(
        service.get_request(request.id).await.unwrap().status,
        RequestStatus::Accepted
    );
    let donations = DonationRepository::new(db).find_by_request(request.id).await?;
    assert_eq!(donations[0].status, DonationStatus::Scheduled);
    let stored_donor = entity::prelude::Donor::find_by_id(donor.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored_donor.last_donation_at.is_none());

    Ok(())
}
