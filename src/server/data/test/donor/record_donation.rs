use super::*;

/// Tests refreshing the donor's last donation timestamp.
///
/// Expected: Ok(true) and the timestamp stored on the donor row
#[tokio::test]
async fn sets_last_donation_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_donor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, donor) = factory::create_donor_with_user(db).await?;
    assert!(donor.last_donation_at.is_none());

    let donated_at = Utc::now() - Duration::minutes(5);
    let repo = DonorRepository::new(db);
    let updated = repo.record_donation(donor.id, donated_at).await?;

    assert!(updated);
    let stored = entity::prelude::Donor::find_by_id(donor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.last_donation_at, Some(donated_at));

    Ok(())
}

/// Tests recording a donation for a donor that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_donor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let updated = repo.record_donation(7, Utc::now()).await?;

    assert!(!updated);

    Ok(())
}
