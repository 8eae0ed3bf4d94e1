use super::*;

/// Tests resolving a donor's contact details.
///
/// Verifies that the donor lookup joins the owning user and returns its name,
/// phone number and user key.
///
/// Expected: Ok(Some) with contact details from the user row
#[tokio::test]
async fn resolves_name_phone_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_donor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Dana Donor")
        .phone("+15550199")
        .build()
        .await?;
    let donor = factory::create_donor(db, user.id).await?;

    let repo = DonorRepository::new(db);
    let contact = repo.find_contact(donor.id).await?.unwrap();

    assert_eq!(contact.donor_id, donor.id);
    assert_eq!(contact.user_id, user.id);
    assert_eq!(contact.name, "Dana Donor");
    assert_eq!(contact.phone, "+15550199");
    assert!(contact.available);

    Ok(())
}

/// Tests looking up a donor that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_donor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_donor_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DonorRepository::new(db);
    let contact = repo.find_contact(42).await?;

    assert!(contact.is_none());

    Ok(())
}
