use exhibition_registry::{AppError, ParticipantForm};

mod common;

fn blank_one(field: usize, value: &str) -> ParticipantForm {
    let mut form = common::alice_form();
    match field {
        0 => form.registration_id = value.to_string(),
        1 => form.name = value.to_string(),
        2 => form.faculty = value.to_string(),
        3 => form.project_title = value.to_string(),
        4 => form.contact = value.to_string(),
        _ => form.email = value.to_string(),
    }
    form
}

#[test]
fn test_every_empty_field_rejected_without_writing() {
    let env = common::setup_test_registry();

    for field in 0..6 {
        for blank in ["", " ", "\t \n"] {
            let form = blank_one(field, blank);
            let result = env.registry.register(&form, None);
            assert!(
                matches!(result, Err(AppError::EmptyField(_))),
                "field {} with {:?} should be rejected",
                field,
                blank
            );
        }
    }

    assert!(!env.backend.exists("R001").unwrap());
}

#[test]
fn test_all_fields_empty_lists_all_of_them() {
    let env = common::setup_test_registry();

    match env.registry.register(&ParticipantForm::default(), None) {
        Err(AppError::EmptyField(fields)) => assert_eq!(fields.len(), 6),
        other => panic!("expected EmptyField, got {:?}", other),
    }
}

#[test]
fn test_invalid_emails_rejected_without_writing() {
    let env = common::setup_test_registry();

    for email in [
        "alice",
        "alice@uni",
        "@uni.edu",
        "alice@",
        "alice@@uni.edu",
        "alice@uni..edu",
        "alice smith@uni.edu",
    ] {
        let mut form = common::alice_form();
        form.email = email.to_string();
        assert!(
            matches!(
                env.registry.register(&form, None),
                Err(AppError::InvalidEmail(_))
            ),
            "'{}' should be rejected",
            email
        );
    }

    assert!(!env.backend.exists("R001").unwrap());
}

#[test]
fn test_update_applies_same_validation() {
    let env = common::setup_test_registry();
    let original = env.registry.register(&common::alice_form(), None).unwrap();

    let mut bad = common::alice_form();
    bad.email = "nope".to_string();
    assert!(matches!(
        env.registry.update(&bad, None),
        Err(AppError::InvalidEmail(_))
    ));

    let mut blank = common::alice_form();
    blank.name = String::new();
    assert!(matches!(
        env.registry.update(&blank, None),
        Err(AppError::EmptyField(_))
    ));

    assert_eq!(env.registry.search("R001").unwrap().participant, original);
}

#[test]
fn test_validation_errors_have_user_messages() {
    let env = common::setup_test_registry();

    let err = env
        .registry
        .register(&blank_one(1, ""), None)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.user_message(), "Please fill in all fields.");

    let mut form = common::alice_form();
    form.email = "alice.uni.edu".to_string();
    let err = env.registry.register(&form, None).unwrap_err();
    assert_eq!(err.user_message(), "Invalid email format.");
}
