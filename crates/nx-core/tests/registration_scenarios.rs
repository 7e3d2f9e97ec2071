use nx_core::validation::rules;
use nx_core::{validate, AccountType, FormField, RegistrationForm, RegistrationRequest, TradeType};

fn bob() -> RegistrationForm {
    RegistrationForm::new()
        .with_username("bob")
        .with_email("bob@x.com")
        .with_password("Abcdef12")
        .with_phone_number("0412345678")
        .with_account_type("BUSINESS")
        .with_abn("12345678901")
        .with_address("1 Main St")
}

#[test]
fn bob_business_scenario_is_valid_and_builds_business_payload() {
    let form = bob();
    assert!(validate(&form).is_empty());

    let request = RegistrationRequest::from_valid_form(&form).expect("valid form builds");
    assert_eq!(request.account_type(), AccountType::Business);
}

#[test]
fn bob_with_three_digit_abn_yields_exact_abn_message() {
    let errors = validate(&bob().with_abn("123"));

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FormField::Abn),
        Some("Invalid ABN. It must be exactly 11 digits.")
    );
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        serde_json::json!({ "abn": "Invalid ABN. It must be exactly 11 digits." })
    );
}

#[test]
fn unset_account_type_never_flags_conditional_fields() {
    let form = RegistrationForm::new()
        .with_username("bob")
        .with_email("bob@x.com")
        .with_password("Abcdef12")
        .with_phone_number("0412345678")
        .with_account_type("");

    let errors = validate(&form);
    assert!(errors.contains(FormField::AccountType));
    for field in [
        FormField::Abn,
        FormField::Address,
        FormField::FirstName,
        FormField::LastName,
        FormField::Trade,
    ] {
        assert!(!errors.contains(field), "{field} must not be flagged");
    }
}

#[test]
fn service_provider_trade_rules() {
    let provider = bob()
        .with_account_type("SERVICEPROVIDER")
        .with_first_name("Bob")
        .with_last_name("Builder");

    let missing = validate(&provider.clone().with_trade(""));
    assert_eq!(missing.get(FormField::Trade), Some(rules::TRADE_REQUIRED));

    let unknown = validate(&provider.clone().with_trade("ASTRONAUT"));
    assert_eq!(unknown.get(FormField::Trade), Some(rules::TRADE_INVALID));

    let set = provider.with_trade(TradeType::Electrician.as_str());
    assert!(validate(&set).is_empty());
    let request = RegistrationRequest::from_valid_form(&set).unwrap();
    assert_eq!(request.account_type(), AccountType::ServiceProvider);
}
