//! End-to-end message resolution tests
//!
//! These tests drive the validator the way an application would: a type
//! describes its shape, reports failures through `FailureSource`, and the
//! validator turns them into final error messages.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::OnceLock;
use valkit_core::{
    DefaultErrorFormatter, Describe, ErrorFormatter, FailureSource, FieldFailure, FieldKind,
    FieldShape, MessageRegistry, TypeShape, Validator,
};

struct Address {
    street: String,
    zip: String,
}

struct User {
    username: String,
    email: String,
    age: u32,
    addresses: Vec<Address>,
}

impl Describe for Address {
    fn shape() -> &'static TypeShape {
        static SHAPE: OnceLock<TypeShape> = OnceLock::new();
        SHAPE.get_or_init(|| {
            TypeShape::new("Address")
                .field(
                    FieldShape::scalar("Street")
                        .constraint_message("required", "Street is required for {field}"),
                )
                .field(FieldShape::scalar("Zip"))
        })
    }
}

impl Describe for User {
    fn shape() -> &'static TypeShape {
        static SHAPE: OnceLock<TypeShape> = OnceLock::new();
        SHAPE.get_or_init(|| {
            TypeShape::new("User")
                .field(
                    FieldShape::scalar("Username")
                        .constraint_message("required", "Username is mandatory")
                        .constraint_message(
                            "min",
                            "Username must have at least {param} characters",
                        ),
                )
                .field(FieldShape::scalar("Email").message("Email address has an issue"))
                .field(FieldShape::scalar("Age"))
                .field(FieldShape::new(
                    "Addresses",
                    FieldKind::sequence(FieldKind::of::<Address>()),
                ))
        })
    }
}

// Stand-in for the external constraint evaluator.
impl FailureSource for User {
    fn failures(&self) -> Vec<FieldFailure> {
        let mut failures = Vec::new();

        if self.username.is_empty() {
            failures.push(FieldFailure::from_locator("User.Username", "required"));
        } else if self.username.len() < 3 {
            failures.push(
                FieldFailure::from_locator("User.Username", "min")
                    .with_param("3")
                    .with_actual(self.username.as_str()),
            );
        }
        if !self.email.contains('@') {
            failures.push(
                FieldFailure::from_locator("User.Email", "email").with_actual(self.email.as_str()),
            );
        }
        if self.age < 18 {
            failures.push(
                FieldFailure::from_locator("User.Age", "gte")
                    .with_param("18")
                    .with_actual(self.age),
            );
        }
        for (i, address) in self.addresses.iter().enumerate() {
            if address.street.is_empty() {
                let locator = format!("User.Addresses[{}].Street", i);
                failures.push(FieldFailure::from_locator(&locator, "required"));
            }
            if address.zip.len() != 5 {
                failures.push(
                    FieldFailure::from_locator(&format!("User.Addresses[{}].Zip", i), "len")
                        .with_param("5")
                        .with_actual(address.zip.as_str()),
                );
            }
        }

        failures
    }
}

fn valid_user() -> User {
    User {
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        age: 30,
        addresses: vec![Address {
            street: "Main St".to_string(),
            zip: "12345".to_string(),
        }],
    }
}

#[test]
fn test_valid_value_passes() {
    let validator = Validator::new();
    assert!(validator.validate(&valid_user()).is_ok());
}

#[test]
fn test_struct_annotations_and_fallbacks() {
    let mut validator = Validator::new();
    validator
        .set_constraint_default("gte", "{field} must be {param} or older")
        .set_constraint_message(
            "Addresses[0].Zip",
            "len",
            "Zip codes have {param} digits, got '{value}'",
        );

    let user = User {
        username: "jo".to_string(),
        email: "nope".to_string(),
        age: 12,
        addresses: vec![
            Address { street: String::new(), zip: "123".to_string() },
            Address { street: "Side St".to_string(), zip: "9".to_string() },
        ],
    };

    let errors = validator.validate(&user).unwrap_err();
    let messages: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| (e.path.as_str(), e.message.as_str()))
        .collect();

    assert_eq!(
        messages,
        vec![
            ("Username", "Username must have at least 3 characters"),
            ("Email", "Email address has an issue"),
            ("Age", "Age must be 18 or older"),
            ("Addresses[0].Street", "Street is required for Street"),
            ("Addresses[0].Zip", "Zip codes have 5 digits, got '123'"),
            ("Addresses[1].Zip", "Zip codes have 5 digits, got '9'"),
        ]
    );
}

#[test]
fn test_precedence_end_to_end() {
    let with_override = TypeShape::new("Form")
        .field(FieldShape::scalar("Name").constraint_message("min", "struct override"));
    let without_override = TypeShape::new("Form").field(FieldShape::scalar("Name"));

    let failure = FieldFailure::from_locator("Form.Name", "min").with_param("3");

    let mut validator = Validator::new();
    validator
        .set_constraint_message("Name", "min", "registry entry")
        .set_constraint_default("min", "constraint default");

    assert_eq!(validator.resolve(&failure, Some(&with_override)).message, "struct override");
    assert_eq!(validator.resolve(&failure, Some(&without_override)).message, "registry entry");

    let bare = validator.derive_with_messages(MessageRegistry::new());
    assert_eq!(bare.resolve(&failure, Some(&without_override)).message, "constraint default");

    let mut global_only = Validator::new();
    global_only.set_default_message("Invalid value");
    assert_eq!(global_only.resolve(&failure, Some(&without_override)).message, "Invalid value");
}

#[test]
fn test_nested_array_custom_params() {
    let mut validator = Validator::new();
    validator
        .add_custom_param("app", "Shop")
        .set_constraint_message(
            "orders[0].items[0].sku",
            "required",
            "{app}: item {field} missing in {{order}}",
        );

    let failures = vec![
        FieldFailure::new("sku", "orders[0].items[1].sku", "required"),
        FieldFailure::new("sku", "orders[3].items[7].sku", "required"),
    ];
    let errors = validator.resolve_all(&failures, None);

    for error in &errors {
        assert_eq!(error.message, "Shop: item sku missing in {order}");
    }
    assert_eq!(errors.errors[1].path, "orders[3].items[7].sku");
}

#[test]
fn test_projections_and_formatter() {
    let mut validator = Validator::new();
    validator.set_constraint_default("required", "{field} is required");

    let user = User {
        username: String::new(),
        email: "bad".to_string(),
        age: 40,
        addresses: vec![Address { street: String::new(), zip: "1".to_string() }],
    };
    let errors = validator.validate(&user).unwrap_err();

    let grouped = errors.group_by_path();
    assert_eq!(grouped.len(), 4);
    assert_eq!(errors.errors_for_path("Addresses[0].Street").len(), 1);

    let body = DefaultErrorFormatter.format(&errors);
    assert_eq!(body["status"], "error");
    assert_eq!(body["errors"]["Username"], json!(["Username is mandatory"]));
    assert_eq!(body["errors"]["Addresses[0].Zip"], json!(["Invalid value"]));
}

#[test]
fn test_unshaped_validation_skips_annotations() {
    let validator = Validator::new();
    let user = User {
        username: String::new(),
        ..valid_user()
    };
    let errors = validator.validate_unshaped(&user).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors[0].message, "Invalid value");
}

#[test]
fn test_mismatched_shape_falls_through() {
    let shape =
        TypeShape::new("Other").field(FieldShape::scalar("Unrelated").message("never used"));
    let validator = Validator::new();

    let failure = FieldFailure::from_locator("User.Addresses[0].Street", "required");
    assert_eq!(validator.resolve(&failure, Some(&shape)).message, "Invalid value");
}
